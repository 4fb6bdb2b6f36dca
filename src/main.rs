use anyhow::{bail, Context, Result};
use clap::Parser;
use fig2ui::ConvertOptions;
use log::info;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fig2ui")]
#[command(version, about = "Convert Figma scene trees to UI component descriptors")]
#[command(long_about = "Convert Figma scene trees to UI component descriptors\n\n\
    The input is a JSON scene document: either a single root node with nested\n\
    `children`, or a flat array of nodes linked by `parentId`.\n\
    JSON output is pretty-printed by default with indentation.\n\n  \
    fig2ui scene.json [-o tree.json] [--root <id>] [--compact] [-v]")]
struct Cli {
    /// Input scene JSON file path
    input: PathBuf,

    /// Output JSON file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compact JSON output (default is pretty-printed with indentation)
    #[arg(long)]
    compact: bool,

    /// Build from this node id instead of the document root
    #[arg(long)]
    root: Option<String>,

    /// JSON file with conversion options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width (px) of a full-page frame, sized as 100%
    #[arg(long)]
    page_width: Option<f64>,

    /// Do not build the children of component instances
    #[arg(long)]
    no_expand_instances: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = load_options(&cli)?;

    info!("Reading input file: {}", cli.input.display());
    let bytes = fs::read(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;
    info!("File size: {} bytes", bytes.len());

    let json = fig2ui::convert(&bytes, &options).context("Failed to convert scene document")?;
    info!("Conversion successful!");

    // Format output (pretty by default, compact if flag is set)
    let output = if cli.compact {
        serde_json::to_string(&json)?
    } else {
        serde_json::to_string_pretty(&json)?
    };

    match cli.output.as_ref() {
        Some(path) => {
            info!("Writing output to: {}", path.display());
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            println!("{output}");
        }
    }

    Ok(())
}

/// Options from `--config`, overridden by command line flags
fn load_options(cli: &Cli) -> Result<ConvertOptions> {
    let mut options = match cli.config.as_ref() {
        Some(path) => ConvertOptions::from_file(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?,
        None => ConvertOptions::default(),
    };

    if let Some(root) = cli.root.as_ref() {
        options.root = Some(root.clone());
    }
    if let Some(width) = cli.page_width {
        if !width.is_finite() || width <= 0.0 {
            bail!("--page-width must be a positive number, got {width}");
        }
        options.full_page_width = width;
    }
    if cli.no_expand_instances {
        options.expand_instances = false;
    }

    Ok(options)
}
