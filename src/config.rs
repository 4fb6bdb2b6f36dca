use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Canonical width of a full-page design frame, in pixels
pub const DEFAULT_FULL_PAGE_WIDTH: f64 = 1920.0;

/// Options controlling a conversion run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Top-level frames this wide are sized as `w: "100%"`
    pub full_page_width: f64,
    /// Build from this node id instead of the document root
    pub root: Option<String>,
    /// Build the children of component instances
    pub expand_instances: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            full_page_width: DEFAULT_FULL_PAGE_WIDTH,
            root: None,
            expand_instances: true,
        }
    }
}

impl ConvertOptions {
    /// Read options from a JSON file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
