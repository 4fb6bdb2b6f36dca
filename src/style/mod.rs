/// Style property extractors
///
/// Each extractor reads one facet of a scene node and returns a [`PropMap`](crate::types::PropMap):
///
/// - `format`: pixel number formatting shared by every extractor
/// - `shorthand`: four-value and prefixed-space shorthand reducers
/// - `layout`: flex and grid container properties from auto-layout
/// - `spacing`: padding
/// - `sizing`: width/height and min/max constraints
/// - `border`: border radius and strokes
/// - `paint`: paint-to-CSS conversion used by strokes and backgrounds
pub mod border;
pub mod format;
pub mod layout;
pub mod paint;
pub mod shorthand;
pub mod sizing;
pub mod spacing;

// Re-export commonly used functions
pub use border::{get_border_props, get_border_radius_props};
pub use format::{add_px, add_px_or, format_number};
pub use layout::get_auto_layout_props;
pub use paint::{color_to_css, resolve_paints, CssPaints, PaintResolver};
pub use shorthand::{four_value_shortcut, optimize_space};
pub use sizing::{get_layout_props, get_min_max_props};
pub use spacing::get_padding_props;
