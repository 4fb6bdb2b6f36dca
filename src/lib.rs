//! # fig2ui
//!
//! A library for turning Figma scene trees into UI component descriptors.
//!
//! Each visible node becomes a component (`Box`, `Text`, `Image`, `Svg` or a
//! named component instance) with CSS-like props: flex/grid layout, padding,
//! borders, radii and sizing. Purely decorative subtrees (icons,
//! illustrations) are collapsed into single svg/png assets.
//!
//! ## Example
//!
//! ```
//! use fig2ui::{convert, ConvertOptions};
//!
//! let document = br#"{
//!     "id": "1:1",
//!     "name": "Card",
//!     "type": "FRAME",
//!     "width": 320,
//!     "height": 200,
//!     "paddingTop": 4,
//!     "paddingRight": 8,
//!     "paddingBottom": 4,
//!     "paddingLeft": 8,
//!     "children": [{"id": "1:2", "type": "TEXT", "characters": "Hello"}]
//! }"#;
//!
//! let json = convert(document, &ConvertOptions::default()).unwrap();
//! assert_eq!(json["component"], "Box");
//! assert_eq!(json["props"]["px"], "8px");
//! assert_eq!(json["children"][0]["component"], "Text");
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod scene;
pub mod style;
pub mod types;

// Re-export commonly used items
pub use codegen::{check_asset_node, Converter};
pub use config::ConvertOptions;
pub use error::{ConvertError, Result};
pub use scene::{NodeRef, Scene, SceneNode};
pub use types::{AssetKind, ComponentTag, NodeTree, PropMap, PropValue, TextRun};

use serde_json::Value as JsonValue;

/// Convert a scene document (JSON bytes) into the component tree as JSON
pub fn convert(bytes: &[u8], options: &ConvertOptions) -> Result<JsonValue> {
    let scene = Scene::from_json(bytes)?;
    let tree = convert_scene(&scene, options)?;
    Ok(serde_json::to_value(&tree)?)
}

/// Convert an already loaded scene with the default paint resolver
pub fn convert_scene(scene: &Scene, options: &ConvertOptions) -> Result<NodeTree> {
    Converter::new(options.clone()).convert_scene(scene)
}
