pub mod node;
pub mod tree;

// Re-export commonly used items
pub use node::{
    AutoLayout, Color, CounterAxisAlign, LayoutMode, NodeType, Paint, PaintType,
    PrimaryAxisAlign, SceneNode, StrokeAlign, StrokeWeight,
};
pub use tree::{NodeId, NodeRef, Scene};
