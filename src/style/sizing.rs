use crate::config::ConvertOptions;
use crate::scene::{CounterAxisAlign, LayoutMode, NodeRef, SceneNode};
use crate::style::format::add_px;
use crate::types::PropMap;

/// Min/max constraints as `maxW`, `maxH`, `minW`, `minH`
pub fn get_min_max_props(node: &SceneNode) -> PropMap {
    let mut props = PropMap::new();
    props.insert_opt("maxW", add_px(node.max_width));
    props.insert_opt("maxH", add_px(node.max_height));
    props.insert_opt("minW", add_px(node.min_width));
    props.insert_opt("minH", add_px(node.min_height));
    props
}

/// Width and height of a node relative to its parent.
///
/// - Height is omitted when it equals the parent's height.
/// - Inside a width-shrinking parent, a node as wide as its parent or as the
///   enclosing top-level frame becomes `w: "100%"`; other nodes get explicit
///   top-level sizing.
/// - Elsewhere only the height is emitted.
/// - Top-level nodes get explicit sizing, with full-page frames as `w: "100%"`.
pub fn get_layout_props(node: NodeRef<'_>, options: &ConvertOptions) -> PropMap {
    let parent = match node.parent() {
        Some(parent) if !node.is_top_level() => parent,
        _ => return top_level_sizing(&node, options),
    };

    let mut props = PropMap::new();
    if !same_length(node.height, parent.height) {
        props.insert_opt("h", add_px(node.height));
    }

    if !shrinks_child_width(&parent) {
        return props;
    }

    if same_length(node.width, parent.width) || same_length(node.width, node.root_frame().width) {
        props.insert("w", "100%");
        return props;
    }

    top_level_sizing(&node, options)
}

fn top_level_sizing(node: &SceneNode, options: &ConvertOptions) -> PropMap {
    let mut props = PropMap::new();
    if same_length(node.width, Some(options.full_page_width)) {
        props.insert("w", "100%");
    } else {
        props.insert_opt("w", add_px(node.width));
    }
    props.insert_opt("h", add_px(node.height));
    props
}

/// Vertical stacks centered on the cross axis let children hug their own width
fn shrinks_child_width(parent: &SceneNode) -> bool {
    parent.inferred_auto_layout.as_ref().is_some_and(|layout| {
        layout.layout_mode == LayoutMode::Vertical
            && layout.counter_axis_align_items == CounterAxisAlign::Center
    })
}

fn same_length(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}
