use crate::scene::{NodeRef, NodeType, Paint, PaintType, SceneNode};
use crate::types::AssetKind;

/// Decide whether a subtree is exported as a single asset.
///
/// Returns `None` when the node must stay a structured tree, otherwise the
/// export format of the whole subtree. `nested` is set while classifying the
/// descendants of a candidate asset; it lets plain solid shapes join a vector
/// composite.
///
/// Hidden children are ignored throughout. The procedure:
/// 1. documents, pages and sections, text, component sets, grids and
///    smart-animate targets are never assets;
/// 2. vectors, stars and polygons are svg, and so are rings (ellipses with an
///    inner radius);
/// 3. leaves are classified by their fills, see [`classify_leaf`];
/// 4. a wrapper with one child passes the child's classification through,
///    unless the wrapper draws something itself (padding or a visible fill);
/// 5. a group is svg when every child is svg.
pub fn check_asset_node(node: NodeRef<'_>, nested: bool) -> Option<AssetKind> {
    if node.node_type.is_page_like()
        || matches!(node.node_type, NodeType::Text | NodeType::ComponentSet)
        || node.has_grid_layout()
        || is_animation_target(node)
    {
        return None;
    }

    match node.node_type {
        NodeType::Vector | NodeType::Star | NodeType::Polygon => return Some(AssetKind::Svg),
        NodeType::Ellipse if node.inner_radius() != 0.0 => return Some(AssetKind::Svg),
        _ => {}
    }

    let children: Vec<NodeRef<'_>> = node.visible_children().collect();
    match children.as_slice() {
        [] => classify_leaf(&node, nested),
        [child] => {
            if node.has_padding() || node.has_visible_fill() {
                return None;
            }
            check_asset_node(*child, true)
        }
        _ => children
            .iter()
            .all(|child| check_asset_node(*child, true) == Some(AssetKind::Svg))
            .then_some(AssetKind::Svg),
    }
}

/// Smart-animate transitions target the node itself or its parent by name,
/// so both must stay addressable
fn is_animation_target(node: NodeRef<'_>) -> bool {
    node.has_smart_animate() || node.parent().is_some_and(|parent| parent.has_smart_animate())
}

/// Classify a node without visible children from its fills.
///
/// Tiled images and patterns stay CSS backgrounds. A node marked for export
/// is png when it holds exactly one image, structured when it holds several,
/// and svg otherwise (solid-only fills only when nested). An unmarked node is
/// svg only as part of a nested composite with solid, visible fills.
fn classify_leaf(node: &SceneNode, nested: bool) -> Option<AssetKind> {
    let fills: Vec<&Paint> = node.fills.iter().filter(|paint| paint.is_visible()).collect();

    let tiled = fills.iter().any(|paint| {
        paint.paint_type == PaintType::Pattern
            || (paint.paint_type == PaintType::Image && paint.is_tiled())
    });
    if tiled {
        return None;
    }

    if node.is_asset {
        let images = fills
            .iter()
            .filter(|paint| paint.paint_type == PaintType::Image)
            .count();
        if fills.len() == 1 && images == 1 {
            return Some(AssetKind::Png);
        }
        if images > 1 {
            return None;
        }
        if fills.iter().all(|paint| paint.paint_type == PaintType::Solid) {
            return nested.then_some(AssetKind::Svg);
        }
        return Some(AssetKind::Svg);
    }

    let solid_and_visible = node
        .fills
        .iter()
        .all(|paint| paint.paint_type == PaintType::Solid && paint.is_visible());
    (nested && solid_and_visible).then_some(AssetKind::Svg)
}
