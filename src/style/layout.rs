use crate::codegen::check_asset_node;
use crate::scene::{AutoLayout, CounterAxisAlign, LayoutMode, NodeRef, PrimaryAxisAlign};
use crate::style::format::{add_px, add_px_or, format_number};
use crate::types::PropMap;
use log::warn;

/// Derive flex or grid container properties from a node's auto-layout.
///
/// Nothing is emitted for nodes without auto-layout and for nodes that are
/// exported as assets (their children are never rendered).
///
/// - Grid: `display`, `gridTemplateColumns`, `gridTemplateRows`, and either
///   `gap` (equal gaps) or `rowGap` + `columnGap`
/// - Flex: `display`, `flexDir`, `gap`, `justifyContent`, `alignItems`
pub fn get_auto_layout_props(node: NodeRef<'_>) -> PropMap {
    let mut props = PropMap::new();
    let Some(layout) = node.inferred_auto_layout.as_ref() else {
        return props;
    };
    if layout.layout_mode == LayoutMode::None || check_asset_node(node, false).is_some() {
        return props;
    }

    match layout.layout_mode {
        LayoutMode::Grid => grid_props(layout, &mut props),
        LayoutMode::Horizontal | LayoutMode::Vertical => flex_props(node, layout, &mut props),
        LayoutMode::None => {}
        LayoutMode::Unknown => {
            warn!(
                "Unknown layout mode on {} ({}), no layout emitted",
                node.name, node.id
            );
        }
    }
    props
}

fn grid_props(layout: &AutoLayout, props: &mut PropMap) {
    props.insert("display", "grid");
    props.insert_opt("gridTemplateColumns", layout.grid_column_count.map(repeat));
    props.insert_opt("gridTemplateRows", layout.grid_row_count.map(repeat));

    let row_gap = add_px_or(layout.grid_row_gap, "0");
    let column_gap = add_px_or(layout.grid_column_gap, "0");
    if row_gap == column_gap {
        props.insert_opt("gap", add_px(layout.grid_row_gap));
    } else {
        props.insert("rowGap", row_gap);
        props.insert("columnGap", column_gap);
    }
}

fn repeat(count: f64) -> String {
    format!("repeat({}, 1fr)", format_number(count))
}

fn flex_props(node: NodeRef<'_>, layout: &AutoLayout, props: &mut PropMap) {
    props.insert("display", "flex");
    props.insert_opt("flexDir", flex_direction(layout.layout_mode));

    // space-between already distributes children, a gap would fight it
    if node.visible_children().count() >= 2
        && layout.primary_axis_align_items != PrimaryAxisAlign::SpaceBetween
    {
        props.insert_opt("gap", add_px(layout.item_spacing));
    }

    props.insert_opt(
        "justifyContent",
        justify_content(layout.primary_axis_align_items),
    );
    props.insert_opt("alignItems", align_items(layout.counter_axis_align_items));
}

fn flex_direction(mode: LayoutMode) -> Option<&'static str> {
    match mode {
        LayoutMode::Horizontal => Some("row"),
        LayoutMode::Vertical => Some("column"),
        LayoutMode::None | LayoutMode::Grid | LayoutMode::Unknown => None,
    }
}

fn justify_content(align: PrimaryAxisAlign) -> Option<&'static str> {
    match align {
        PrimaryAxisAlign::Min => Some("flex-start"),
        PrimaryAxisAlign::Max => Some("flex-end"),
        PrimaryAxisAlign::Center => Some("center"),
        PrimaryAxisAlign::SpaceBetween => Some("space-between"),
        PrimaryAxisAlign::Unknown => {
            warn!("Unknown primary axis alignment, justifyContent omitted");
            None
        }
    }
}

fn align_items(align: CounterAxisAlign) -> Option<&'static str> {
    match align {
        CounterAxisAlign::Min => Some("flex-start"),
        CounterAxisAlign::Max => Some("flex-end"),
        CounterAxisAlign::Center => Some("center"),
        CounterAxisAlign::Baseline => Some("baseline"),
        CounterAxisAlign::Unknown => {
            warn!("Unknown counter axis alignment, alignItems omitted");
            None
        }
    }
}
