use crate::scene::{NodeType, SceneNode, StrokeAlign, StrokeWeight};
use crate::style::format::{add_px, format_number};
use crate::style::paint::{resolve_paints, PaintResolver};
use crate::style::shorthand::four_value_shortcut;
use crate::types::PropMap;

/// Corner rounding as `borderRadius`.
///
/// A uniform radius wins; independent corners are reduced with the four-value
/// shortcut (top-left, top-right, bottom-right, bottom-left); a plain ellipse
/// becomes `50%`. All-zero corners emit nothing.
pub fn get_border_radius_props(node: &SceneNode) -> PropMap {
    let mut props = PropMap::new();

    if let Some(radius) = add_px(node.corner_radius) {
        props.insert("borderRadius", radius);
        return props;
    }

    if let Some([top_left, top_right, bottom_right, bottom_left]) = node.corner_radii() {
        let shortcut = four_value_shortcut(top_left, top_right, bottom_right, bottom_left);
        if shortcut != "0" {
            props.insert("borderRadius", shortcut);
        }
        return props;
    }

    // Rings keep their shape through svg export, only plain ovals round here
    if node.node_type == NodeType::Ellipse && node.inner_radius() == 0.0 {
        props.insert("borderRadius", "50%");
    }
    props
}

/// Strokes as `outline`, `border` or per-side `borderTop`/`Right`/`Bottom`/`Left`.
///
/// Center and outside strokes (and every stroke on a line) become an outline,
/// which leaves the layout box untouched; inside strokes become a border.
pub fn get_border_props(node: &SceneNode, resolver: &dyn PaintResolver) -> PropMap {
    let mut props = PropMap::new();
    if node.strokes.is_empty() || node.node_type == NodeType::Text {
        return props;
    }

    let style = if node.dash_pattern.is_empty() {
        "solid"
    } else {
        "dashed"
    };
    let paints = resolve_paints(resolver, &node.strokes);
    if paints.is_empty() {
        return props;
    }
    let is_line = node.node_type == NodeType::Line;

    match node.stroke_weight {
        StrokeWeight::Uniform(weight) => {
            if add_px(Some(weight)).is_none() {
                return props;
            }
            let value = stroke_value(style, weight, &paints);

            if is_line || matches!(node.stroke_align, StrokeAlign::Center | StrokeAlign::Outside) {
                props.insert("outline", value);
                if !is_line && node.stroke_align == StrokeAlign::Center {
                    props.insert("outlineOffset", format!("{}px", format_number(-weight / 2.0)));
                } else {
                    props.insert_null("outlineOffset");
                }

                if is_line {
                    // An outline wraps a zero-height line on every side
                    props.insert(
                        "maxW",
                        format!("calc(100% - {}px)", format_number(weight * 2.0)),
                    );
                    props.insert(
                        "transform",
                        format!(
                            "translate({}px, {}px)",
                            format_number(weight),
                            format_number(weight / 2.0)
                        ),
                    );
                }
            } else {
                props.insert("border", value);
            }
        }
        StrokeWeight::Mixed => {
            let sides = [
                ("borderTop", node.stroke_top_weight),
                ("borderRight", node.stroke_right_weight),
                ("borderBottom", node.stroke_bottom_weight),
                ("borderLeft", node.stroke_left_weight),
            ];
            for (key, weight) in sides {
                if let Some(weight) = weight.filter(|w| add_px(Some(*w)).is_some()) {
                    props.insert(key, stroke_value(style, weight, &paints));
                }
            }
        }
    }

    props
}

fn stroke_value(style: &str, weight: f64, paints: &[String]) -> String {
    paints
        .iter()
        .map(|paint| format!("{} {}px {}", style, format_number(weight), paint))
        .collect::<Vec<_>>()
        .join(", ")
}
