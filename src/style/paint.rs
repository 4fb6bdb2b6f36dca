use crate::scene::{Color, Paint, PaintType};
use crate::style::format::format_number;

/// Converts a single paint into a CSS paint expression.
///
/// The border and background extractors only decide *where* a paint goes;
/// turning it into CSS is delegated to an implementation of this trait.
pub trait PaintResolver {
    /// Returns `None` when the paint has no CSS equivalent
    fn paint_to_css(&self, paint: &Paint) -> Option<String>;
}

/// Default resolver: hex colors, linear/radial gradients and image urls
#[derive(Debug, Clone, Copy, Default)]
pub struct CssPaints;

impl PaintResolver for CssPaints {
    fn paint_to_css(&self, paint: &Paint) -> Option<String> {
        match paint.paint_type {
            PaintType::Solid => paint.color.map(|color| color_to_css(&color, paint.opacity)),
            PaintType::GradientLinear => linear_gradient(paint),
            PaintType::GradientRadial => {
                gradient_stops(paint).map(|stops| format!("radial-gradient({stops})"))
            }
            PaintType::Image => paint
                .image_hash
                .as_ref()
                .map(|hash| format!("url({hash})")),
            _ => None,
        }
    }
}

/// Resolve the visible paints of a list, top-most first.
///
/// The host stores paints bottom-most first, while CSS layering lists the
/// top-most layer first, hence the reversal.
pub fn resolve_paints(resolver: &dyn PaintResolver, paints: &[Paint]) -> Vec<String> {
    paints
        .iter()
        .rev()
        .filter(|paint| paint.is_visible())
        .filter_map(|paint| resolver.paint_to_css(paint))
        .collect()
}

/// Convert a color to a CSS hex string.
///
/// Returns #rrggbb when the effective alpha (color alpha times paint opacity)
/// is 1.0, #rrggbbaa otherwise.
pub fn color_to_css(color: &Color, opacity: f64) -> String {
    let alpha = color.a * opacity;
    let r = float_to_byte(color.r);
    let g = float_to_byte(color.g);
    let b = float_to_byte(color.b);

    if (alpha - 1.0).abs() < 0.001 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, float_to_byte(alpha))
    }
}

/// Convert a float in range 0.0-1.0 to a byte in range 0-255
fn float_to_byte(value: f64) -> u8 {
    let clamped = value.clamp(0.0, 1.0);
    (clamped * 255.0).round() as u8
}

fn gradient_stops(paint: &Paint) -> Option<String> {
    if paint.gradient_stops.is_empty() {
        return None;
    }
    let stops: Vec<String> = paint
        .gradient_stops
        .iter()
        .map(|stop| {
            format!(
                "{} {}%",
                color_to_css(&stop.color, paint.opacity),
                format_number(stop.position * 100.0)
            )
        })
        .collect();
    Some(stops.join(", "))
}

fn linear_gradient(paint: &Paint) -> Option<String> {
    let stops = gradient_stops(paint)?;
    Some(format!(
        "linear-gradient({}deg, {})",
        format_number(gradient_angle(paint)),
        stops
    ))
}

/// CSS angle of a linear gradient: 0deg points up, 90deg points right.
///
/// Derived from the first two handle positions; 180deg (top to bottom) when
/// they are missing.
fn gradient_angle(paint: &Paint) -> f64 {
    match paint.gradient_handle_positions.as_slice() {
        [start, end, ..] => {
            let degrees = (end.x - start.x).atan2(start.y - end.y).to_degrees();
            degrees.rem_euclid(360.0)
        }
        _ => 180.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paint(value: serde_json::Value) -> Paint {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_float_to_byte() {
        assert_eq!(float_to_byte(0.0), 0);
        assert_eq!(float_to_byte(1.0), 255);
        assert_eq!(float_to_byte(0.5), 128);
        assert_eq!(float_to_byte(0.8725961446762085), 223);
        assert_eq!(float_to_byte(-0.5), 0);
        assert_eq!(float_to_byte(1.5), 255);
    }

    #[test]
    fn test_solid_paint() {
        let opaque = paint(json!({
            "type": "SOLID",
            "color": {"r": 0.8725961446762085, "g": 0.06292760372161865, "b": 0.06292760372161865}
        }));
        let translucent = paint(json!({
            "type": "SOLID",
            "opacity": 0.5,
            "color": {"r": 0, "g": 0, "b": 0, "a": 1}
        }));

        assert_eq!(CssPaints.paint_to_css(&opaque).as_deref(), Some("#df1010"));
        assert_eq!(
            CssPaints.paint_to_css(&translucent).as_deref(),
            Some("#00000080")
        );
    }

    #[test]
    fn test_linear_gradient() {
        let p = paint(json!({
            "type": "GRADIENT_LINEAR",
            "gradientHandlePositions": [{"x": 0.0, "y": 0.5}, {"x": 1.0, "y": 0.5}],
            "gradientStops": [
                {"position": 0, "color": {"r": 1, "g": 1, "b": 1}},
                {"position": 1, "color": {"r": 0, "g": 0, "b": 0}}
            ]
        }));

        assert_eq!(
            CssPaints.paint_to_css(&p).as_deref(),
            Some("linear-gradient(90deg, #ffffff 0%, #000000 100%)")
        );
    }

    #[test]
    fn test_linear_gradient_default_angle() {
        let p = paint(json!({
            "type": "GRADIENT_LINEAR",
            "gradientStops": [{"position": 0.25, "color": {"r": 1, "g": 0, "b": 0}}]
        }));

        assert_eq!(
            CssPaints.paint_to_css(&p).as_deref(),
            Some("linear-gradient(180deg, #ff0000 25%)")
        );
    }

    #[test]
    fn test_radial_gradient_and_image() {
        let radial = paint(json!({
            "type": "GRADIENT_RADIAL",
            "gradientStops": [{"position": 0.5, "color": {"r": 0, "g": 0, "b": 1}}]
        }));
        let image = paint(json!({"type": "IMAGE", "imageHash": "abc123", "scaleMode": "FILL"}));
        let video = paint(json!({"type": "VIDEO"}));

        assert_eq!(
            CssPaints.paint_to_css(&radial).as_deref(),
            Some("radial-gradient(#0000ff 50%)")
        );
        assert_eq!(CssPaints.paint_to_css(&image).as_deref(), Some("url(abc123)"));
        assert_eq!(CssPaints.paint_to_css(&video), None);
    }

    #[test]
    fn test_resolve_paints_reverses_and_skips_hidden() {
        let paints: Vec<Paint> = serde_json::from_value(json!([
            {"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}},
            {"type": "SOLID", "visible": false, "color": {"r": 0, "g": 1, "b": 0}},
            {"type": "SOLID", "opacity": 0, "color": {"r": 0, "g": 1, "b": 0}},
            {"type": "SOLID", "color": {"r": 0, "g": 0, "b": 1}}
        ]))
        .unwrap();

        assert_eq!(
            resolve_paints(&CssPaints, &paints),
            vec!["#0000ff".to_string(), "#ff0000".to_string()]
        );
    }
}
