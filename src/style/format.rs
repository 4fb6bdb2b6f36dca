/// Format a pixel value with at most two decimals.
///
/// The value is rounded to two decimal places and trailing zeros are dropped:
/// `156.0` gives `"156"`, `156.30` gives `"156.3"`, `156.349` gives `"156.35"`.
pub fn format_number(n: f64) -> String {
    let rounded = (n * 100.0).round() / 100.0;
    // Rounding can produce -0.0
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Encode a length in pixels.
///
/// Returns `None` when the value is absent or not a finite number, and also
/// when it formats to `"0"`: a zero length is "nothing to say", not `"0px"`.
pub fn add_px(value: Option<f64>) -> Option<String> {
    let value = value.filter(|v| v.is_finite())?;
    let formatted = format_number(value);
    if formatted == "0" {
        None
    } else {
        Some(format!("{formatted}px"))
    }
}

/// Encode a length in pixels, falling back to `fallback` where [`add_px`] gives nothing
pub fn add_px_or(value: Option<f64>, fallback: &str) -> String {
    add_px(value).unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(156.0), "156");
        assert_eq!(format_number(156.3), "156.3");
        assert_eq!(format_number(156.35), "156.35");
        assert_eq!(format_number(156.304), "156.3");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-4.5), "-4.5");
    }

    #[test]
    fn test_format_number_no_negative_zero() {
        assert_eq!(format_number(-0.001), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_idempotent() {
        for x in [0.0, 1.0, 156.304, 12.345678, -3.999, 1920.0, 0.005, 99.995] {
            let once = format_number(x);
            let twice = format_number(once.parse::<f64>().unwrap());
            assert_eq!(once, twice, "not idempotent for {x}");
        }
    }

    #[test]
    fn test_add_px() {
        assert_eq!(add_px(Some(10.0)), Some("10px".to_string()));
        assert_eq!(add_px(Some(0.5)), Some("0.5px".to_string()));
        assert_eq!(add_px(Some(-2.0)), Some("-2px".to_string()));
        assert_eq!(add_px(Some(0.0)), None);
        assert_eq!(add_px(Some(0.001)), None);
        assert_eq!(add_px(None), None);
        assert_eq!(add_px(Some(f64::NAN)), None);
    }

    #[test]
    fn test_add_px_or() {
        assert_eq!(add_px_or(Some(0.0), "0"), "0");
        assert_eq!(add_px_or(None, "0"), "0");
        assert_eq!(add_px_or(Some(8.0), "0"), "8px");
        assert_eq!(add_px_or(Some(f64::INFINITY), "auto"), "auto");
    }
}
