use crate::style::format::add_px_or;
use crate::types::PropMap;

/// Collapse four box values into the shortest CSS shorthand string.
///
/// Values are taken in top/right/bottom/left order and each one is encoded
/// with [`add_px_or`] and a `"0"` fallback, so zero sides appear as `0`.
///
/// # Examples
/// ```
/// use fig2ui::style::four_value_shortcut;
///
/// assert_eq!(four_value_shortcut(Some(4.0), Some(4.0), Some(4.0), Some(4.0)), "4px");
/// assert_eq!(four_value_shortcut(Some(4.0), Some(8.0), Some(4.0), Some(8.0)), "4px 8px");
/// assert_eq!(four_value_shortcut(Some(4.0), None, Some(2.0), None), "4px 0 2px");
/// ```
pub fn four_value_shortcut(
    top: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
    left: Option<f64>,
) -> String {
    let [t, r, b, l] = [top, right, bottom, left].map(|v| add_px_or(v, "0"));

    if t == r && r == b && b == l {
        t
    } else if t == b && r == l {
        format!("{t} {r}")
    } else if r == l {
        format!("{t} {r} {b}")
    } else {
        format!("{t} {r} {b} {l}")
    }
}

/// Collapse four box values into the smallest set of prefixed properties.
///
/// With prefix `p`: all equal gives `p`; both axes symmetric give `py`/`px`;
/// top = bottom gives `py`/`pr`/`pl`; left = right gives `px`/`pt`/`pb`;
/// otherwise `pt`/`pr`/`pb`/`pl`.
pub fn optimize_space(
    prefix: &str,
    top: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
    left: Option<f64>,
) -> PropMap {
    let [t, r, b, l] = [top, right, bottom, left].map(|v| add_px_or(v, "0"));
    let key = |suffix: &str| format!("{prefix}{suffix}");

    let mut props = PropMap::new();
    if t == r && r == b && b == l {
        props.insert(prefix, t);
    } else if t == b && r == l {
        props.insert(&key("y"), t);
        props.insert(&key("x"), r);
    } else if t == b {
        props.insert(&key("y"), t);
        props.insert(&key("r"), r);
        props.insert(&key("l"), l);
    } else if r == l {
        props.insert(&key("x"), r);
        props.insert(&key("t"), t);
        props.insert(&key("b"), b);
    } else {
        props.insert(&key("t"), t);
        props.insert(&key("r"), r);
        props.insert(&key("b"), b);
        props.insert(&key("l"), l);
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::format::add_px_or;

    /// Re-derive top/right/bottom/left from an `optimize_space` result
    fn expand(prefix: &str, props: &PropMap) -> [String; 4] {
        let get = |suffix: &str| {
            props
                .get_str(&format!("{prefix}{suffix}"))
                .map(str::to_string)
        };
        let all = props.get_str(prefix).map(str::to_string);
        let y = get("y");
        let x = get("x");

        let top = get("t").or_else(|| y.clone()).or_else(|| all.clone());
        let bottom = get("b").or(y).or_else(|| all.clone());
        let right = get("r").or_else(|| x.clone()).or_else(|| all.clone());
        let left = get("l").or(x).or(all);

        [top, right, bottom, left].map(|v| v.unwrap())
    }

    #[test]
    fn test_four_value_all_equal() {
        for v in [None, Some(0.0), Some(3.0), Some(12.5)] {
            assert_eq!(four_value_shortcut(v, v, v, v), add_px_or(v, "0"));
        }
    }

    #[test]
    fn test_four_value_forms() {
        assert_eq!(
            four_value_shortcut(Some(4.0), Some(8.0), Some(4.0), Some(8.0)),
            "4px 8px"
        );
        assert_eq!(
            four_value_shortcut(Some(1.0), Some(8.0), Some(4.0), Some(8.0)),
            "1px 8px 4px"
        );
        assert_eq!(
            four_value_shortcut(Some(1.0), Some(2.0), Some(3.0), Some(4.0)),
            "1px 2px 3px 4px"
        );
        assert_eq!(
            four_value_shortcut(Some(0.0), Some(2.0), Some(0.0), Some(0.0)),
            "0 2px 0 0"
        );
    }

    #[test]
    fn test_optimize_space_all_equal() {
        for v in [None, Some(0.0), Some(6.0)] {
            let props = optimize_space("p", v, v, v, v);
            assert_eq!(props.len(), 1);
            assert_eq!(props.get_str("p"), Some(add_px_or(v, "0").as_str()));
        }
    }

    #[test]
    fn test_optimize_space_axes() {
        let props = optimize_space("p", Some(4.0), Some(8.0), Some(4.0), Some(8.0));

        assert_eq!(props.get_str("py"), Some("4px"));
        assert_eq!(props.get_str("px"), Some("8px"));
        for key in ["p", "pt", "pr", "pb", "pl"] {
            assert!(!props.contains_key(key), "unexpected key {key}");
        }
    }

    #[test]
    fn test_optimize_space_vertical_symmetry() {
        let props = optimize_space("m", Some(4.0), Some(1.0), Some(4.0), Some(2.0));

        assert_eq!(props.get_str("my"), Some("4px"));
        assert_eq!(props.get_str("mr"), Some("1px"));
        assert_eq!(props.get_str("ml"), Some("2px"));
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn test_optimize_space_horizontal_symmetry() {
        let props = optimize_space("p", Some(1.0), Some(8.0), Some(2.0), Some(8.0));

        assert_eq!(props.get_str("px"), Some("8px"));
        assert_eq!(props.get_str("pt"), Some("1px"));
        assert_eq!(props.get_str("pb"), Some("2px"));
        assert_eq!(props.len(), 3);
    }

    #[test]
    fn test_optimize_space_all_sides() {
        let props = optimize_space("p", Some(1.0), Some(2.0), Some(3.0), Some(0.0));

        assert_eq!(props.get_str("pt"), Some("1px"));
        assert_eq!(props.get_str("pr"), Some("2px"));
        assert_eq!(props.get_str("pb"), Some("3px"));
        assert_eq!(props.get_str("pl"), Some("0"));
    }

    #[test]
    fn test_optimize_space_reproduces_inputs() {
        let cases = [
            [1.0, 1.0, 1.0, 1.0],
            [4.0, 8.0, 4.0, 8.0],
            [4.0, 1.0, 4.0, 2.0],
            [1.0, 8.0, 2.0, 8.0],
            [1.25, 2.5, 0.0, 3.75],
            [0.0, 0.0, 0.0, 0.0],
        ];

        for [t, r, b, l] in cases {
            let props = optimize_space("p", Some(t), Some(r), Some(b), Some(l));
            let expected = [t, r, b, l].map(|v| add_px_or(Some(v), "0"));
            assert_eq!(expand("p", &props), expected);
        }
    }
}
