use crate::scene::NodeType;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Scalar value of a style property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Explicit reset, as opposed to a property that is simply absent
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

/// Style properties of one output node, keyed by property name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropMap(BTreeMap<String, PropValue>);

impl PropMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<PropValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Insert only when a value is present; `None` leaves the key absent
    pub fn insert_opt<V: Into<PropValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn insert_null(&mut self, key: &str) {
        self.0.insert(key.to_string(), PropValue::Null);
    }

    /// Merge `other` into `self`; keys of `other` win
    pub fn extend(&mut self, other: PropMap) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for PropMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PropMap(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// How a collapsed subtree is exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Svg,
    Png,
}

impl AssetKind {
    pub fn component_tag(self) -> ComponentTag {
        match self {
            AssetKind::Svg => ComponentTag::Svg,
            AssetKind::Png => ComponentTag::Image,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Svg => f.write_str("svg"),
            AssetKind::Png => f.write_str("png"),
        }
    }
}

/// Component an output node renders as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentTag {
    /// Layout container
    Box,
    Text,
    /// Raster asset
    Image,
    /// Vector asset
    Svg,
    /// Reference to a reusable component, by name
    Component(String),
}

impl ComponentTag {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentTag::Box => "Box",
            ComponentTag::Text => "Text",
            ComponentTag::Image => "Image",
            ComponentTag::Svg => "Svg",
            ComponentTag::Component(name) => name,
        }
    }
}

impl fmt::Display for ComponentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComponentTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A run of raw text inside a text node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Output node: component, props and children, ready for code emission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTree {
    pub component: ComponentTag,
    pub props: PropMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeTree>,
    pub node_type: NodeType,
    pub node_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetKind>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_component: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text_runs: Vec<TextRun>,
}

impl NodeTree {
    /// A node with no props and no children
    pub fn new(component: ComponentTag, node_type: NodeType, node_name: &str) -> Self {
        NodeTree {
            component,
            props: PropMap::new(),
            children: Vec::new(),
            node_type,
            node_name: node_name.to_string(),
            asset: None,
            is_component: false,
            text_runs: Vec::new(),
        }
    }
}
