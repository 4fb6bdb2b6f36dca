use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Discriminant of a scene node, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Page,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Rectangle,
    Ellipse,
    Line,
    Vector,
    Star,
    Polygon,
    Text,
    BooleanOperation,
    Slice,
    #[serde(other)]
    Unknown,
}

impl NodeType {
    /// Page-level containers: their direct children are the top-level frames
    pub fn is_page_like(self) -> bool {
        matches!(self, NodeType::Document | NodeType::Page | NodeType::Section)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
    Grid,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Max,
    Center,
    SpaceBetween,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Max,
    Center,
    Baseline,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Outside,
    Center,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Video,
    Pattern,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleMode {
    Fill,
    Fit,
    Crop,
    Tile,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionType {
    Dissolve,
    SmartAnimate,
    ScrollAnimate,
    MoveIn,
    MoveOut,
    Push,
    SlideIn,
    SlideOut,
    #[serde(other)]
    Unknown,
}

/// RGBA color with channels in the 0.0-1.0 range
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_one")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// A fill or stroke paint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_one")]
    pub opacity: f64,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub scale_mode: Option<ScaleMode>,
    #[serde(default)]
    pub image_hash: Option<String>,
    #[serde(default)]
    pub gradient_stops: Vec<ColorStop>,
    #[serde(default)]
    pub gradient_handle_positions: Vec<Vector2>,
}

impl Paint {
    /// A paint is visible when it is switched on and not fully transparent
    pub fn is_visible(&self) -> bool {
        self.visible && self.opacity > 0.0
    }

    pub fn is_tiled(&self) -> bool {
        self.scale_mode == Some(ScaleMode::Tile)
    }
}

/// Auto-layout descriptor inferred by the host for a container
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoLayout {
    pub layout_mode: LayoutMode,
    pub primary_axis_align_items: PrimaryAxisAlign,
    pub counter_axis_align_items: CounterAxisAlign,
    #[serde(deserialize_with = "lenient_f64")]
    pub item_spacing: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub padding_top: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub padding_right: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub padding_bottom: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub padding_left: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub grid_row_count: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub grid_column_count: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub grid_row_gap: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub grid_column_gap: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArcData {
    pub starting_angle: f64,
    pub ending_angle: f64,
    pub inner_radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transition {
    #[serde(rename = "type")]
    pub transition_type: TransitionType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Action {
    pub transition: Option<Transition>,
}

/// Prototype interaction attached to a node.
///
/// Older documents carry a single `action`, newer ones an `actions` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reaction {
    pub action: Option<Action>,
    pub actions: Vec<Action>,
}

impl Reaction {
    pub fn is_smart_animate(&self) -> bool {
        self.action.iter().chain(&self.actions).any(|action| {
            matches!(
                action.transition,
                Some(Transition {
                    transition_type: TransitionType::SmartAnimate
                })
            )
        })
    }
}

/// Stroke thickness: one value for every side, or a per-side "mixed" sentinel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeWeight {
    Uniform(f64),
    Mixed,
}

impl Default for StrokeWeight {
    fn default() -> Self {
        StrokeWeight::Uniform(1.0)
    }
}

impl<'de> Deserialize<'de> for StrokeWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(match value {
            JsonValue::Null => StrokeWeight::default(),
            other => match other.as_f64() {
                Some(weight) if weight.is_finite() => StrokeWeight::Uniform(weight),
                _ => StrokeWeight::Mixed,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    pub characters: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}

/// A node of the design document.
///
/// Field names follow the host's object model. Every capability is optional:
/// a field the node kind does not carry is simply absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Parent id, only used by flat documents
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Sibling ordering key, only used by flat documents
    #[serde(default)]
    pub position: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub min_width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub max_width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub min_height: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub max_height: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub padding_top: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub padding_right: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub padding_bottom: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub padding_left: Option<f64>,
    #[serde(default)]
    pub inferred_auto_layout: Option<AutoLayout>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub corner_radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub top_left_radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub top_right_radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bottom_right_radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bottom_left_radius: Option<f64>,
    #[serde(default)]
    pub arc_data: Option<ArcData>,

    #[serde(default, deserialize_with = "lenient_paints")]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub stroke_weight: StrokeWeight,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stroke_top_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stroke_right_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stroke_bottom_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stroke_left_weight: Option<f64>,
    #[serde(default)]
    pub stroke_align: StrokeAlign,
    #[serde(default)]
    pub dash_pattern: Vec<f64>,

    #[serde(default, deserialize_with = "lenient_paints")]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    /// Set by the host when the node was marked for image export
    #[serde(default)]
    pub is_asset: bool,

    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub styled_text_segments: Vec<TextSegment>,
    #[serde(default)]
    pub main_component: Option<ComponentRef>,

    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn layout_mode(&self) -> LayoutMode {
        self.inferred_auto_layout
            .as_ref()
            .map(|layout| layout.layout_mode)
            .unwrap_or_default()
    }

    pub fn has_grid_layout(&self) -> bool {
        self.layout_mode() == LayoutMode::Grid
    }

    pub fn has_smart_animate(&self) -> bool {
        self.reactions.iter().any(Reaction::is_smart_animate)
    }

    /// Padding in top/right/bottom/left order.
    ///
    /// The node's own value wins over the inferred auto-layout one.
    pub fn paddings(&self) -> [Option<f64>; 4] {
        let layout = self.inferred_auto_layout.as_ref();
        [
            self.padding_top.or_else(|| layout.and_then(|l| l.padding_top)),
            self.padding_right.or_else(|| layout.and_then(|l| l.padding_right)),
            self.padding_bottom.or_else(|| layout.and_then(|l| l.padding_bottom)),
            self.padding_left.or_else(|| layout.and_then(|l| l.padding_left)),
        ]
    }

    pub fn has_padding(&self) -> bool {
        self.paddings()
            .iter()
            .any(|padding| padding.is_some_and(|p| p != 0.0))
    }

    /// Corner radii in top-left/top-right/bottom-right/bottom-left order,
    /// when the node carries independent corners at all
    pub fn corner_radii(&self) -> Option<[Option<f64>; 4]> {
        let radii = [
            self.top_left_radius,
            self.top_right_radius,
            self.bottom_right_radius,
            self.bottom_left_radius,
        ];
        radii.iter().any(Option::is_some).then_some(radii)
    }

    pub fn inner_radius(&self) -> f64 {
        self.arc_data.map(|arc| arc.inner_radius).unwrap_or(0.0)
    }

    pub fn has_visible_fill(&self) -> bool {
        self.fills.iter().any(Paint::is_visible)
    }
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

/// Read a number, treating anything else (the host's "mixed" sentinel, strings,
/// non-finite values) as absent
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|number| number.is_finite()))
}

/// Read a paint list, treating a non-list value (the "mixed" sentinel on text) as empty
fn lenient_paints<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Paint>, D::Error> {
    match Option::<JsonValue>::deserialize(deserializer)? {
        Some(value @ JsonValue::Array(_)) => {
            serde_json::from_value(value).map_err(serde::de::Error::custom)
        }
        _ => Ok(Vec::new()),
    }
}
