use crate::codegen::asset::check_asset_node;
use crate::config::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::scene::{NodeRef, NodeType, Scene};
use crate::style::{
    get_auto_layout_props, get_border_props, get_border_radius_props, get_layout_props,
    get_min_max_props, get_padding_props, resolve_paints, CssPaints, PaintResolver,
};
use crate::types::{ComponentTag, NodeTree, PropMap, TextRun};
use log::debug;

/// Builds the output component tree from a scene.
///
/// Walks the scene top-down, collapsing asset subtrees into single leaves
/// and composing the style extractors' output for every other node.
///
/// # Examples
/// ```
/// use fig2ui::{ConvertOptions, Converter, Scene};
/// use serde_json::json;
///
/// let scene = Scene::from_value(json!({
///     "id": "1:1",
///     "name": "Icon",
///     "type": "VECTOR",
///     "width": 24,
///     "height": 24
/// })).unwrap();
///
/// let tree = Converter::new(ConvertOptions::default()).convert_scene(&scene).unwrap();
/// assert_eq!(tree.component.as_str(), "Svg");
/// ```
pub struct Converter<P = CssPaints> {
    options: ConvertOptions,
    paints: P,
}

impl Converter<CssPaints> {
    pub fn new(options: ConvertOptions) -> Self {
        Converter {
            options,
            paints: CssPaints,
        }
    }
}

impl<P: PaintResolver> Converter<P> {
    /// Swap the paint resolver used for strokes, backgrounds and text colors
    pub fn with_paints<Q: PaintResolver>(self, paints: Q) -> Converter<Q> {
        Converter {
            options: self.options,
            paints,
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Build the tree from the configured root (or the document root)
    pub fn convert_scene(&self, scene: &Scene) -> Result<NodeTree> {
        let root = match &self.options.root {
            Some(id) => scene
                .get(id)
                .ok_or_else(|| ConvertError::NodeNotFound(id.clone()))?,
            None => scene.root(),
        };
        Ok(self.build(root))
    }

    /// Build the tree for one node and its visible descendants
    pub fn build(&self, node: NodeRef<'_>) -> NodeTree {
        if let Some(asset) = check_asset_node(node, false) {
            debug!("{} ({}) exported as {}", node.name, node.id, asset);
            let mut tree = NodeTree::new(asset.component_tag(), node.node_type, &node.name);
            tree.props = self.sizing_props(node);
            tree.asset = Some(asset);
            return tree;
        }

        match node.node_type {
            NodeType::Text => self.build_text(node),
            _ => self.build_container(node),
        }
    }

    fn build_text(&self, node: NodeRef<'_>) -> NodeTree {
        let mut tree = NodeTree::new(ComponentTag::Text, node.node_type, &node.name);
        tree.props = self.sizing_props(node);
        tree.props.insert_opt(
            "color",
            resolve_paints(&self.paints, &node.fills).into_iter().next(),
        );
        tree.text_runs = text_runs(node);
        tree
    }

    fn build_container(&self, node: NodeRef<'_>) -> NodeTree {
        let is_instance = node.node_type == NodeType::Instance;
        let component = if is_instance {
            let name = node
                .main_component
                .as_ref()
                .map_or(node.name.as_str(), |main| main.name.as_str());
            ComponentTag::Component(name.to_string())
        } else {
            ComponentTag::Box
        };

        let mut tree = NodeTree::new(component, node.node_type, &node.name);
        tree.is_component = is_instance;

        let mut props = PropMap::new();
        props.extend(get_auto_layout_props(node));
        props.extend(get_padding_props(&node));
        props.extend(get_border_radius_props(&node));
        props.extend(self.sizing_props(node));
        props.extend(get_border_props(&node, &self.paints));
        let backgrounds = resolve_paints(&self.paints, &node.fills);
        if !backgrounds.is_empty() {
            props.insert("bg", backgrounds.join(", "));
        }
        tree.props = props;

        if !is_instance || self.options.expand_instances {
            tree.children = node
                .visible_children()
                .map(|child| self.build(child))
                .collect();
        }
        debug!(
            "{} ({}) built as {} with {} children",
            node.name,
            node.id,
            tree.component,
            tree.children.len()
        );
        tree
    }

    fn sizing_props(&self, node: NodeRef<'_>) -> PropMap {
        let mut props = get_min_max_props(&node);
        props.extend(get_layout_props(node, &self.options));
        props
    }
}

fn text_runs(node: NodeRef<'_>) -> Vec<TextRun> {
    if !node.styled_text_segments.is_empty() {
        return node
            .styled_text_segments
            .iter()
            .map(|segment| TextRun {
                text: segment.characters.clone(),
                start: segment.start,
                end: segment.end,
            })
            .collect();
    }

    match node.characters.as_deref() {
        Some(text) if !text.is_empty() => vec![TextRun {
            text: text.to_string(),
            start: 0,
            end: text.encode_utf16().count(),
        }],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Paint;
    use crate::types::AssetKind;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value as JsonValue};

    fn build(value: JsonValue) -> NodeTree {
        let scene = Scene::from_value(value).unwrap();
        Converter::new(ConvertOptions::default())
            .convert_scene(&scene)
            .unwrap()
    }

    fn white() -> JsonValue {
        json!({"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}})
    }

    fn card() -> JsonValue {
        json!({
            "id": "0:1",
            "name": "Page",
            "type": "PAGE",
            "children": [{
                "id": "1:1",
                "name": "Card",
                "type": "FRAME",
                "width": 320,
                "height": 200,
                "cornerRadius": 12,
                "paddingTop": 16,
                "paddingRight": 24,
                "paddingBottom": 16,
                "paddingLeft": 24,
                "fills": [white()],
                "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}],
                "strokeWeight": 1,
                "strokeAlign": "INSIDE",
                "inferredAutoLayout": {
                    "layoutMode": "VERTICAL",
                    "itemSpacing": 8,
                    "primaryAxisAlignItems": "MIN",
                    "counterAxisAlignItems": "MIN"
                },
                "children": [
                    {
                        "id": "1:2",
                        "name": "Title",
                        "type": "TEXT",
                        "width": 272,
                        "height": 24,
                        "characters": "Hello",
                        "fills": [{"type": "SOLID", "color": {"r": 0.2, "g": 0.2, "b": 0.2}}]
                    },
                    {
                        "id": "1:3",
                        "name": "Icon",
                        "type": "FRAME",
                        "width": 24,
                        "height": 24,
                        "children": [
                            {"id": "1:4", "name": "Path", "type": "VECTOR"},
                            {"id": "1:5", "name": "Dot", "type": "ELLIPSE", "fills": [white()]}
                        ]
                    },
                    {"id": "1:6", "name": "Hidden", "type": "TEXT", "visible": false}
                ]
            }]
        })
    }

    #[test]
    fn test_build_card() {
        let page = build(card());

        assert_eq!(page.component, ComponentTag::Box);
        assert_eq!(page.children.len(), 1);

        let card = &page.children[0];
        let expected: PropMap = [
            ("display", "flex"),
            ("flexDir", "column"),
            ("gap", "8px"),
            ("justifyContent", "flex-start"),
            ("alignItems", "flex-start"),
            ("py", "16px"),
            ("px", "24px"),
            ("borderRadius", "12px"),
            ("w", "320px"),
            ("h", "200px"),
            ("border", "solid 1px #000000"),
            ("bg", "#ffffff"),
        ]
        .into_iter()
        .collect();
        assert_eq!(card.props, expected);
        assert_eq!(card.node_name, "Card");
        assert_eq!(card.children.len(), 2);

        let title = &card.children[0];
        assert_eq!(title.component, ComponentTag::Text);
        assert_eq!(title.props.get_str("h"), Some("24px"));
        assert_eq!(title.props.get_str("color"), Some("#333333"));
        assert_eq!(
            title.text_runs,
            vec![TextRun {
                text: "Hello".to_string(),
                start: 0,
                end: 5
            }]
        );

        let icon = &card.children[1];
        assert_eq!(icon.component, ComponentTag::Svg);
        assert_eq!(icon.asset, Some(AssetKind::Svg));
        assert!(icon.children.is_empty());
        assert_eq!(icon.props.get_str("h"), Some("24px"));
    }

    #[test]
    fn test_page_wrapping_icon_frame() {
        let tree = build(json!({
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [{
                "id": "0:1",
                "name": "Page",
                "type": "PAGE",
                "children": [{
                    "id": "1:1",
                    "name": "Illustration",
                    "type": "FRAME",
                    "width": 1920,
                    "height": 1080,
                    "children": [
                        {"id": "1:2", "type": "VECTOR"},
                        {"id": "1:3", "type": "STAR"}
                    ]
                }]
            }]
        }));

        assert_eq!(tree.component, ComponentTag::Box);
        assert_eq!(tree.asset, None);

        let page = &tree.children[0];
        assert_eq!(page.component, ComponentTag::Box);
        assert_eq!(page.asset, None);
        assert_eq!(page.children.len(), 1);

        let illustration = &page.children[0];
        assert_eq!(illustration.component, ComponentTag::Svg);
        assert_eq!(illustration.asset, Some(AssetKind::Svg));
        assert_eq!(illustration.props.get_str("w"), Some("100%"));
    }

    #[test]
    fn test_png_asset_leaf() {
        let tree = build(json!({
            "id": "1:1",
            "name": "Photo",
            "type": "RECTANGLE",
            "width": 200,
            "height": 100,
            "isAsset": true,
            "fills": [{"type": "IMAGE", "imageHash": "abc", "scaleMode": "FILL"}]
        }));

        assert_eq!(tree.component, ComponentTag::Image);
        assert_eq!(tree.asset, Some(AssetKind::Png));
        assert!(!tree.props.contains_key("bg"));
        assert_eq!(tree.props.get_str("w"), Some("200px"));
    }

    #[test]
    fn test_instance() {
        let value = json!({
            "id": "1:1",
            "name": "Submit",
            "type": "INSTANCE",
            "mainComponent": {"id": "9:9", "name": "Button"},
            "children": [{"id": "1:2", "type": "TEXT", "characters": "Submit"}]
        });

        let tree = build(value.clone());
        assert_eq!(tree.component, ComponentTag::Component("Button".to_string()));
        assert!(tree.is_component);
        assert_eq!(tree.children.len(), 1);

        let scene = Scene::from_value(value).unwrap();
        let options = ConvertOptions {
            expand_instances: false,
            ..ConvertOptions::default()
        };
        let converter = Converter::new(options);
        assert!(!converter.options().expand_instances);
        let tree = converter.convert_scene(&scene).unwrap();
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_styled_text_runs() {
        let tree = build(json!({
            "id": "1:1",
            "type": "TEXT",
            "characters": "Hi there",
            "styledTextSegments": [
                {"characters": "Hi ", "start": 0, "end": 3},
                {"characters": "there", "start": 3, "end": 8}
            ]
        }));

        assert_eq!(tree.text_runs.len(), 2);
        assert_eq!(tree.text_runs[1].text, "there");
        assert_eq!(tree.text_runs[1].start, 3);
    }

    #[test]
    fn test_plain_text_run_counts_utf16_units() {
        let tree = build(json!({
            "id": "1:1",
            "type": "TEXT",
            "characters": "Hi 👋"
        }));

        assert_eq!(
            tree.text_runs,
            vec![TextRun {
                text: "Hi 👋".to_string(),
                start: 0,
                end: 5,
            }]
        );
    }

    #[test]
    fn test_root_option() {
        let scene = Scene::from_value(card()).unwrap();

        let options = ConvertOptions {
            root: Some("1:3".to_string()),
            ..ConvertOptions::default()
        };
        let tree = Converter::new(options).convert_scene(&scene).unwrap();
        assert_eq!(tree.node_name, "Icon");

        let options = ConvertOptions {
            root: Some("404".to_string()),
            ..ConvertOptions::default()
        };
        let result = Converter::new(options).convert_scene(&scene);
        assert!(matches!(result, Err(ConvertError::NodeNotFound(id)) if id == "404"));
    }

    struct Tokens;

    impl PaintResolver for Tokens {
        fn paint_to_css(&self, _paint: &Paint) -> Option<String> {
            Some("$primary".to_string())
        }
    }

    #[test]
    fn test_custom_paints() {
        let scene = Scene::from_value(json!({
            "id": "1:1",
            "type": "FRAME",
            "fills": [white()],
            "children": [{"id": "1:2", "type": "TEXT", "characters": "a"}]
        }))
        .unwrap();

        let tree = Converter::new(ConvertOptions::default())
            .with_paints(Tokens)
            .convert_scene(&scene)
            .unwrap();

        assert_eq!(tree.props.get_str("bg"), Some("$primary"));
    }
}
