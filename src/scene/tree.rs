use crate::error::{ConvertError, Result};
use crate::scene::node::SceneNode;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

/// Index of a node inside a [`Scene`]
pub type NodeId = usize;

#[derive(Debug)]
struct Entry {
    node: SceneNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Read-only design document with parent back-references.
///
/// Nodes are stored in an arena; children are detached from their
/// [`SceneNode::children`] field and linked by index instead, so any node can
/// reach both its children and its parent chain.
#[derive(Debug)]
pub struct Scene {
    entries: Vec<Entry>,
    index: HashMap<String, NodeId>,
    root: NodeId,
}

impl Scene {
    /// Load a scene from JSON bytes (nested tree or flat node list)
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let value: JsonValue = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Load a scene from an already parsed JSON document.
    ///
    /// An array is read as a flat node list, anything else as a nested tree.
    pub fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Array(items) => {
                let nodes = items
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<std::result::Result<Vec<SceneNode>, _>>()?;
                Self::from_flat(nodes)
            }
            other => Self::from_nested(serde_json::from_value(other)?),
        }
    }

    /// Build a scene from a root node holding its subtree in `children`
    pub fn from_nested(root: SceneNode) -> Result<Self> {
        let mut scene = Scene::empty();
        scene.root = scene.insert_nested(root, None)?;
        Ok(scene)
    }

    /// Build a scene from a flat list of nodes linked by `parentId`.
    ///
    /// Siblings are ordered by their `position` key; nodes without one keep
    /// their document order ahead of positioned siblings. Exactly one node must
    /// have no parent, and every other node must lead up to it.
    pub fn from_flat(nodes: Vec<SceneNode>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(ConvertError::EmptyScene);
        }

        // 1. Index every node (inline children are linked right away)
        let mut scene = Scene::empty();
        let mut top_level = Vec::with_capacity(nodes.len());
        for node in nodes {
            top_level.push(scene.insert_nested(node, None)?);
        }

        // 2. Link parents, collecting (position, child) per parent
        let mut parent_to_children: HashMap<NodeId, Vec<(String, NodeId)>> = HashMap::new();
        let mut root: Option<NodeId> = None;

        for id in top_level {
            let entry = &scene.entries[id];
            match entry.node.parent_id.clone() {
                Some(parent_id) => {
                    let parent = scene.index.get(&parent_id).copied().ok_or_else(|| {
                        ConvertError::MissingParent {
                            node: entry.node.id.clone(),
                            parent: parent_id.clone(),
                        }
                    })?;
                    let position = entry.node.position.clone().unwrap_or_default();
                    scene.entries[id].parent = Some(parent);
                    parent_to_children
                        .entry(parent)
                        .or_default()
                        .push((position, id));
                }
                None => {
                    if let Some(first) = root {
                        return Err(ConvertError::MultipleRoots {
                            first: scene.entries[first].node.id.clone(),
                            second: entry.node.id.clone(),
                        });
                    }
                    root = Some(id);
                }
            }
        }

        // 3. Sort children by position (stable, so ties keep document order)
        for (parent, mut children) in parent_to_children {
            children.sort_by(|a, b| a.0.cmp(&b.0));
            scene.entries[parent]
                .children
                .extend(children.into_iter().map(|(_position, child)| child));
        }

        scene.root = root.ok_or(ConvertError::NoRoot)?;

        // 4. Every node must hang off the root, anything else sits on a parent cycle
        let mut reached = vec![false; scene.entries.len()];
        let mut stack = vec![scene.root];
        while let Some(id) = stack.pop() {
            if reached[id] {
                continue;
            }
            reached[id] = true;
            stack.extend(scene.entries[id].children.iter().copied());
        }
        if let Some(orphan) = reached.iter().position(|seen| !seen) {
            return Err(ConvertError::ParentCycle(
                scene.entries[orphan].node.id.clone(),
            ));
        }

        Ok(scene)
    }

    fn empty() -> Self {
        Scene {
            entries: Vec::new(),
            index: HashMap::new(),
            root: 0,
        }
    }

    fn insert_nested(&mut self, mut node: SceneNode, parent: Option<NodeId>) -> Result<NodeId> {
        let children = std::mem::take(&mut node.children);

        if self.index.contains_key(&node.id) {
            return Err(ConvertError::DuplicateNode(node.id));
        }
        let id = self.entries.len();
        self.index.insert(node.id.clone(), id);
        self.entries.push(Entry {
            node,
            parent,
            children: Vec::new(),
        });

        for child in children {
            let child_id = self.insert_nested(child, Some(id))?;
            self.entries[id].children.push(child_id);
        }

        Ok(id)
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            scene: self,
            id: self.root,
        }
    }

    /// Look a node up by its host id
    pub fn get(&self, id: &str) -> Option<NodeRef<'_>> {
        self.index
            .get(id)
            .map(|&id| NodeRef { scene: self, id })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Copyable handle to a node inside a [`Scene`].
///
/// Dereferences to the node's own fields.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    scene: &'a Scene,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn node(&self) -> &'a SceneNode {
        &self.scene.entries[self.id].node
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.scene.entries[self.id].parent.map(|id| NodeRef {
            scene: self.scene,
            id,
        })
    }

    /// Children in host order, hidden ones included
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let scene = self.scene;
        scene.entries[self.id]
            .children
            .iter()
            .map(move |&id| NodeRef { scene, id })
    }

    pub fn visible_children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.children().filter(|child| child.node().visible)
    }

    /// True when the node has no parent or sits directly under a page-like container
    pub fn is_top_level(&self) -> bool {
        match self.parent() {
            Some(parent) => parent.node_type.is_page_like(),
            None => true,
        }
    }

    /// The enclosing top-level frame (the node itself when it is top level)
    pub fn root_frame(&self) -> NodeRef<'a> {
        let mut current = *self;
        while !current.is_top_level() {
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }
}

impl Deref for NodeRef<'_> {
    type Target = SceneNode;

    fn deref(&self) -> &SceneNode {
        self.node()
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.node().id)
            .field("name", &self.node().name)
            .field("type", &self.node().node_type)
            .finish()
    }
}
