//! The scene container: node arena plus component pool.

use slotmap::SlotMap;

use crate::path::ObjectPath;
use crate::scene::component::{ComponentData, SceneComponent};
use crate::scene::node::SceneNode;
use crate::scene::{ComponentKey, NodeKey};

/// A scene hierarchy with its live components.
///
/// Nodes are arena-allocated and linked by keys; components live in their
/// own pool and point at their node. Hierarchy paths are derived from node
/// names, with the root node contributing the empty path.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeKey, SceneNode>,
    roots: Vec<NodeKey>,
    pub(crate) components: SlotMap<ComponentKey, SceneComponent>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
            components: SlotMap::with_key(),
        }
    }

    /// Adds a root node.
    pub fn add_root(&mut self, name: impl Into<String>) -> NodeKey {
        let key = self.nodes.insert(SceneNode::new(name));
        self.roots.push(key);
        key
    }

    /// Adds a node under `parent`, keeping both sides of the link in sync.
    pub fn add_child(&mut self, parent: NodeKey, name: impl Into<String>) -> NodeKey {
        let key = self.nodes.insert(SceneNode::new(name));
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        }
        if let Some(c) = self.nodes.get_mut(key) {
            c.parent = Some(parent);
        }
        key
    }

    /// Removes a node, detaching it from its parent or the root list.
    ///
    /// Descendants and components are left alone; their keys go stale and
    /// lookups through them start returning `None`.
    pub fn remove_node(&mut self, key: NodeKey) -> bool {
        let Some(node) = self.nodes.remove(key) else {
            return false;
        };
        match node.parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(parent) {
                    p.children.retain(|&c| c != key);
                }
            }
            None => self.roots.retain(|&r| r != key),
        }
        true
    }

    #[inline]
    #[must_use]
    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    #[must_use]
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    /// Attaches a component to `node` and returns its key.
    pub fn add_component(&mut self, node: NodeKey, data: ComponentData) -> ComponentKey {
        self.components.insert(SceneComponent { node, data })
    }

    #[inline]
    #[must_use]
    pub fn component(&self, key: ComponentKey) -> Option<&SceneComponent> {
        self.components.get(key)
    }

    #[inline]
    #[must_use]
    pub fn component_mut(&mut self, key: ComponentKey) -> Option<&mut SceneComponent> {
        self.components.get_mut(key)
    }

    /// Iterates all components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = (ComponentKey, &SceneComponent)> {
        self.components.iter()
    }

    /// Resolves a node's path relative to its hierarchy root.
    ///
    /// The root node itself contributes nothing, so a root resolves to the
    /// empty path and its direct children to their bare names.
    #[must_use]
    pub fn path_of(&self, node: NodeKey) -> Option<ObjectPath> {
        let mut segments: Vec<&str> = Vec::new();
        let mut current = self.nodes.get(node)?;
        while let Some(parent) = current.parent {
            segments.push(&current.name);
            current = self.nodes.get(parent)?;
        }
        segments.reverse();
        Some(ObjectPath::from(segments.join("/")))
    }

    /// Finds the node at `path` under `root`, walking name segments.
    #[must_use]
    pub fn find_node(&self, root: NodeKey, path: &ObjectPath) -> Option<NodeKey> {
        if path.is_root() {
            return self.nodes.contains_key(root).then_some(root);
        }
        let mut current = root;
        for segment in path.as_str().split('/') {
            let node = self.nodes.get(current)?;
            current = node
                .children
                .iter()
                .copied()
                .find(|&c| self.nodes.get(c).is_some_and(|n| n.name == segment))?;
        }
        Some(current)
    }
}
