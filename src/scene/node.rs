use crate::scene::NodeKey;

/// A named node of the scene hierarchy.
///
/// Nodes form a tree through parent-child links. Only what a remapping pass
/// needs lives here: the name, because hierarchy paths are built from names,
/// and the links. Components live in the scene's component pool and point
/// back at their node.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
}

impl SceneNode {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), parent: None, children: Vec::new() }
    }

    /// Returns the parent node key, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Returns a read-only slice of child node keys.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }
}
