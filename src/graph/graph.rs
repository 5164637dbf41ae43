//! The animator graph root: parameters and layers.

use crate::object::{ObjectRef, VisitObjectRefs};

/// Default value carried by a graph parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Trigger,
}

/// A named parameter driving transition conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphParameter {
    pub name: String,
    pub default: ParameterValue,
}

/// How a layer combines with the layers below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerBlending {
    #[default]
    Override,
    Additive,
}

/// One evaluation layer of an animator graph.
#[derive(Debug, Clone)]
pub struct GraphLayer {
    pub name: String,
    pub weight: f32,
    pub blending: LayerBlending,
    pub ik_pass: bool,
    /// Index of the layer this one synchronizes with, if any.
    pub sync_layer: Option<usize>,
    pub sync_timing: bool,
    /// Avatar mask restricting the layer, shared as-is.
    pub mask: ObjectRef,
    /// Root state machine of the layer.
    pub state_machine: ObjectRef,
}

impl GraphLayer {
    #[must_use]
    pub fn new(name: impl Into<String>, state_machine: ObjectRef) -> Self {
        Self {
            name: name.into(),
            weight: 1.0,
            blending: LayerBlending::default(),
            ik_pass: false,
            sync_layer: None,
            sync_timing: false,
            mask: ObjectRef::None,
            state_machine,
        }
    }
}

impl VisitObjectRefs for GraphLayer {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        f(&mut self.mask);
        f(&mut self.state_machine);
    }
}

/// An animator graph: the root asset referenced by animator components.
///
/// Parameters carry no references and are copied verbatim when the graph is
/// cloned; layers are inline, so cloning the graph clones them too.
#[derive(Debug, Clone)]
pub struct AnimatorGraph {
    pub name: String,
    pub parameters: Vec<GraphParameter>,
    pub layers: Vec<GraphLayer>,
}

impl AnimatorGraph {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), parameters: Vec::new(), layers: Vec::new() }
    }
}

impl VisitObjectRefs for AnimatorGraph {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        self.layers.visit_object_refs(f);
    }
}
