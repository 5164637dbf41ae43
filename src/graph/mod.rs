//! Typed animator asset graph.
//!
//! Assets live in an [`AssetStore`](crate::store::AssetStore) and reference
//! each other through [`ObjectRef::Asset`] keys. The set of kinds is closed:
//! graph-structural kinds are deep-cloned and rewritten by a remapping pass,
//! opaque leaf kinds are shared as-is, and [`GraphAsset::Foreign`] stands for
//! anything outside the set, which the pass refuses to touch.

pub mod clip;
#[allow(clippy::module_inception)]
pub mod graph;
pub mod machine;
pub mod tracks;

pub use clip::{Clip, ClipBounds, CurveBinding, WrapMode};
pub use graph::{AnimatorGraph, GraphLayer, GraphParameter, LayerBlending, ParameterValue};
pub use machine::{
    Behaviour, ConditionPredicate, State, StateMachine, Transition, TransitionCondition,
};
pub use tracks::{CurveTrack, InterpolationMode, ObjectKeyframe, ObjectTrack, Track};

use crate::object::{ObjectRef, VisitObjectRefs};

/// A motion playable by a state: a leaf clip or a composite blend tree.
#[derive(Debug, Clone)]
pub enum Motion {
    Clip(Clip),
    BlendTree(BlendTree),
}

/// A composite motion blending child motions by a driving parameter.
#[derive(Debug, Clone)]
pub struct BlendTree {
    pub name: String,
    /// Parameter whose value selects between children.
    pub parameter: String,
    pub children: Vec<BlendTreeChild>,
}

impl BlendTree {
    #[must_use]
    pub fn new(name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self { name: name.into(), parameter: parameter.into(), children: Vec::new() }
    }
}

/// One child slot of a blend tree.
#[derive(Debug, Clone)]
pub struct BlendTreeChild {
    pub motion: ObjectRef,
    pub threshold: f32,
    pub time_scale: f32,
}

impl VisitObjectRefs for Motion {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        match self {
            Motion::Clip(clip) => clip.visit_object_refs(f),
            Motion::BlendTree(tree) => {
                for child in &mut tree.children {
                    f(&mut child.motion);
                }
            }
        }
    }
}

// ============================================================================
// Pass-through and foreign payloads
// ============================================================================

/// An image asset. Shared between graphs as-is, never cloned or inspected.
#[derive(Debug, Clone)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// A material asset. Shared as-is; its internals are opaque to remapping.
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub main_texture: ObjectRef,
}

/// An opaque configuration blob (mask sets, tuning data). Shared as-is.
#[derive(Debug, Clone)]
pub struct ConfigAsset {
    pub name: String,
    pub data: Vec<u8>,
}

/// A stand-in for an asset kind outside the closed set. Reaching one during
/// a remapping pass aborts the pass.
#[derive(Debug, Clone)]
pub struct ForeignAsset {
    pub type_name: String,
    pub name: String,
}

// ============================================================================
// The closed asset enum
// ============================================================================

/// Discriminant of [`GraphAsset`], used for dispatch and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Graph,
    StateMachine,
    State,
    Transition,
    Behaviour,
    Motion,
    Texture,
    Material,
    Config,
    Foreign,
}

impl AssetKind {
    /// Kinds shared by identity between source and remapped graphs.
    #[inline]
    #[must_use]
    pub fn is_pass_through(self) -> bool {
        matches!(self, AssetKind::Texture | AssetKind::Material | AssetKind::Config)
    }
}

/// A typed node of the asset graph.
#[derive(Debug, Clone)]
pub enum GraphAsset {
    Graph(AnimatorGraph),
    StateMachine(StateMachine),
    State(State),
    Transition(Transition),
    Behaviour(Behaviour),
    Motion(Motion),
    Texture(Texture),
    Material(Material),
    Config(ConfigAsset),
    Foreign(ForeignAsset),
}

impl GraphAsset {
    #[must_use]
    pub fn kind(&self) -> AssetKind {
        match self {
            GraphAsset::Graph(_) => AssetKind::Graph,
            GraphAsset::StateMachine(_) => AssetKind::StateMachine,
            GraphAsset::State(_) => AssetKind::State,
            GraphAsset::Transition(_) => AssetKind::Transition,
            GraphAsset::Behaviour(_) => AssetKind::Behaviour,
            GraphAsset::Motion(_) => AssetKind::Motion,
            GraphAsset::Texture(_) => AssetKind::Texture,
            GraphAsset::Material(_) => AssetKind::Material,
            GraphAsset::Config(_) => AssetKind::Config,
            GraphAsset::Foreign(_) => AssetKind::Foreign,
        }
    }

    /// Display name for logs. Transitions are unnamed.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            GraphAsset::Graph(g) => &g.name,
            GraphAsset::StateMachine(m) => &m.name,
            GraphAsset::State(s) => &s.name,
            GraphAsset::Transition(_) => "",
            GraphAsset::Behaviour(b) => &b.script,
            GraphAsset::Motion(Motion::Clip(c)) => &c.name,
            GraphAsset::Motion(Motion::BlendTree(t)) => &t.name,
            GraphAsset::Texture(t) => &t.name,
            GraphAsset::Material(m) => &m.name,
            GraphAsset::Config(c) => &c.name,
            GraphAsset::Foreign(f) => &f.name,
        }
    }

    /// Host-side type name, as reported in unsupported-kind errors.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            GraphAsset::Foreign(f) => &f.type_name,
            GraphAsset::Graph(_) => "AnimatorGraph",
            GraphAsset::StateMachine(_) => "StateMachine",
            GraphAsset::State(_) => "State",
            GraphAsset::Transition(_) => "Transition",
            GraphAsset::Behaviour(_) => "Behaviour",
            GraphAsset::Motion(_) => "Motion",
            GraphAsset::Texture(_) => "Texture",
            GraphAsset::Material(_) => "Material",
            GraphAsset::Config(_) => "Config",
        }
    }
}

impl VisitObjectRefs for GraphAsset {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        match self {
            GraphAsset::Graph(graph) => graph.visit_object_refs(f),
            GraphAsset::StateMachine(machine) => machine.visit_object_refs(f),
            GraphAsset::State(state) => state.visit_object_refs(f),
            GraphAsset::Transition(transition) => transition.visit_object_refs(f),
            GraphAsset::Behaviour(behaviour) => behaviour.visit_object_refs(f),
            GraphAsset::Motion(motion) => motion.visit_object_refs(f),
            // Opaque kinds expose no reference slots to remapping.
            GraphAsset::Texture(_)
            | GraphAsset::Material(_)
            | GraphAsset::Config(_)
            | GraphAsset::Foreign(_) => {}
        }
    }
}
