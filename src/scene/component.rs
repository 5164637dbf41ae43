//! Live components attached to scene nodes.

use crate::object::{ObjectRef, VisitObjectRefs};
use crate::scene::NodeKey;

/// Component types that can own animated properties or mapping entries.
///
/// Curve bindings and the typed mapping table are keyed by this tag. Kinds a
/// remapping pass never has to walk (transforms, plain skinned renderers)
/// exist only as tags and keep no payload in [`ComponentData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Transform,
    Renderer,
    SkinnedRenderer,
    Animator,
    SpringBone,
    Collider,
}

/// An animator component: plays an animator graph over its node's subtree.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    /// The graph asset driving this animator.
    pub graph: ObjectRef,
}

/// Reflection-probe settings nested inside a renderer.
#[derive(Debug, Clone, Default)]
pub struct ProbeSettings {
    /// Override anchor the probes are sampled at.
    pub anchor: ObjectRef,
}

/// A mesh renderer with material references and nested probe settings.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    pub materials: Vec<ObjectRef>,
    pub probes: ProbeSettings,
}

/// A secondary-motion bone chain with its collider list.
#[derive(Debug, Clone, Default)]
pub struct SpringBone {
    pub root: ObjectRef,
    pub colliders: Vec<ObjectRef>,
}

/// A collision sphere referenced by spring bone chains. Carries no
/// references itself; it participates in remapping only as a target.
#[derive(Debug, Clone, Default)]
pub struct SphereCollider {
    pub radius: f32,
}

/// The closed set of live component payloads.
#[derive(Debug, Clone)]
pub enum ComponentData {
    Animator(Animator),
    Renderer(Renderer),
    SpringBone(SpringBone),
    Collider(SphereCollider),
}

impl ComponentData {
    /// The tag matching this payload.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentData::Animator(_) => ComponentKind::Animator,
            ComponentData::Renderer(_) => ComponentKind::Renderer,
            ComponentData::SpringBone(_) => ComponentKind::SpringBone,
            ComponentData::Collider(_) => ComponentKind::Collider,
        }
    }
}

impl VisitObjectRefs for ComponentData {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        match self {
            ComponentData::Animator(animator) => f(&mut animator.graph),
            ComponentData::Renderer(renderer) => {
                renderer.materials.visit_object_refs(f);
                f(&mut renderer.probes.anchor);
            }
            ComponentData::SpringBone(bone) => {
                f(&mut bone.root);
                bone.colliders.visit_object_refs(f);
            }
            ComponentData::Collider(_) => {}
        }
    }
}

/// A component instance: its owning node plus typed payload.
#[derive(Debug, Clone)]
pub struct SceneComponent {
    pub node: NodeKey,
    pub data: ComponentData,
}

impl SceneComponent {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.data.kind()
    }
}
