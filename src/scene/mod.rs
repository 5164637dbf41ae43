//! Scene hierarchy and live components.
//!
//! The scene is the live side of a remapping pass: nodes give components
//! their hierarchy paths, and component reference fields are what the pass
//! rewrites in place.

pub mod component;
pub mod node;
#[allow(clippy::module_inception)]
pub mod scene;

pub use component::{
    Animator, ComponentData, ComponentKind, ProbeSettings, Renderer, SceneComponent,
    SphereCollider, SpringBone,
};
pub use node::SceneNode;
pub use scene::Scene;

use slotmap::new_key_type;

new_key_type! {
    /// Key of a node in a [`Scene`].
    pub struct NodeKey;
    /// Key of a live component in a [`Scene`].
    pub struct ComponentKey;
}
