//! Identity-preserving remapping of animator asset graphs.
//!
//! After a host tool reshapes a scene hierarchy (merging meshes, deleting
//! nodes, renaming animated properties), every animator graph that addressed
//! the old shape still has to play back correctly. This crate applies the
//! recorded [`ObjectMapping`] to a [`Scene`]'s live components: plain
//! references are substituted per the identity table, and referenced animator
//! graphs are deep-cloned with every curve binding rewritten to the new paths
//! and property names. Clones preserve aliasing and cycles, originals are
//! never mutated, and a graph that turns out unchanged keeps serving as-is.
//!
//! ```rust,ignore
//! use rebind::{ObjectMapping, apply_object_mapping};
//!
//! let mapping = ObjectMapping::builder()
//!     .move_object("armature/hips", "hips")
//!     .build();
//! apply_object_mapping(&mut scene, &mut store, &mapping)?;
//! ```

pub mod errors;
pub mod graph;
pub mod mapping;
pub mod object;
pub mod path;
pub mod rewrite;
pub mod scene;
pub mod store;

pub use errors::{RebindError, Result};
pub use mapping::{ObjectMapping, ObjectMappingBuilder};
pub use object::{ObjectRef, VisitObjectRefs};
pub use path::ObjectPath;
pub use rewrite::{ReferenceRewriter, RewriteOutcome, apply_object_mapping, rewrite_binding};
pub use scene::{ComponentData, ComponentKey, ComponentKind, NodeKey, Scene};
pub use store::{AssetKey, AssetStore};
