//! The remapping pass: reference rewriting, graph cloning, path rewriting.

pub mod cloner;
pub mod paths;
pub mod rewriter;

pub use cloner::GraphCloner;
pub use paths::{RewriteOutcome, rewrite_binding};
pub use rewriter::ReferenceRewriter;

use crate::errors::Result;
use crate::mapping::ObjectMapping;
use crate::scene::Scene;
use crate::store::AssetStore;

/// Applies `mapping` to every live component of `scene`, cloning and
/// rewriting animator graphs in `store` as needed.
///
/// Convenience for [`ReferenceRewriter::new`] followed by
/// [`rewrite`](ReferenceRewriter::rewrite).
pub fn apply_object_mapping(
    scene: &mut Scene,
    store: &mut AssetStore,
    mapping: &ObjectMapping,
) -> Result<()> {
    ReferenceRewriter::new(mapping).rewrite(scene, store)
}
