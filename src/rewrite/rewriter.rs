//! The remapping pass driver.

use smallvec::SmallVec;

use crate::errors::Result;
use crate::graph::AssetKind;
use crate::mapping::ObjectMapping;
use crate::object::{ObjectRef, VisitObjectRefs};
use crate::rewrite::cloner::GraphCloner;
use crate::scene::{ComponentKey, Scene};
use crate::store::{AssetKey, AssetStore};

/// One planned field substitution: visitor slot index plus the new value.
type PlannedWrite = (usize, ObjectRef);

/// Applies an [`ObjectMapping`] to every live component of a scene.
///
/// The pass is two-phase: every component is walked and its substitutions
/// planned first, and only after the whole walk succeeded are the plans
/// committed. On error the clones registered during the pass are retracted
/// and no component field has been touched.
pub struct ReferenceRewriter<'a> {
    mapping: &'a ObjectMapping,
}

impl<'a> ReferenceRewriter<'a> {
    #[must_use]
    pub fn new(mapping: &'a ObjectMapping) -> Self {
        Self { mapping }
    }

    /// Runs the pass over `scene` and `store`.
    pub fn rewrite(&self, scene: &mut Scene, store: &mut AssetStore) -> Result<()> {
        let keys: Vec<ComponentKey> = scene.components().map(|(key, _)| key).collect();
        let mut plans: Vec<(ComponentKey, Vec<PlannedWrite>)> = Vec::new();
        let mut registered: Vec<AssetKey> = Vec::new();
        let mut substitutions = 0usize;

        for key in keys {
            match self.plan_component(scene, store, key, &mut registered) {
                Ok(Some(writes)) => {
                    substitutions += writes.len();
                    plans.push((key, writes));
                }
                Ok(None) => {}
                Err(err) => {
                    for clone in registered.drain(..) {
                        store.remove(clone);
                    }
                    return Err(err);
                }
            }
        }

        for (key, writes) in &plans {
            commit(scene, *key, writes);
        }
        log::debug!(
            "object mapping pass: {} field substitutions across {} components, {} new assets",
            substitutions,
            plans.len(),
            registered.len(),
        );
        Ok(())
    }

    /// Walks one component's reference slots and plans its substitutions.
    /// Clones committed by the cloner are appended to `registered`.
    fn plan_component(
        &self,
        scene: &mut Scene,
        store: &mut AssetStore,
        key: ComponentKey,
        registered: &mut Vec<AssetKey>,
    ) -> Result<Option<Vec<PlannedWrite>>> {
        let Some(component) = scene.component(key) else {
            return Ok(None);
        };
        let Some(root_path) = scene.path_of(component.node) else {
            log::warn!("skipping a component whose node key no longer resolves");
            return Ok(None);
        };

        let mut refs: SmallVec<[ObjectRef; 8]> = SmallVec::new();
        if let Some(component) = scene.component_mut(key) {
            component.data.visit_object_refs(&mut |r| refs.push(*r));
        }

        let mut cloner = GraphCloner::new(store, self.mapping, root_path.clone());
        let mut writes: Vec<PlannedWrite> = Vec::new();
        for (slot, reference) in refs.iter().enumerate() {
            match *reference {
                ObjectRef::Component(target) => {
                    // Identity substitution applies to any component type.
                    if let Some(mapped) = self.mapping.identity_for(target) {
                        writes.push((slot, mapped));
                    }
                }
                ObjectRef::Asset(asset) => match cloner.store_kind(asset) {
                    // Only animator graphs are followed from live components.
                    Some(AssetKind::Graph) => {
                        if let Some(clone) = cloner.map_graph(asset)? {
                            writes.push((slot, ObjectRef::Asset(clone)));
                        }
                        registered.extend(cloner.take_created());
                    }
                    Some(_) => {}
                    None => {
                        log::warn!("live reference to a missing asset at '{root_path}'");
                    }
                },
                ObjectRef::None => {}
            }
        }
        Ok((!writes.is_empty()).then_some(writes))
    }
}

/// Applies planned writes to a component. Slots are revisited in the same
/// order they were planned in, so a single forward scan matches them up.
fn commit(scene: &mut Scene, key: ComponentKey, writes: &[PlannedWrite]) {
    let Some(component) = scene.component_mut(key) else {
        return;
    };
    let mut slot = 0usize;
    let mut next = 0usize;
    component.data.visit_object_refs(&mut |r| {
        if next < writes.len() && writes[next].0 == slot {
            *r = writes[next].1;
            next += 1;
        }
        slot += 1;
    });
}
