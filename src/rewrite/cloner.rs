//! Identity-preserving deep cloning of animator graphs.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::errors::{RebindError, Result};
use crate::graph::{AssetKind, Clip, GraphAsset, Motion, Track};
use crate::mapping::ObjectMapping;
use crate::object::{ObjectRef, VisitObjectRefs};
use crate::path::ObjectPath;
use crate::rewrite::paths::{RewriteOutcome, rewrite_binding};
use crate::store::{AssetKey, AssetStore};

/// Deep-clones animator graphs while rewriting their curve bindings.
///
/// One cloner serves one live component: rewrite outcomes depend on the
/// component's hierarchy path, so clones cannot be shared across components.
/// Within its component the cloner memoizes per original key, which keeps
/// aliasing (one motion reachable from several states) and cycles (behaviour
/// back-references) from duplicating or looping.
pub struct GraphCloner<'a> {
    store: &'a mut AssetStore,
    mapping: &'a ObjectMapping,
    /// Hierarchy path of the component whose graphs are being cloned.
    root_path: ObjectPath,
    /// `Some(clone)` once an original has been cloned; `None` after a root
    /// finished without effective change, meaning "reuse the original".
    cache: FxHashMap<AssetKey, Option<AssetKey>>,
    /// Originals cloned for the root currently being mapped, in creation
    /// order. Drained on commit, retracted on no-op or error.
    created: Vec<(AssetKey, AssetKey)>,
    /// Set when a curve binding was rewritten or dropped. Clone identity by
    /// itself never counts as change.
    changed: bool,
}

impl<'a> GraphCloner<'a> {
    pub fn new(
        store: &'a mut AssetStore,
        mapping: &'a ObjectMapping,
        root_path: ObjectPath,
    ) -> Self {
        Self {
            store,
            mapping,
            root_path,
            cache: FxHashMap::default(),
            created: Vec::new(),
            changed: false,
        }
    }

    /// Kind of a stored asset, if the key resolves.
    #[must_use]
    pub fn store_kind(&self, key: AssetKey) -> Option<AssetKind> {
        self.store.get(key).map(GraphAsset::kind)
    }

    /// Maps one animator graph.
    ///
    /// Returns the clone's key when remapping effectively changed something,
    /// `None` when the original can keep serving (its speculative clones are
    /// retracted from the store). On error every clone made for this root is
    /// retracted before the error propagates.
    pub fn map_graph(&mut self, root: AssetKey) -> Result<Option<AssetKey>> {
        if let Some(&hit) = self.cache.get(&root) {
            return Ok(hit);
        }
        self.changed = false;
        let mark = self.created.len();
        match self.clone_asset(root) {
            Ok(clone) => {
                if self.changed {
                    log::debug!(
                        "cloned animator graph for '{}' ({} assets)",
                        self.root_path,
                        self.created.len() - mark,
                    );
                    Ok(Some(clone))
                } else {
                    self.retract(mark, true);
                    log::debug!("animator graph unchanged for '{}'", self.root_path);
                    Ok(None)
                }
            }
            Err(err) => {
                self.retract(mark, false);
                Err(err)
            }
        }
    }

    /// Keys of the clones committed by [`map_graph`](Self::map_graph) since
    /// the last take. Pass drivers collect these for whole-pass rollback.
    pub fn take_created(&mut self) -> Vec<AssetKey> {
        self.created.drain(..).map(|(_, clone)| clone).collect()
    }

    /// Removes the clones made since `mark` from the store. Visited
    /// originals either keep a "no change" cache entry, so later lookups
    /// reuse them, or are forgotten entirely after an error.
    fn retract(&mut self, mark: usize, keep_visited: bool) {
        for (original, clone) in self.created.split_off(mark) {
            self.store.remove(clone);
            if keep_visited {
                self.cache.insert(original, None);
            } else {
                self.cache.remove(&original);
            }
        }
    }

    fn clone_asset(&mut self, key: AssetKey) -> Result<AssetKey> {
        let Some(asset) = self.store.get(key) else {
            return Err(RebindError::MissingAsset { at: self.root_path.clone() });
        };
        let kind = asset.kind();
        if kind.is_pass_through() {
            return Ok(key);
        }
        if kind == AssetKind::Foreign {
            return Err(RebindError::UnsupportedAssetType {
                type_name: asset.type_name().to_owned(),
                at: self.root_path.clone(),
            });
        }
        if let Some(&cached) = self.cache.get(&key) {
            // `None` records "visited, no change" from an earlier root.
            return Ok(cached.unwrap_or(key));
        }
        if matches!(asset, GraphAsset::Motion(Motion::Clip(_))) {
            return self.clone_clip(key);
        }

        let copy = asset.clone();
        let clone = self.store.register(copy);
        self.cache.insert(key, Some(clone));
        self.created.push((key, clone));

        // Collect the clone's reference slots, resolve each one, then write
        // the results back. The cache entry above is written before this
        // recursion, so back references into the asset being cloned resolve
        // through the cache instead of looping.
        let mut refs: SmallVec<[ObjectRef; 8]> = SmallVec::new();
        if let Some(asset) = self.store.get_mut(clone) {
            asset.visit_object_refs(&mut |r| refs.push(*r));
        }
        let mut resolved: SmallVec<[ObjectRef; 8]> = SmallVec::with_capacity(refs.len());
        for reference in &refs {
            resolved.push(self.clone_ref(*reference)?);
        }
        if let Some(asset) = self.store.get_mut(clone) {
            let mut slot = 0;
            asset.visit_object_refs(&mut |r| {
                *r = resolved[slot];
                slot += 1;
            });
        }
        Ok(clone)
    }

    fn clone_ref(&mut self, reference: ObjectRef) -> Result<ObjectRef> {
        match reference {
            ObjectRef::None => Ok(ObjectRef::None),
            // Assets must not point back into the scene.
            ObjectRef::Component(_) => Err(RebindError::UnsupportedAssetType {
                type_name: "scene component".to_owned(),
                at: self.root_path.clone(),
            }),
            ObjectRef::Asset(key) => Ok(ObjectRef::Asset(self.clone_asset(key)?)),
        }
    }

    /// Clips get a custom clone: metadata is copied verbatim and every curve
    /// binding runs through the path rewriter, dropped when dangling.
    fn clone_clip(&mut self, key: AssetKey) -> Result<AssetKey> {
        let source = match self.store.get(key) {
            Some(GraphAsset::Motion(Motion::Clip(clip))) => clip.clone(),
            _ => return Err(RebindError::MissingAsset { at: self.root_path.clone() }),
        };

        let mut curves = Vec::with_capacity(source.curves.len());
        for binding in &source.curves {
            if let Track::Object(track) = &binding.track {
                for keyframe in &track.keys {
                    self.check_track_ref(keyframe.value)?;
                }
            }
            match rewrite_binding(&self.root_path, binding, self.mapping) {
                RewriteOutcome::Unchanged => curves.push(binding.clone()),
                RewriteOutcome::Rebound { path, property } => {
                    log::trace!(
                        "rebound '{}:{}' to '{}:{}' in clip '{}'",
                        binding.path,
                        binding.property,
                        path,
                        property,
                        source.name,
                    );
                    self.changed = true;
                    let mut rebound = binding.clone();
                    rebound.path = path;
                    rebound.property = property;
                    curves.push(rebound);
                }
                RewriteOutcome::Dangling => {
                    log::debug!(
                        "dropping dangling binding '{}:{}' from clip '{}'",
                        binding.path,
                        binding.property,
                        source.name,
                    );
                    self.changed = true;
                }
            }
        }

        let clip = Clip {
            name: format!("rebased {}", source.name),
            frame_rate: source.frame_rate,
            wrap_mode: source.wrap_mode,
            loop_time: source.loop_time,
            bounds: source.bounds,
            curves,
        };
        let clone = self.store.register(GraphAsset::Motion(Motion::Clip(clip)));
        self.cache.insert(key, Some(clone));
        self.created.push((key, clone));
        Ok(clone)
    }

    /// Object tracks keep their references by identity; they only have to
    /// stay inside the closed set.
    fn check_track_ref(&self, reference: ObjectRef) -> Result<()> {
        match reference {
            ObjectRef::None => Ok(()),
            ObjectRef::Component(_) => Err(RebindError::UnsupportedAssetType {
                type_name: "scene component".to_owned(),
                at: self.root_path.clone(),
            }),
            ObjectRef::Asset(key) => match self.store.get(key) {
                Some(asset) if asset.kind() == AssetKind::Foreign => {
                    Err(RebindError::UnsupportedAssetType {
                        type_name: asset.type_name().to_owned(),
                        at: self.root_path.clone(),
                    })
                }
                Some(_) => Ok(()),
                None => Err(RebindError::MissingAsset { at: self.root_path.clone() }),
            },
        }
    }
}
