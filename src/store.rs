//! Arena storage for graph assets.

use slotmap::{SlotMap, new_key_type};

use crate::graph::GraphAsset;

new_key_type! {
    /// Persistent handle to an asset in an [`AssetStore`].
    pub struct AssetKey;
}

/// Owns every asset of the graph, keyed by [`AssetKey`].
///
/// Registration is the only way keys are minted, so a key stays valid for as
/// long as its asset stays in the store. A remapping pass registers clones
/// here and retracts them again when the pass turns out to be a no-op or
/// fails partway.
#[derive(Debug, Default)]
pub struct AssetStore {
    assets: SlotMap<AssetKey, GraphAsset>,
}

impl AssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self { assets: SlotMap::with_key() }
    }

    /// Registers an asset and returns its persistent key.
    pub fn register(&mut self, asset: GraphAsset) -> AssetKey {
        self.assets.insert(asset)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: AssetKey) -> Option<&GraphAsset> {
        self.assets.get(key)
    }

    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, key: AssetKey) -> Option<&mut GraphAsset> {
        self.assets.get_mut(key)
    }

    /// Removes an asset, returning it if the key was live.
    pub fn remove(&mut self, key: AssetKey) -> Option<GraphAsset> {
        self.assets.remove(key)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: AssetKey) -> bool {
        self.assets.contains_key(key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterates all stored assets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetKey, &GraphAsset)> {
        self.assets.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Texture;

    fn texture(name: &str) -> GraphAsset {
        GraphAsset::Texture(Texture { name: name.into(), width: 4, height: 4 })
    }

    #[test]
    fn register_then_get() {
        let mut store = AssetStore::new();
        let key = store.register(texture("diffuse"));
        assert_eq!(store.get(key).map(GraphAsset::name), Some("diffuse"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn removed_keys_stop_resolving() {
        let mut store = AssetStore::new();
        let key = store.register(texture("t"));
        assert!(store.remove(key).is_some());
        assert!(!store.contains(key));
        assert!(store.get(key).is_none());
        assert!(store.is_empty());
    }
}
