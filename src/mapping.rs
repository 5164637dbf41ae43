//! The mapping table: how hierarchy locations and properties were renamed.
//!
//! An [`ObjectMapping`] is assembled through an [`ObjectMappingBuilder`]
//! while the host tool performs its scene surgery (merges, deletions,
//! renames), then handed read-only to the remapping pass. Lookups are pure;
//! nothing here inspects scene state, so the same mapping can serve any
//! number of passes.

use rustc_hash::FxHashMap;

use crate::object::ObjectRef;
use crate::path::ObjectPath;
use crate::scene::{ComponentKey, ComponentKind};

/// Old property name to new property name, per hierarchy location.
pub type PropertyMap = FxHashMap<String, String>;

/// Where a typed component location went, and how its properties renamed.
#[derive(Debug, Clone, Default)]
pub struct ComponentPathEntry {
    /// New hierarchy path, or `None` when the component was removed or
    /// merged away (a tombstone).
    pub new_path: Option<ObjectPath>,
    /// Property renames at this location. `None` means no property changed
    /// here; matching stays enabled either way.
    pub properties: Option<PropertyMap>,
}

/// The read-only mapping applied by a remapping pass.
///
/// Three tables, consulted in this precedence order:
/// 1. `component_identity`: old component key to replacement reference,
///    applied unconditionally to plain reference fields.
/// 2. `component_paths`: per component kind, old absolute path to
///    [`ComponentPathEntry`], for curve bindings with a typed target.
/// 3. `object_paths`: hierarchy-only fallback, old absolute path to new
///    (`None` tombstones a deleted node).
#[derive(Debug, Clone, Default)]
pub struct ObjectMapping {
    component_identity: FxHashMap<ComponentKey, ObjectRef>,
    component_paths: FxHashMap<ComponentKind, FxHashMap<ObjectPath, ComponentPathEntry>>,
    object_paths: FxHashMap<ObjectPath, Option<ObjectPath>>,
}

impl ObjectMapping {
    /// Starts assembling a mapping.
    #[must_use]
    pub fn builder() -> ObjectMappingBuilder {
        ObjectMappingBuilder::default()
    }

    /// Identity substitution recorded for a component, if any.
    ///
    /// `Some(ObjectRef::None)` records a deleted component: the referencing
    /// field is cleared rather than left dangling.
    #[must_use]
    pub fn identity_for(&self, key: ComponentKey) -> Option<ObjectRef> {
        self.component_identity.get(&key).copied()
    }

    /// Typed mapping entry for a component kind at an absolute path.
    #[must_use]
    pub fn component_entry(
        &self,
        kind: ComponentKind,
        path: &ObjectPath,
    ) -> Option<&ComponentPathEntry> {
        self.component_paths.get(&kind)?.get(path)
    }

    /// Hierarchy-only mapping for an absolute path. The outer `Option` is
    /// "was anything recorded"; the inner `None` is a tombstone.
    #[must_use]
    pub fn object_target(&self, path: &ObjectPath) -> Option<Option<&ObjectPath>> {
        self.object_paths.get(path).map(Option::as_ref)
    }

    /// Whether the mapping holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.component_identity.is_empty()
            && self.component_paths.is_empty()
            && self.object_paths.is_empty()
    }
}

/// Assembles an [`ObjectMapping`].
///
/// Recorders merge: a property table recorded after a move of the same
/// location extends that location's entry instead of replacing it.
#[derive(Debug, Default)]
pub struct ObjectMappingBuilder {
    mapping: ObjectMapping,
}

impl ObjectMappingBuilder {
    /// Records that `old` is now represented by `new`.
    #[must_use]
    pub fn remap_component(mut self, old: ComponentKey, new: ComponentKey) -> Self {
        self.mapping.component_identity.insert(old, ObjectRef::Component(new));
        self
    }

    /// Records that `old` was deleted; references to it will be cleared.
    #[must_use]
    pub fn remove_component(mut self, old: ComponentKey) -> Self {
        self.mapping.component_identity.insert(old, ObjectRef::None);
        self
    }

    /// Records that the `kind` component at `old_path` now lives at
    /// `new_path`.
    #[must_use]
    pub fn move_component(
        mut self,
        kind: ComponentKind,
        old_path: impl Into<ObjectPath>,
        new_path: impl Into<ObjectPath>,
    ) -> Self {
        self.component_entry(kind, old_path.into()).new_path = Some(new_path.into());
        self
    }

    /// Records a tombstone: the `kind` component at `old_path` is gone and
    /// bindings targeting it are to be dropped.
    #[must_use]
    pub fn remove_component_path(
        mut self,
        kind: ComponentKind,
        old_path: impl Into<ObjectPath>,
    ) -> Self {
        self.component_entry(kind, old_path.into()).new_path = None;
        self
    }

    /// Records property renames for the `kind` component that moved from
    /// `old_path` to `new_path`. Pass the same path twice when only the
    /// properties changed.
    #[must_use]
    pub fn remap_properties<K, V>(
        mut self,
        kind: ComponentKind,
        old_path: impl Into<ObjectPath>,
        new_path: impl Into<ObjectPath>,
        properties: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entry = self.component_entry(kind, old_path.into());
        entry.new_path = Some(new_path.into());
        entry
            .properties
            .get_or_insert_with(PropertyMap::default)
            .extend(properties.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Records that the node at `old_path` now lives at `new_path`.
    #[must_use]
    pub fn move_object(
        mut self,
        old_path: impl Into<ObjectPath>,
        new_path: impl Into<ObjectPath>,
    ) -> Self {
        self.mapping.object_paths.insert(old_path.into(), Some(new_path.into()));
        self
    }

    /// Records that the node at `old_path` was deleted.
    #[must_use]
    pub fn remove_object(mut self, old_path: impl Into<ObjectPath>) -> Self {
        self.mapping.object_paths.insert(old_path.into(), None);
        self
    }

    /// Finishes the mapping.
    #[must_use]
    pub fn build(self) -> ObjectMapping {
        self.mapping
    }

    fn component_entry(
        &mut self,
        kind: ComponentKind,
        path: ObjectPath,
    ) -> &mut ComponentPathEntry {
        self.mapping
            .component_paths
            .entry(kind)
            .or_default()
            .entry(path)
            .or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
