//! Object references and the reference visitor.

use crate::scene::ComponentKey;
use crate::store::AssetKey;

/// A serialized object-reference field.
///
/// References carry arena keys rather than host object identity, so a field
/// can point at a live scene component, at a stored asset, or at nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectRef {
    /// The cleared reference.
    #[default]
    None,
    /// A live component in the scene.
    Component(ComponentKey),
    /// An asset in the store.
    Asset(AssetKey),
}

impl ObjectRef {
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, ObjectRef::None)
    }

    /// Returns the asset key when the reference points into the store.
    #[inline]
    #[must_use]
    pub fn as_asset(&self) -> Option<AssetKey> {
        match self {
            ObjectRef::Asset(key) => Some(*key),
            _ => None,
        }
    }

    /// Returns the component key when the reference points into the scene.
    #[inline]
    #[must_use]
    pub fn as_component(&self) -> Option<ComponentKey> {
        match self {
            ObjectRef::Component(key) => Some(*key),
            _ => None,
        }
    }
}

/// Visits every object-reference slot of a serializable value, depth first,
/// in declaration order.
///
/// Implementations recurse through nested structs and lists; strings and
/// scalar fields are leaves and never yield slots. The same value must always
/// yield the same slots in the same order, which lets callers plan
/// substitutions during one walk and apply them in a second.
pub trait VisitObjectRefs {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef));
}

impl VisitObjectRefs for ObjectRef {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        f(self);
    }
}

impl<T: VisitObjectRefs> VisitObjectRefs for Vec<T> {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        for item in self {
            item.visit_object_refs(f);
        }
    }
}
