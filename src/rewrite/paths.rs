//! Curve-binding path rewriting.
//!
//! Bindings address nodes relative to the animator that plays them, while the
//! mapping table speaks absolute hierarchy paths. Rewriting therefore joins
//! the animator's root path on, consults the typed component table first and
//! the hierarchy-only table second, and strips the root path back off.

use crate::graph::CurveBinding;
use crate::mapping::{ObjectMapping, PropertyMap};
use crate::path::{ObjectPath, property_prefixes};

/// Result of rewriting one curve binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The binding already addresses the new hierarchy.
    Unchanged,
    /// The binding must be replaced with the given path and property.
    Rebound { path: ObjectPath, property: String },
    /// The binding's target is gone, or left the animator's subtree; the
    /// binding is to be dropped.
    Dangling,
}

/// Rewrites `binding` for an animator rooted at `root_path`.
///
/// Typed component entries win over hierarchy-only entries; within a typed
/// entry, property renames match the longest dotted prefix first and the
/// unmatched suffix is reattached. A rewrite that reproduces the binding
/// exactly reports [`RewriteOutcome::Unchanged`], so callers can trust the
/// outcome when tracking effective change.
#[must_use]
pub fn rewrite_binding(
    root_path: &ObjectPath,
    binding: &CurveBinding,
    mapping: &ObjectMapping,
) -> RewriteOutcome {
    let absolute = root_path.join(&binding.path);

    if let Some(entry) = mapping.component_entry(binding.target, &absolute) {
        let Some(new_path) = &entry.new_path else {
            return RewriteOutcome::Dangling;
        };
        let Some(relative) = new_path.strip_prefix(root_path) else {
            // Target left this animator's subtree; no relative path reaches it.
            return RewriteOutcome::Dangling;
        };
        let property = rewrite_property(&binding.property, entry.properties.as_ref());
        return resolve(binding, relative, property);
    }

    match mapping.object_target(&absolute) {
        Some(None) => RewriteOutcome::Dangling,
        Some(Some(new_path)) => {
            let Some(relative) = new_path.strip_prefix(root_path) else {
                return RewriteOutcome::Dangling;
            };
            resolve(binding, relative, binding.property.clone())
        }
        None => RewriteOutcome::Unchanged,
    }
}

fn rewrite_property(property: &str, renames: Option<&PropertyMap>) -> String {
    let Some(renames) = renames else {
        return property.to_owned();
    };
    for (prefix, rest) in property_prefixes(property) {
        if let Some(mapped) = renames.get(prefix) {
            return format!("{mapped}{rest}");
        }
    }
    property.to_owned()
}

fn resolve(binding: &CurveBinding, path: ObjectPath, property: String) -> RewriteOutcome {
    if path == binding.path && property == binding.property {
        RewriteOutcome::Unchanged
    } else {
        RewriteOutcome::Rebound { path, property }
    }
}
