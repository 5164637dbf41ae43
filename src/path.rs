//! Hierarchy paths and dotted property names.
//!
//! [`ObjectPath`] is a `/`-separated path addressing a node relative to some
//! hierarchy root. The root itself is the empty path, and joining and prefix
//! stripping treat it as the neutral element, so paths compose without ever
//! growing leading or trailing separators.
//!
//! Dotted property names such as `"blend_shape.smile"` are decomposed by
//! [`property_prefixes`] from the most specific prefix to the least, which is
//! the lookup order the property-rename tables expect.

use std::fmt;

/// A `/`-separated hierarchy path, relative to a root node.
///
/// The empty path denotes the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjectPath(String);

impl ObjectPath {
    /// The empty path (the hierarchy root).
    #[must_use]
    pub fn root() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty (root) path.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins a relative path onto this one. Empty operands are absorbed.
    #[must_use]
    pub fn join(&self, rel: &ObjectPath) -> ObjectPath {
        if self.0.is_empty() {
            rel.clone()
        } else if rel.0.is_empty() {
            self.clone()
        } else {
            ObjectPath(format!("{}/{}", self.0, rel.0))
        }
    }

    /// Strips `parent` off the front of this path.
    ///
    /// Returns the remainder relative to `parent`: the root path when the two
    /// are equal, the whole path when `parent` is the root, and `None` when
    /// this path lies outside `parent`'s subtree. Only whole segments match,
    /// so `"body2/arm"` is not inside `"body"`.
    #[must_use]
    pub fn strip_prefix(&self, parent: &ObjectPath) -> Option<ObjectPath> {
        if parent.0.is_empty() {
            return Some(self.clone());
        }
        if self.0 == parent.0 {
            return Some(ObjectPath::root());
        }
        let rest = self.0.strip_prefix(&parent.0)?;
        let rest = rest.strip_prefix('/')?;
        Some(ObjectPath(rest.to_owned()))
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectPath {
    fn from(path: &str) -> Self {
        Self(path.to_owned())
    }
}

impl From<String> for ObjectPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Iterates the prefixes of a dotted property name from most specific to
/// least, paired with the suffix each one leaves behind.
///
/// `"a.b.c"` yields `("a.b.c", "")`, `("a.b", ".c")`, `("a", ".b.c")`.
pub fn property_prefixes(property: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut end = Some(property.len());
    std::iter::from_fn(move || {
        let at = end?;
        end = property[..at].rfind('.');
        Some((&property[..at], &property[at..]))
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_absorbs_empty_operands() {
        let root = ObjectPath::root();
        let arm = ObjectPath::from("body/arm");
        assert_eq!(root.join(&arm), arm);
        assert_eq!(arm.join(&root), arm);
        assert_eq!(arm.join(&ObjectPath::from("hand")).as_str(), "body/arm/hand");
    }

    #[test]
    fn strip_prefix_of_equal_path_is_root() {
        let p = ObjectPath::from("body/arm");
        assert_eq!(p.strip_prefix(&p), Some(ObjectPath::root()));
    }

    #[test]
    fn strip_prefix_of_root_keeps_path() {
        let p = ObjectPath::from("body/arm");
        assert_eq!(p.strip_prefix(&ObjectPath::root()), Some(p.clone()));
    }

    #[test]
    fn strip_prefix_requires_whole_segments() {
        let p = ObjectPath::from("body2/arm");
        assert_eq!(p.strip_prefix(&ObjectPath::from("body")), None);
    }

    #[test]
    fn strip_prefix_outside_subtree_fails() {
        let p = ObjectPath::from("hips/leg");
        assert_eq!(p.strip_prefix(&ObjectPath::from("body")), None);
    }

    #[test]
    fn property_prefixes_most_specific_first() {
        let got: Vec<_> = property_prefixes("a.b.c").collect();
        assert_eq!(got, vec![("a.b.c", ""), ("a.b", ".c"), ("a", ".b.c")]);
    }

    #[test]
    fn property_prefixes_without_dots() {
        let got: Vec<_> = property_prefixes("weight").collect();
        assert_eq!(got, vec![("weight", "")]);
    }
}
