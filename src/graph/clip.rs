//! Animation clips and their curve bindings.

use glam::Vec3;

use crate::graph::tracks::Track;
use crate::object::{ObjectRef, VisitObjectRefs};
use crate::path::ObjectPath;
use crate::scene::ComponentKind;

/// Wrapping behavior past the end of a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    #[default]
    Once,
    Loop,
    PingPong,
}

/// Axis-aligned bounds metadata carried by a clip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipBounds {
    pub center: Vec3,
    pub extents: Vec3,
}

/// One animated property: a hierarchy location, the component type owning
/// the property there, the dotted property name, and the track data.
#[derive(Debug, Clone)]
pub struct CurveBinding {
    /// Node path relative to the animator that plays the clip.
    pub path: ObjectPath,
    /// Component type the property lives on.
    pub target: ComponentKind,
    /// Dotted property name, e.g. `"blend_shape.smile"`.
    pub property: String,
    pub track: Track,
}

impl CurveBinding {
    #[must_use]
    pub fn new(
        path: impl Into<ObjectPath>,
        target: ComponentKind,
        property: impl Into<String>,
        track: Track,
    ) -> Self {
        Self { path: path.into(), target, property: property.into(), track }
    }
}

/// A keyframed animation clip.
#[derive(Debug, Clone)]
pub struct Clip {
    pub name: String,
    pub frame_rate: f32,
    pub wrap_mode: WrapMode,
    pub loop_time: bool,
    pub bounds: ClipBounds,
    pub curves: Vec<CurveBinding>,
}

impl Clip {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frame_rate: 60.0,
            wrap_mode: WrapMode::default(),
            loop_time: false,
            bounds: ClipBounds::default(),
            curves: Vec::new(),
        }
    }
}

impl VisitObjectRefs for Clip {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        for binding in &mut self.curves {
            binding.track.visit_object_refs(f);
        }
    }
}
