//! Track payloads for clip curves.

use crate::object::{ObjectRef, VisitObjectRefs};

/// Interpolation applied between keyframes of a numeric curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    #[default]
    Linear,
    Step,
    CubicSpline,
}

/// A sampled numeric curve with parallel time and value arrays.
#[derive(Debug, Clone, Default)]
pub struct CurveTrack {
    pub times: Vec<f32>,
    pub values: Vec<f32>,
    pub interpolation: InterpolationMode,
}

impl CurveTrack {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<f32>, interpolation: InterpolationMode) -> Self {
        Self { times, values, interpolation }
    }

    /// Number of keyframes in the track.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// A stepwise object-reference keyframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectKeyframe {
    pub time: f32,
    pub value: ObjectRef,
}

/// A track whose keyframes swap whole object references (sprite flips,
/// material swaps) rather than interpolate numbers.
#[derive(Debug, Clone, Default)]
pub struct ObjectTrack {
    pub keys: Vec<ObjectKeyframe>,
}

/// The payload of one curve binding.
#[derive(Debug, Clone)]
pub enum Track {
    Curve(CurveTrack),
    Object(ObjectTrack),
}

impl Track {
    /// Whether this track carries object-reference keyframes.
    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Track::Object(_))
    }
}

impl VisitObjectRefs for Track {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        if let Track::Object(track) = self {
            for key in &mut track.keys {
                f(&mut key.value);
            }
        }
    }
}
