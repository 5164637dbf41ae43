//! State machines, states, transitions and behaviours.

use smallvec::SmallVec;

use crate::object::{ObjectRef, VisitObjectRefs};

/// Comparison applied by a transition condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionPredicate {
    If,
    IfNot,
    Greater,
    Less,
    Equals,
    NotEquals,
}

/// A single condition gating a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionCondition {
    pub parameter: String,
    pub predicate: ConditionPredicate,
    pub threshold: f32,
}

/// An edge between states, or into a nested machine.
#[derive(Debug, Clone)]
pub struct Transition {
    /// Destination state or state machine.
    pub target: ObjectRef,
    /// Cross-fade duration in seconds.
    pub duration: f32,
    /// Normalized start offset in the destination motion.
    pub offset: f32,
    pub has_exit_time: bool,
    pub exit_time: f32,
    pub conditions: SmallVec<[TransitionCondition; 2]>,
}

impl Transition {
    /// A transition to `target` with no conditions and no exit time.
    #[must_use]
    pub fn to(target: ObjectRef) -> Self {
        Self {
            target,
            duration: 0.25,
            offset: 0.0,
            has_exit_time: false,
            exit_time: 0.0,
            conditions: SmallVec::new(),
        }
    }
}

impl VisitObjectRefs for Transition {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        f(&mut self.target);
    }
}

/// A scripted payload attached to a state or machine. The script body is
/// opaque; only its object-reference fields participate in remapping.
#[derive(Debug, Clone, Default)]
pub struct Behaviour {
    pub script: String,
    pub refs: Vec<ObjectRef>,
}

impl Behaviour {
    #[must_use]
    pub fn new(script: impl Into<String>) -> Self {
        Self { script: script.into(), refs: Vec::new() }
    }
}

impl VisitObjectRefs for Behaviour {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        self.refs.visit_object_refs(f);
    }
}

/// A node playing a motion, with outgoing transitions.
#[derive(Debug, Clone)]
pub struct State {
    pub name: String,
    pub motion: ObjectRef,
    pub speed: f32,
    pub transitions: Vec<ObjectRef>,
    pub behaviours: Vec<ObjectRef>,
}

impl State {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            motion: ObjectRef::None,
            speed: 1.0,
            transitions: Vec::new(),
            behaviours: Vec::new(),
        }
    }
}

impl VisitObjectRefs for State {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        f(&mut self.motion);
        self.transitions.visit_object_refs(f);
        self.behaviours.visit_object_refs(f);
    }
}

/// A state machine, possibly nesting sub machines.
#[derive(Debug, Clone)]
pub struct StateMachine {
    pub name: String,
    pub states: Vec<ObjectRef>,
    /// Nested sub machines.
    pub machines: Vec<ObjectRef>,
    pub default_state: ObjectRef,
    /// Transitions evaluated from any state.
    pub any_transitions: Vec<ObjectRef>,
    pub behaviours: Vec<ObjectRef>,
}

impl StateMachine {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            machines: Vec::new(),
            default_state: ObjectRef::None,
            any_transitions: Vec::new(),
            behaviours: Vec::new(),
        }
    }
}

impl VisitObjectRefs for StateMachine {
    fn visit_object_refs(&mut self, f: &mut dyn FnMut(&mut ObjectRef)) {
        self.states.visit_object_refs(f);
        self.machines.visit_object_refs(f);
        f(&mut self.default_state);
        self.any_transitions.visit_object_refs(f);
        self.behaviours.visit_object_refs(f);
    }
}
