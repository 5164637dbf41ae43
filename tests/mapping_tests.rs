//! Binding Rewrite Tests
//!
//! Table-level tests for `rewrite_binding`:
//! - Typed component entries and their property renames
//! - Hierarchy-only fallback and precedence between the two tables
//! - Root-path joining and stripping, escapes, tombstones
//! - Exact reproduction reporting `Unchanged`

use rebind::graph::{CurveBinding, CurveTrack, InterpolationMode, Track};
use rebind::mapping::ObjectMapping;
use rebind::path::ObjectPath;
use rebind::scene::ComponentKind;
use rebind::{RewriteOutcome, rewrite_binding};

// ============================================================================
// Helpers
// ============================================================================

fn curve(path: &str, target: ComponentKind, property: &str) -> CurveBinding {
    CurveBinding::new(
        path,
        target,
        property,
        Track::Curve(CurveTrack::new(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            InterpolationMode::Linear,
        )),
    )
}

fn rebound(outcome: RewriteOutcome) -> (String, String) {
    match outcome {
        RewriteOutcome::Rebound { path, property } => (path.as_str().to_owned(), property),
        other => panic!("expected Rebound, got {other:?}"),
    }
}

// ============================================================================
// Typed component entries
// ============================================================================

#[test]
fn typed_move_rewrites_path_and_property() {
    let mapping = ObjectMapping::builder()
        .remap_properties(
            ComponentKind::SkinnedRenderer,
            "body/face",
            "face",
            [("blend_shape.smile", "blend_shape.merged_smile")],
        )
        .build();

    let binding = curve("body/face", ComponentKind::SkinnedRenderer, "blend_shape.smile");
    let (path, property) = rebound(rewrite_binding(&ObjectPath::root(), &binding, &mapping));
    assert_eq!(path, "face");
    assert_eq!(property, "blend_shape.merged_smile");
}

#[test]
fn longest_property_prefix_wins() {
    let mapping = ObjectMapping::builder()
        .remap_properties(
            ComponentKind::SkinnedRenderer,
            "face",
            "face",
            [("blend_shape", "shapes"), ("blend_shape.smile", "shapes.grin")],
        )
        .build();

    let binding = curve("face", ComponentKind::SkinnedRenderer, "blend_shape.smile.weight");
    let (_, property) = rebound(rewrite_binding(&ObjectPath::root(), &binding, &mapping));
    assert_eq!(property, "shapes.grin.weight", "the more specific prefix applies");
}

#[test]
fn unmatched_property_passes_through() {
    let mapping = ObjectMapping::builder()
        .remap_properties(
            ComponentKind::SkinnedRenderer,
            "face",
            "head/face",
            [("blend_shape.smile", "blend_shape.grin")],
        )
        .build();

    let binding = curve("face", ComponentKind::SkinnedRenderer, "blend_shape.frown");
    let (path, property) = rebound(rewrite_binding(&ObjectPath::root(), &binding, &mapping));
    assert_eq!(path, "head/face", "the move still applies");
    assert_eq!(property, "blend_shape.frown");
}

#[test]
fn typed_tombstone_is_dangling() {
    let mapping = ObjectMapping::builder()
        .remove_component_path(ComponentKind::Renderer, "hat")
        .build();

    let binding = curve("hat", ComponentKind::Renderer, "enabled");
    assert_eq!(
        rewrite_binding(&ObjectPath::root(), &binding, &mapping),
        RewriteOutcome::Dangling,
    );
}

#[test]
fn typed_entry_matches_kind_exactly() {
    let mapping = ObjectMapping::builder()
        .move_component(ComponentKind::Renderer, "hat", "head/hat")
        .build();

    // Same path, different component kind: the typed table does not apply.
    let binding = curve("hat", ComponentKind::Transform, "local_position.x");
    assert_eq!(
        rewrite_binding(&ObjectPath::root(), &binding, &mapping),
        RewriteOutcome::Unchanged,
    );
}

#[test]
fn typed_identity_move_reports_unchanged() {
    let mapping = ObjectMapping::builder()
        .move_component(ComponentKind::Transform, "arm", "arm")
        .build();

    let binding = curve("arm", ComponentKind::Transform, "local_position.x");
    assert_eq!(
        rewrite_binding(&ObjectPath::root(), &binding, &mapping),
        RewriteOutcome::Unchanged,
        "reproducing the binding exactly is not a change",
    );
}

// ============================================================================
// Precedence and hierarchy fallback
// ============================================================================

#[test]
fn typed_entry_beats_hierarchy_fallback() {
    let mapping = ObjectMapping::builder()
        .move_component(ComponentKind::Transform, "arm", "typed_arm")
        .move_object("arm", "fallback_arm")
        .build();

    let typed = curve("arm", ComponentKind::Transform, "local_position.x");
    let (path, _) = rebound(rewrite_binding(&ObjectPath::root(), &typed, &mapping));
    assert_eq!(path, "typed_arm");

    // A binding of another kind at the same path falls through to the
    // hierarchy table.
    let untyped = curve("arm", ComponentKind::Renderer, "enabled");
    let (path, _) = rebound(rewrite_binding(&ObjectPath::root(), &untyped, &mapping));
    assert_eq!(path, "fallback_arm");
}

#[test]
fn fallback_moves_path_and_keeps_property() {
    let mapping = ObjectMapping::builder().move_object("body/arm", "body/arm_l").build();

    let binding = curve("body/arm", ComponentKind::Transform, "local_scale.y");
    let (path, property) = rebound(rewrite_binding(&ObjectPath::root(), &binding, &mapping));
    assert_eq!(path, "body/arm_l");
    assert_eq!(property, "local_scale.y", "the fallback table never renames properties");
}

#[test]
fn fallback_tombstone_is_dangling() {
    let mapping = ObjectMapping::builder().remove_object("gone").build();
    let binding = curve("gone", ComponentKind::Transform, "local_position.x");
    assert_eq!(
        rewrite_binding(&ObjectPath::root(), &binding, &mapping),
        RewriteOutcome::Dangling,
    );
}

#[test]
fn unmapped_binding_is_unchanged() {
    let mapping = ObjectMapping::builder().move_object("a", "b").build();
    let binding = curve("c", ComponentKind::Transform, "local_position.x");
    assert_eq!(
        rewrite_binding(&ObjectPath::root(), &binding, &mapping),
        RewriteOutcome::Unchanged,
    );
}

// ============================================================================
// Root-path joining and stripping
// ============================================================================

#[test]
fn root_path_is_joined_then_stripped() {
    let mapping = ObjectMapping::builder().move_object("rig/arm", "rig/arm_l").build();

    let binding = curve("arm", ComponentKind::Transform, "local_position.x");
    let root = ObjectPath::from("rig");
    let (path, _) = rebound(rewrite_binding(&root, &binding, &mapping));
    assert_eq!(path, "arm_l", "results come back relative to the animator");
}

#[test]
fn move_out_of_the_animator_subtree_dangles() {
    let mapping = ObjectMapping::builder().move_object("rig/arm", "loose/arm").build();

    let binding = curve("arm", ComponentKind::Transform, "local_position.x");
    assert_eq!(
        rewrite_binding(&ObjectPath::from("rig"), &binding, &mapping),
        RewriteOutcome::Dangling,
        "no relative path reaches a target outside the subtree",
    );
}

#[test]
fn move_onto_the_animator_node_itself_rebinds_to_root() {
    let mapping = ObjectMapping::builder().move_object("rig/arm", "rig").build();

    let binding = curve("arm", ComponentKind::Transform, "local_position.x");
    let root = ObjectPath::from("rig");
    match rewrite_binding(&root, &binding, &mapping) {
        RewriteOutcome::Rebound { path, .. } => {
            assert!(path.is_root(), "the animator's own node is the empty path");
        }
        other => panic!("expected Rebound, got {other:?}"),
    }
}

#[test]
fn binding_on_the_animator_node_can_be_moved() {
    // The binding addresses the animator's own node (empty relative path).
    let mapping = ObjectMapping::builder().move_object("rig", "rig/pivot").build();

    let binding = curve("", ComponentKind::Transform, "local_rotation.y");
    let root = ObjectPath::from("rig");
    let (path, _) = rebound(rewrite_binding(&root, &binding, &mapping));
    assert_eq!(path, "pivot");
}
