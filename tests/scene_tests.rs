//! Scene Hierarchy Tests
//!
//! Covers:
//! - Path derivation relative to hierarchy roots and its inverse lookup
//! - Node linking and removal
//! - Component reference-slot visiting order and writability

use rebind::graph::GraphAsset;
use rebind::object::{ObjectRef, VisitObjectRefs};
use rebind::path::ObjectPath;
use rebind::scene::{
    Animator, ComponentData, ComponentKind, ProbeSettings, Renderer, Scene, SphereCollider,
    SpringBone,
};
use rebind::store::AssetStore;

// ============================================================================
// Paths
// ============================================================================

#[test]
fn root_resolves_to_the_empty_path() {
    let mut scene = Scene::new();
    let root = scene.add_root("avatar");
    let path = scene.path_of(root).unwrap();
    assert!(path.is_root(), "the root contributes nothing to paths, got '{path}'");
}

#[test]
fn paths_chain_child_names() {
    let mut scene = Scene::new();
    let root = scene.add_root("avatar");
    let body = scene.add_child(root, "body");
    let arm = scene.add_child(body, "arm");

    assert_eq!(scene.path_of(body).unwrap().as_str(), "body");
    assert_eq!(scene.path_of(arm).unwrap().as_str(), "body/arm");
}

#[test]
fn find_node_inverts_path_of() {
    let mut scene = Scene::new();
    let root = scene.add_root("avatar");
    let body = scene.add_child(root, "body");
    let arm = scene.add_child(body, "arm");

    let path = scene.path_of(arm).unwrap();
    assert_eq!(scene.find_node(root, &path), Some(arm));
    assert_eq!(scene.find_node(root, &ObjectPath::root()), Some(root));
    assert_eq!(scene.find_node(body, &ObjectPath::from("arm")), Some(arm));
    assert_eq!(scene.find_node(root, &ObjectPath::from("body/leg")), None);
}

#[test]
fn removing_a_node_stales_its_descendants() {
    let mut scene = Scene::new();
    let root = scene.add_root("avatar");
    let body = scene.add_child(root, "body");
    let arm = scene.add_child(body, "arm");

    assert!(scene.remove_node(body));
    assert!(!scene.remove_node(body), "double removal reports false");
    assert!(scene.node(body).is_none());
    assert!(
        scene.path_of(arm).is_none(),
        "a detached child no longer resolves to a path",
    );
    assert!(scene.node(root).unwrap().children().is_empty(), "parent link is cleaned up");
}

#[test]
fn children_link_both_ways() {
    let mut scene = Scene::new();
    let root = scene.add_root("avatar");
    let body = scene.add_child(root, "body");

    assert_eq!(scene.node(body).unwrap().parent(), Some(root));
    assert_eq!(scene.node(root).unwrap().children(), [body]);
    assert_eq!(scene.node(root).unwrap().parent(), None);
}

// ============================================================================
// Component payloads and their reference slots
// ============================================================================

fn collect_refs(data: &mut ComponentData) -> Vec<ObjectRef> {
    let mut slots = Vec::new();
    data.visit_object_refs(&mut |r| slots.push(*r));
    slots
}

#[test]
fn component_kind_matches_payload() {
    let animator = ComponentData::Animator(Animator::default());
    assert_eq!(animator.kind(), ComponentKind::Animator);
    let renderer = ComponentData::Renderer(Renderer::default());
    assert_eq!(renderer.kind(), ComponentKind::Renderer);
    let bone = ComponentData::SpringBone(SpringBone::default());
    assert_eq!(bone.kind(), ComponentKind::SpringBone);
    let collider = ComponentData::Collider(SphereCollider::default());
    assert_eq!(collider.kind(), ComponentKind::Collider);
}

#[test]
fn renderer_slots_come_in_declaration_order() {
    let mut store = AssetStore::new();
    let m0 = store.register(GraphAsset::Texture(rebind::graph::Texture {
        name: "a".into(),
        width: 4,
        height: 4,
    }));
    let m1 = store.register(GraphAsset::Texture(rebind::graph::Texture {
        name: "b".into(),
        width: 4,
        height: 4,
    }));

    let mut scene = Scene::new();
    let root = scene.add_root("avatar");
    let anchor = scene.add_component(root, ComponentData::Collider(SphereCollider::default()));

    let mut data = ComponentData::Renderer(Renderer {
        materials: vec![ObjectRef::Asset(m0), ObjectRef::Asset(m1)],
        probes: ProbeSettings { anchor: ObjectRef::Component(anchor) },
    });
    assert_eq!(
        collect_refs(&mut data),
        [
            ObjectRef::Asset(m0),
            ObjectRef::Asset(m1),
            ObjectRef::Component(anchor),
        ],
        "materials first, then the nested probe anchor",
    );
}

#[test]
fn spring_bone_visits_root_then_colliders() {
    let mut scene = Scene::new();
    let root = scene.add_root("avatar");
    let c0 = scene.add_component(root, ComponentData::Collider(SphereCollider::default()));
    let c1 = scene.add_component(root, ComponentData::Collider(SphereCollider::default()));

    let mut data = ComponentData::SpringBone(SpringBone {
        root: ObjectRef::None,
        colliders: vec![ObjectRef::Component(c0), ObjectRef::Component(c1)],
    });
    assert_eq!(
        collect_refs(&mut data),
        [ObjectRef::None, ObjectRef::Component(c0), ObjectRef::Component(c1)],
    );
}

#[test]
fn visitor_slots_are_writable() {
    let mut data = ComponentData::Animator(Animator::default());
    data.visit_object_refs(&mut |r| {
        assert_eq!(*r, ObjectRef::None);
    });

    let mut scene = Scene::new();
    let root = scene.add_root("avatar");
    let key = scene.add_component(root, ComponentData::Collider(SphereCollider::default()));
    let mut data = ComponentData::SpringBone(SpringBone {
        root: ObjectRef::Component(key),
        colliders: Vec::new(),
    });
    data.visit_object_refs(&mut |r| *r = ObjectRef::None);
    assert_eq!(collect_refs(&mut data), [ObjectRef::None]);
}

#[test]
fn colliders_expose_no_slots() {
    let mut data = ComponentData::Collider(SphereCollider { radius: 0.5 });
    assert!(collect_refs(&mut data).is_empty());
}
