// Host-side tests for renderer payload conversion

#![allow(dead_code)]

mod bridge {
    include!("../src/bridge.rs");
}

use bridge::*;
use glam::Vec3;
use showroom_core::showroom_scene;

#[test]
fn hits_resolve_only_for_registered_meshes() {
    let scene = showroom_scene().unwrap();
    let hit = resolve_hit(&scene, Some("living_wall_5"), [1.0, 2.0, 3.0]).unwrap();
    assert_eq!(Some(hit.surface), scene.find("living_wall_5"));
    assert_eq!(hit.point, Vec3::new(1.0, 2.0, 3.0));

    assert!(resolve_hit(&scene, Some("teapot"), [0.0; 3]).is_none());
    assert!(resolve_hit(&scene, None, [0.0; 3]).is_none());
    assert!(resolve_hit(&scene, Some("marker"), [f32::NAN, 0.0, 0.0]).is_none());
}

#[test]
fn camera_pose_needs_six_finite_values() {
    let pose = pose_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(pose.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(pose.target, Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(pose.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    assert!(pose_from_slice(&[1.0, 2.0, 3.0]).is_none());
    assert!(pose_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, f32::INFINITY]).is_none());
}

#[test]
fn marker_payload_encodes_visibility() {
    assert_eq!(
        marker_payload(Vec3::new(4.0, 0.32, -4.0), true),
        [4.0, 0.32, -4.0, 1.0]
    );
    assert_eq!(marker_payload(Vec3::ZERO, false)[3], 0.0);
}

#[test]
fn surface_names_come_back_for_material_updates() {
    let scene = showroom_scene().unwrap();
    let id = scene.find("entry_wall_1").unwrap();
    let name = surface_name(&scene, id);
    drop(scene);
    assert_eq!(name.as_deref(), Some("entry_wall_1"));
}
