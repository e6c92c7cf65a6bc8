// Host-side tests for station selection and spring-driven camera transitions.

use glam::Vec3;
use showroom_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn navigator() -> Navigator {
    let config = ShowroomConfig::default();
    Navigator::new(config.initial_pose, config.spring)
}

fn run_until_rest(nav: &mut Navigator) -> usize {
    let mut frames = 0;
    while nav.is_transitioning() {
        nav.tick(FRAME);
        frames += 1;
        assert!(frames < 2000, "transition never came to rest");
    }
    frames
}

fn assert_close(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
}

#[test]
fn stairs_from_ground_go_to_loft_landing() {
    let station =
        station_for(SurfaceKind::Stairs, Vec3::new(1.0, 1.0, -9.0), 2.0, 2.0).unwrap();
    assert_eq!(station.kind, StationKind::LoftLanding);
    assert_eq!(station.pose.position, Vec3::new(3.0, 5.0, -16.0));
    assert_eq!(station.floor_height, 5.0);
}

#[test]
fn stairs_from_loft_go_down_at_clicked_point() {
    let station =
        station_for(SurfaceKind::Stairs, Vec3::new(1.0, 3.3, -9.0), 5.0, 5.0).unwrap();
    assert_eq!(station.kind, StationKind::Ground);
    assert_eq!(station.pose.position, Vec3::new(1.0, 2.0, -9.0));
    assert_eq!(station.floor_height, 2.0);
}

#[test]
fn ground_floor_always_lands_at_ground_height() {
    let station = station_for(
        SurfaceKind::Floor(Storey::Ground),
        Vec3::new(4.0, 0.3, -4.0),
        5.0,
        5.0,
    )
    .unwrap();
    assert_eq!(station.pose.position, Vec3::new(4.0, 2.0, -4.0));
    assert_eq!(station.floor_height, 2.0);
}

#[test]
fn upper_floor_and_marker_keep_current_floor_height() {
    for kind in [SurfaceKind::Floor(Storey::Upper), SurfaceKind::MarkerProxy] {
        let station = station_for(kind, Vec3::new(6.0, 3.4, -12.0), 5.0, 5.0).unwrap();
        assert_eq!(station.kind, StationKind::SameStorey);
        assert_eq!(station.pose.position, Vec3::new(6.0, 5.0, -12.0));
    }
}

#[test]
fn walls_and_static_meshes_are_not_stations() {
    assert!(station_for(SurfaceKind::PaintableWall, Vec3::ZERO, 2.0, 2.0).is_none());
    assert!(station_for(SurfaceKind::Static, Vec3::ZERO, 2.0, 2.0).is_none());
}

#[test]
fn stairs_round_trip_between_storeys() {
    let mut nav = navigator();
    let mut state = InteractionState::default();

    let up = nav.request(SurfaceKind::Stairs, Vec3::new(2.0, 1.0, -14.0), &mut state);
    assert!(matches!(up, NavOutcome::Started(s) if s.kind == StationKind::LoftLanding));
    assert_eq!(state.floor_height(), 5.0);
    run_until_rest(&mut nav);
    assert_close(nav.camera().position, Vec3::new(3.0, 5.0, -16.0));

    let down = nav.request(SurfaceKind::Stairs, Vec3::new(2.5, 3.5, -14.5), &mut state);
    assert!(matches!(down, NavOutcome::Started(s) if s.kind == StationKind::Ground));
    assert_eq!(state.floor_height(), 2.0);
    run_until_rest(&mut nav);
    assert_close(nav.camera().position, Vec3::new(2.5, 2.0, -14.5));
}

#[test]
fn second_request_during_transition_is_ignored() {
    let mut nav = navigator();
    let mut state = InteractionState::default();

    nav.request(SurfaceKind::Stairs, Vec3::new(2.0, 1.0, -14.0), &mut state);
    nav.tick(FRAME);
    let second = nav.request(
        SurfaceKind::Floor(Storey::Ground),
        Vec3::new(9.0, 0.3, -3.0),
        &mut state,
    );

    assert_eq!(second, NavOutcome::Busy);
    assert_eq!(
        nav.destination().unwrap().position,
        Vec3::new(3.0, 5.0, -16.0)
    );
    assert_eq!(state.floor_height(), 5.0);
}

#[test]
fn look_at_snaps_while_eye_eases() {
    let mut nav = navigator();
    let mut state = InteractionState::default();
    let start = nav.camera();

    nav.request(SurfaceKind::Stairs, Vec3::ZERO, &mut state);
    let destination = nav.destination().unwrap();

    assert_eq!(nav.camera().target, destination.target);
    assert_eq!(nav.camera().position, start.position);

    let moved = nav.tick(FRAME).unwrap();
    assert_ne!(moved.position, start.position);
    assert_ne!(moved.position, destination.position);
    assert_eq!(moved.target, destination.target);
}

#[test]
fn cancelling_stops_per_frame_updates() {
    let mut nav = navigator();
    let mut state = InteractionState::default();

    nav.request(SurfaceKind::Stairs, Vec3::ZERO, &mut state);
    nav.tick(FRAME);
    assert!(nav.cancel());
    assert!(!nav.is_transitioning());

    let frozen = nav.camera();
    assert_eq!(nav.tick(FRAME), None);
    assert_eq!(nav.camera(), frozen);
    assert!(!nav.cancel());
}

#[test]
fn zero_distance_transition_rests_on_next_frame() {
    let pose = Pose::standing_at(Vec3::new(1.0, 2.0, 3.0));
    let mut transition = CameraTransition::new(pose, pose);
    let step = transition.tick(&SpringConfig::default(), FRAME);
    assert_eq!(step, TransitionStep::Complete(pose));
}

#[test]
fn transition_completes_exactly_on_destination() {
    let from = Pose::standing_at(Vec3::new(7.4, 2.0, -11.0));
    let to = Pose::standing_at(Vec3::new(3.0, 5.0, -16.0));
    let mut transition = CameraTransition::new(from, to);
    let cfg = SpringConfig::default();

    let mut last = transition.tick(&cfg, FRAME);
    let mut frames = 1;
    while !last.is_complete() {
        last = transition.tick(&cfg, FRAME);
        frames += 1;
        assert!(frames < 2000);
    }
    assert_eq!(last.pose(), to);
    // roughly a second with the default spring
    assert!(frames > 10 && frames < 300, "took {frames} frames");
}

#[test]
fn spring_does_not_overshoot_with_default_damping() {
    let mut spring = Spring3::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
    let cfg = SpringConfig::default();
    for _ in 0..200 {
        spring.step(&cfg, 0.016);
        assert!(spring.value().x <= 10.0 + 1e-4);
    }
    assert!(spring.at_rest(&cfg));
}

#[test]
fn orbit_sync_is_ignored_mid_transition() {
    let mut nav = navigator();
    let mut state = InteractionState::default();
    let orbit = Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 4.0));

    nav.request(SurfaceKind::Stairs, Vec3::ZERO, &mut state);
    nav.sync_camera(orbit);
    assert_ne!(nav.camera(), orbit);

    run_until_rest(&mut nav);
    nav.sync_camera(orbit);
    assert_eq!(nav.camera(), orbit);
}
