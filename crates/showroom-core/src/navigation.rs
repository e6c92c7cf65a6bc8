use crate::config::SpringConfig;
use crate::constants::{loft_landing_vec3, GROUND_FLOOR_HEIGHT, STOREY_SPLIT_HEIGHT};
use crate::scene::{Storey, SurfaceKind};
use crate::spring::{CameraTransition, TransitionStep};
use crate::state::{InteractionState, Pose};
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StationKind {
    /// Somewhere on the ground floor.
    Ground,
    /// Top of the stairs.
    LoftLanding,
    /// A point on whichever storey the camera is already on.
    SameStorey,
}

/// A camera destination together with the floor height it puts the viewer on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Station {
    pub kind: StationKind,
    pub pose: Pose,
    pub floor_height: f32,
}

impl Station {
    pub fn ground(x: f32, z: f32) -> Self {
        Self {
            kind: StationKind::Ground,
            pose: Pose::standing_at(Vec3::new(x, GROUND_FLOOR_HEIGHT, z)),
            floor_height: GROUND_FLOOR_HEIGHT,
        }
    }

    pub fn loft_landing() -> Self {
        Self {
            kind: StationKind::LoftLanding,
            pose: Pose::standing_at(loft_landing_vec3()),
            floor_height: Storey::Upper.height(),
        }
    }

    pub fn same_storey(x: f32, z: f32, floor_height: f32) -> Self {
        Self {
            kind: StationKind::SameStorey,
            pose: Pose::standing_at(Vec3::new(x, floor_height, z)),
            floor_height,
        }
    }
}

/// Where clicking a surface of `kind` at `point` sends the camera.
///
/// `camera_height` is the eye height of the last destination; stairs lead up
/// from below the split height and back down otherwise.
pub fn station_for(
    kind: SurfaceKind,
    point: Vec3,
    camera_height: f32,
    floor_height: f32,
) -> Option<Station> {
    match kind {
        SurfaceKind::Stairs if camera_height < STOREY_SPLIT_HEIGHT => Some(Station::loft_landing()),
        SurfaceKind::Stairs | SurfaceKind::Floor(Storey::Ground) => {
            Some(Station::ground(point.x, point.z))
        }
        SurfaceKind::Floor(Storey::Upper) | SurfaceKind::MarkerProxy => {
            Some(Station::same_storey(point.x, point.z, floor_height))
        }
        SurfaceKind::PaintableWall | SurfaceKind::Static => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavOutcome {
    Started(Station),
    /// A transition is already in flight; the request was dropped.
    Busy,
    NotNavigable,
}

#[derive(Clone, Debug)]
pub enum NavState {
    Idle,
    Transitioning(CameraTransition),
}

/// Moves the camera between stations, at most one transition at a time.
#[derive(Clone, Debug)]
pub struct Navigator {
    spring: SpringConfig,
    camera: Pose,
    resting: Pose,
    state: NavState,
}

impl Navigator {
    pub fn new(initial: Pose, spring: SpringConfig) -> Self {
        Self {
            spring,
            camera: initial,
            resting: initial,
            state: NavState::Idle,
        }
    }

    /// Camera position plus the orbit-control target.
    pub fn camera(&self) -> Pose {
        self.camera
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, NavState::Transitioning(_))
    }

    pub fn destination(&self) -> Option<Pose> {
        match &self.state {
            NavState::Transitioning(t) => Some(t.destination()),
            NavState::Idle => None,
        }
    }

    /// The pose of the last station navigated to.
    pub fn resting(&self) -> Pose {
        self.resting
    }

    pub fn request(
        &mut self,
        kind: SurfaceKind,
        point: Vec3,
        state: &mut InteractionState,
    ) -> NavOutcome {
        if self.is_transitioning() {
            log::debug!("[nav] transition in flight; ignoring {:?} click", kind);
            return NavOutcome::Busy;
        }
        let Some(station) = station_for(kind, point, self.resting.position.y, state.floor_height())
        else {
            return NavOutcome::NotNavigable;
        };
        log::info!(
            "[nav] {:?} -> ({:.2},{:.2},{:.2})",
            station.kind,
            station.pose.position.x,
            station.pose.position.y,
            station.pose.position.z
        );
        state.set_floor_height(station.floor_height);
        self.state = NavState::Transitioning(CameraTransition::new(self.camera, station.pose));
        // look-at snaps immediately, only the eye eases
        self.camera.target = station.pose.target;
        self.resting = station.pose;
        NavOutcome::Started(station)
    }

    /// Abandon any transition where it stands. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match std::mem::replace(&mut self.state, NavState::Idle) {
            NavState::Transitioning(t) => {
                log::info!("[nav] transition cancelled after {:?}", t.elapsed());
                true
            }
            NavState::Idle => false,
        }
    }

    /// Orbit controls moved the camera. Ignored while a transition owns it.
    pub fn sync_camera(&mut self, pose: Pose) {
        if !self.is_transitioning() {
            self.camera = pose;
        }
    }

    /// Per-frame step. Forces the camera eye onto the spring and returns the
    /// new camera pose while a transition is running.
    pub fn tick(&mut self, dt: Duration) -> Option<Pose> {
        let NavState::Transitioning(transition) = &mut self.state else {
            return None;
        };
        let step = transition.tick(&self.spring, dt);
        self.camera.position = step.pose().position;
        if let TransitionStep::Complete(pose) = step {
            log::info!(
                "[nav] arrived at ({:.2},{:.2},{:.2})",
                pose.position.x,
                pose.position.y,
                pose.position.z
            );
            self.state = NavState::Idle;
        }
        Some(self.camera)
    }
}
