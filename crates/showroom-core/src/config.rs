use crate::constants::{
    AREA_PER_ROLL, CLICK_MAX_HOLD_MS, INITIAL_CAMERA_POSITION, INITIAL_CAMERA_TARGET, MARKER_START,
    SPRING_FRICTION, SPRING_MASS, SPRING_PRECISION, SPRING_TENSION,
};
use crate::state::{Pose, Selection};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
    pub precision: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: SPRING_TENSION,
            friction: SPRING_FRICTION,
            mass: SPRING_MASS,
            precision: SPRING_PRECISION,
        }
    }
}

/// What a click on a surface that is neither navigable nor a declared wall does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownSurfacePolicy {
    /// Log the click and leave everything untouched.
    #[default]
    Ignore,
    /// Toggle its material like a wall with zero area.
    Paint,
}

#[derive(Clone, Debug)]
pub struct ShowroomConfig {
    pub click_max_hold_ms: f64,
    pub area_per_roll: f64,
    pub spring: SpringConfig,
    pub unknown_surfaces: UnknownSurfacePolicy,
    pub initial_pose: Pose,
    pub initial_selection: Selection,
    pub marker_start: Vec3,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            click_max_hold_ms: CLICK_MAX_HOLD_MS,
            area_per_roll: AREA_PER_ROLL,
            spring: SpringConfig::default(),
            unknown_surfaces: UnknownSurfacePolicy::default(),
            initial_pose: Pose::new(
                Vec3::from(INITIAL_CAMERA_POSITION),
                Vec3::from(INITIAL_CAMERA_TARGET),
            ),
            initial_selection: Selection::default(),
            marker_start: Vec3::from(MARKER_START),
        }
    }
}
