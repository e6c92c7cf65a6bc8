use glam::Vec3;

// Shared interaction/navigation tuning constants used by the web and native frontends.

// Gestures
pub const CLICK_MAX_HOLD_MS: f64 = 170.0; // presses held this long or longer are camera drags

// Storeys
pub const GROUND_FLOOR_HEIGHT: f32 = 2.0; // camera eye height on the ground floor
pub const UPPER_FLOOR_HEIGHT: f32 = 5.0; // camera eye height in the loft
pub const STOREY_SPLIT_HEIGHT: f32 = 3.0; // below this the camera counts as downstairs
pub const LOFT_LANDING: [f32; 3] = [3.0, 5.0, -16.0]; // where the stairs deliver you upstairs

// Marker
pub const MARKER_GROUND_Y: f32 = 0.32; // marker plane height over the ground floor slab
pub const MARKER_UPPER_Y: f32 = 3.47; // marker plane height over the loft slab
pub const MARKER_START: [f32; 3] = [4.0, 0.32, -4.0];

// Camera
pub const INITIAL_CAMERA_POSITION: [f32; 3] = [7.4001, 2.0, -11.002];
pub const INITIAL_CAMERA_TARGET: [f32; 3] = [7.4, 2.0, -11.0];

// Camera spring
pub const SPRING_TENSION: f32 = 110.0;
pub const SPRING_FRICTION: f32 = 20.0;
pub const SPRING_MASS: f32 = 0.7;
pub const SPRING_PRECISION: f32 = 0.01; // rest threshold for both offset and velocity
pub const SPRING_STEP_SEC: f32 = 0.001; // fixed integration step

// Pricing
pub const AREA_PER_ROLL: f64 = 40.0; // wall area covered by one roll
pub const DEFAULT_OPTION: &str = "wallpaper_6";
pub const DEFAULT_PRICE: f64 = 12.0;
pub const NEUTRAL_MATERIAL: &str = "Color M00";

#[inline]
pub fn loft_landing_vec3() -> Vec3 {
    Vec3::from(LOFT_LANDING)
}

/// Offset from the camera eye to its look-at point.
///
/// The orbit controls need the eye and target to differ, so every station
/// keeps the same tiny nudge the initial camera uses.
#[inline]
pub fn eye_to_target() -> Vec3 {
    Vec3::from(INITIAL_CAMERA_TARGET) - Vec3::from(INITIAL_CAMERA_POSITION)
}
