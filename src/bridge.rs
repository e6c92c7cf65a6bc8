use glam::Vec3;
use showroom_core::{Hit, Pose, Scene, SurfaceId};

/// Map a mesh name reported by the renderer onto a registered surface.
pub fn resolve_surface(scene: &Scene, name: &str) -> Option<SurfaceId> {
    let found = scene.find(name);
    if found.is_none() {
        log::warn!("[bridge] pointer on unregistered mesh '{}'", name);
    }
    found
}

/// Intersection reported by the renderer, if it named a registered mesh.
pub fn resolve_hit(scene: &Scene, name: Option<&str>, point: [f32; 3]) -> Option<Hit> {
    let surface = resolve_surface(scene, name?)?;
    let point = Vec3::from_array(point);
    if !point.is_finite() {
        log::warn!("[bridge] non-finite hit point {:?}", point);
        return None;
    }
    Some(Hit { surface, point })
}

/// Orbit controls report `[px, py, pz, tx, ty, tz]`.
pub fn pose_from_slice(values: &[f32]) -> Option<Pose> {
    match values {
        [px, py, pz, tx, ty, tz] => {
            let pose = Pose::new(Vec3::new(*px, *py, *pz), Vec3::new(*tx, *ty, *tz));
            (pose.position.is_finite() && pose.target.is_finite()).then_some(pose)
        }
        _ => {
            log::warn!("[bridge] camera pose needs 6 values, got {}", values.len());
            None
        }
    }
}

/// `[x, y, z, visible]` as handed to the marker callback.
#[inline]
pub fn marker_payload(position: Vec3, visible: bool) -> [f32; 4] {
    [position.x, position.y, position.z, if visible { 1.0 } else { 0.0 }]
}

/// Mesh name for a material callback, owned so the scene can be released
/// before JS runs.
pub fn surface_name(scene: &Scene, surface: SurfaceId) -> Option<String> {
    scene.surface(surface).map(|s| s.name.clone())
}
