use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// World-space ray under the cursor, if the cursor is inside the window.
pub fn cursor_ray(
    windows: &Query<&Window, With<PrimaryWindow>>,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Ray3d> {
    let window = windows.single().ok()?;
    let cursor_pos = window.cursor_position()?;
    camera.viewport_to_world(camera_transform, cursor_pos).ok()
}

// Closed-form ray–sphere intersection, returns the nearest t >= 0 or None.
// `direction` must be normalized.
pub fn ray_sphere_hit_t(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t_near = -b - sqrt_d;
    let t_far = -b + sqrt_d;
    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_on_hit_reports_near_surface() {
        let t = ray_sphere_hit_t(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, Vec3::ZERO, 1.0)
            .expect("head-on ray must hit");
        assert!((t - 4.0).abs() < 1.0e-5);
    }

    #[test]
    fn miss_is_none() {
        assert!(ray_sphere_hit_t(Vec3::new(0.0, 2.0, 5.0), -Vec3::Z, Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn origin_inside_sphere_hits_exit_point() {
        let t = ray_sphere_hit_t(Vec3::ZERO, Vec3::X, Vec3::ZERO, 1.0)
            .expect("ray from centre must exit");
        assert!((t - 1.0).abs() < 1.0e-5);
    }

    #[test]
    fn sphere_behind_ray_is_none() {
        assert!(ray_sphere_hit_t(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::ZERO, 1.0).is_none());
    }

    #[test]
    fn grazing_ray_still_hits() {
        let t = ray_sphere_hit_t(Vec3::new(0.9999, 0.0, 5.0), -Vec3::Z, Vec3::ZERO, 1.0);
        assert!(t.is_some());
    }
}
