use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;

use constants::camera::{
    DOLLY_STEP, MAX_DISTANCE, MIN_DISTANCE, PITCH_LIMIT, PITCH_SENSITIVITY, SMOOTHING,
    START_DISTANCE, START_PITCH, START_YAW, YAW_SENSITIVITY,
};

use crate::engine::globe::rotation::GlobeSpin;
use crate::engine::markers::picking::PointerOverMarker;
use crate::ui::interactions::PointerOverUi;

/// Orbit rig around the globe: spherical pose plus drag bookkeeping. The real
/// camera transform chases the rig pose with smoothing.
#[derive(Resource)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub orbiting: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: START_YAW,
            pitch: START_PITCH,
            distance: START_DISTANCE,
            orbiting: false,
        }
    }
}

impl OrbitCamera {
    pub fn target_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0)
    }

    pub fn target_translation(&self) -> Vec3 {
        self.target_rotation() * Vec3::Z * self.distance
    }

    /// Apply a dolly of `notches` scroll steps, clamped to the configured range.
    pub fn dolly(&mut self, notches: f32) {
        self.distance = (self.distance * (1.0 - notches * DOLLY_STEP))
            .clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Right-drag always orbits; left-drag orbits when it neither grabbed the
/// globe nor a marker. Scroll dollies. Pose smoothing follows last.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    spin: Res<GlobeSpin>,
    pointer_over_marker: Res<PointerOverMarker>,
    pointer_over_ui: Res<PointerOverUi>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.just_pressed(MouseButton::Left)
        && !spin.dragging
        && pointer_over_marker.0.is_none()
        && !pointer_over_ui.0
    {
        orbit.orbiting = true;
    }
    if mouse_button.just_released(MouseButton::Left) {
        orbit.orbiting = false;
    }

    let orbiting = mouse_button.pressed(MouseButton::Right)
        || (orbit.orbiting && mouse_button.pressed(MouseButton::Left));
    if orbiting && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * YAW_SENSITIVITY;
        orbit.pitch = (orbit.pitch + mouse_delta.y * PITCH_SENSITIVITY)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    // Pixel and line scroll units dolly at different rates.
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.dolly(scroll_accum);
    }

    let lerp_speed = (SMOOTHING * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(orbit.target_translation(), lerp_speed);
    camera_transform.rotation = camera_transform
        .rotation
        .slerp(orbit.target_rotation(), lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_pose_looks_at_origin() {
        let orbit = OrbitCamera {
            yaw: 0.7,
            pitch: 0.3,
            distance: 5.0,
            orbiting: false,
        };
        let pos = orbit.target_translation();
        let forward = orbit.target_rotation() * -Vec3::Z;
        // Forward must point from the camera back at the globe centre.
        assert!(forward.angle_between(-pos.normalize()) < 1.0e-4);
        assert!((pos.length() - 5.0).abs() < 1.0e-4);
    }

    #[test]
    fn dolly_respects_distance_clamp() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..200 {
            orbit.dolly(3.0);
        }
        assert!((orbit.distance - MIN_DISTANCE).abs() < 1.0e-4);
        for _ in 0..200 {
            orbit.dolly(-3.0);
        }
        assert!((orbit.distance - MAX_DISTANCE).abs() < 1.0e-4);
    }
}
