use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::f32::consts::TAU;

use constants::globe::{
    DRAG_ANGLE_PER_PIXEL, DRAG_VELOCITY_PER_PIXEL, GLOBE_RADIUS, IDLE_SPIN_RATE, SPIN_DAMPING,
};

use crate::engine::markers::picking::PointerOverMarker;
use crate::engine::ray::{cursor_ray, ray_sphere_hit_t};
use crate::ui::interactions::PointerOverUi;

use super::Globe;

/// Globe rotation state: current angle about +Y, leftover drag velocity
/// (radians per frame at 60 Hz, the original cadence), and whether a drag
/// is in flight.
#[derive(Resource, Default)]
pub struct GlobeSpin {
    pub angle: f32,
    pub velocity: f32,
    pub dragging: bool,
}

/// Advance the rotation by one tick: idle spin plus decaying drag inertia.
pub fn advance_spin(angle: f32, velocity: f32, dt: f32) -> (f32, f32) {
    let next_angle = (angle + IDLE_SPIN_RATE * dt + velocity * dt * 60.0).rem_euclid(TAU);
    let next_velocity = velocity * SPIN_DAMPING.powf(dt * 60.0);
    (next_angle, next_velocity)
}

/// Left-drag on the globe spins it; release hands the spin to inertia.
pub fn globe_spin_system(
    mut spin: ResMut<GlobeSpin>,
    pointer_over_marker: Res<PointerOverMarker>,
    pointer_over_ui: Res<PointerOverUi>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.just_pressed(MouseButton::Left)
        && pointer_over_marker.0.is_none()
        && !pointer_over_ui.0
    {
        if let Ok((camera, camera_transform)) = camera_query.single() {
            if let Some(ray) = cursor_ray(&windows, camera, camera_transform) {
                spin.dragging =
                    ray_sphere_hit_t(ray.origin, *ray.direction, Vec3::ZERO, GLOBE_RADIUS)
                        .is_some();
                if spin.dragging {
                    spin.velocity = 0.0;
                }
            }
        }
    }
    if mouse_button.just_released(MouseButton::Left) {
        spin.dragging = false;
    }

    if spin.dragging && mouse_delta.x != 0.0 {
        spin.angle = (spin.angle + mouse_delta.x * DRAG_ANGLE_PER_PIXEL).rem_euclid(TAU);
        spin.velocity = mouse_delta.x * DRAG_VELOCITY_PER_PIXEL;
    } else {
        let (angle, velocity) = advance_spin(spin.angle, spin.velocity, time.delta_secs());
        spin.angle = angle;
        spin.velocity = velocity;
    }
}

/// Copy the spin angle onto the globe entity.
pub fn apply_globe_rotation(spin: Res<GlobeSpin>, mut globes: Query<&mut Transform, With<Globe>>) {
    for mut transform in &mut globes {
        transform.rotation = Quat::from_rotation_y(spin.angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inertia_decays_toward_idle_spin() {
        let mut velocity = 0.4_f32;
        let dt = 1.0 / 60.0;
        let mut previous = velocity;
        for _ in 0..600 {
            let (_, v) = advance_spin(0.0, velocity, dt);
            velocity = v;
            assert!(velocity.abs() <= previous.abs(), "inertia grew");
            previous = velocity;
        }
        assert!(velocity.abs() < 1.0e-3, "inertia never died out: {velocity}");
    }

    #[test]
    fn idle_spin_keeps_turning() {
        let (a1, _) = advance_spin(0.0, 0.0, 0.5);
        let (a2, _) = advance_spin(a1, 0.0, 0.5);
        assert!(a1 > 0.0);
        assert!(a2 > a1);
    }

    #[test]
    fn angle_stays_wrapped() {
        let mut angle = 0.0;
        for _ in 0..10_000 {
            let (a, _) = advance_spin(angle, 0.3, 1.0 / 60.0);
            angle = a;
            assert!((0.0..TAU).contains(&angle));
        }
    }

    #[test]
    fn negative_drag_decays_too() {
        let (_, v) = advance_spin(0.0, -0.5, 1.0);
        assert!(v > -0.5 && v < 0.0);
    }
}
