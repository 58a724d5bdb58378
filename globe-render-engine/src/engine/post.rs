/// Scene camera with the HDR post stack: bloom and depth of field.
use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::dof::DepthOfField;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

use constants::render_settings::{FOCUS_DEPTH_BIAS, bloom_settings, depth_of_field_settings};

use crate::engine::camera::OrbitCamera;

pub fn spawn_scene_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((
        Name::new("SceneCamera"),
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Msaa::Off,
        Tonemapping::TonyMcMapface,
        bloom_settings(),
        depth_of_field_settings(),
        Transform::from_translation(orbit.target_translation())
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Keep focus on the near face of the globe as the camera dollies.
pub fn update_depth_of_field(
    orbit: Res<OrbitCamera>,
    mut cameras: Query<&mut DepthOfField, With<Camera3d>>,
) {
    for mut dof in &mut cameras {
        dof.focal_distance = (orbit.distance + FOCUS_DEPTH_BIAS).max(0.5);
    }
}
