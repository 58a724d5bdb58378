use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::globe::MARKER_PICK_RADIUS;

use crate::engine::catalog::SelectedDestination;
use crate::engine::ray::{cursor_ray, ray_sphere_hit_t};
use crate::ui::interactions::PointerOverUi;

use super::DestinationMarker;

/// Which marker the cursor currently rests on. Written here, read by the
/// globe-drag and orbit systems so a click on a marker never starts a drag.
#[derive(Resource, Default)]
pub struct PointerOverMarker(pub Option<usize>);

/// Cursor ray vs marker spheres: nearest front-facing hit wins. Hover state
/// feeds the scale pulse; a left click selects the destination.
pub fn marker_picking_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut markers: Query<(&mut DestinationMarker, &Transform)>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    pointer_over_ui: Res<PointerOverUi>,
    mut pointer_over: ResMut<PointerOverMarker>,
    mut selected: ResMut<SelectedDestination>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let ray = if pointer_over_ui.0 {
        None
    } else {
        cursor_ray(&windows, camera, camera_transform)
    };
    let Some(ray) = ray else {
        pointer_over.0 = None;
        for (mut marker, _) in &mut markers {
            marker.hovered = false;
        }
        return;
    };

    let mut nearest: Option<(usize, f32)> = None;
    for (marker, transform) in &markers {
        if marker.facing <= 0.05 {
            continue;
        }
        if let Some(t) = ray_sphere_hit_t(
            ray.origin,
            *ray.direction,
            transform.translation,
            MARKER_PICK_RADIUS,
        ) {
            if nearest.is_none_or(|(_, best)| t < best) {
                nearest = Some((marker.index, t));
            }
        }
    }

    pointer_over.0 = nearest.map(|(index, _)| index);
    for (mut marker, _) in &mut markers {
        marker.hovered = pointer_over.0 == Some(marker.index);
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        if let Some(index) = pointer_over.0 {
            if selected.index != Some(index) {
                selected.index = Some(index);
                info!("Selected destination {index}");
            }
        }
    }
}
