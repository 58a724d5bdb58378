use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::catalog::{ActiveCatalog, SelectedDestination};
use crate::engine::lighting::{LightingMode, LightingState};

use super::overlay::{
    DayButton, FpsText, GlassPanel, NightButton, PanelCityText, PanelTaglineText,
};

/// True while the cursor is over any overlay widget; scene input (globe drag,
/// orbit, marker picking) stands down.
#[derive(Resource, Default)]
pub struct PointerOverUi(pub bool);

pub fn ui_pointer_system(
    interactions: Query<&Interaction>,
    mut pointer_over_ui: ResMut<PointerOverUi>,
) {
    pointer_over_ui.0 = interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None);
}

/// Clicking Day/Night swaps the lighting mode.
pub fn lighting_button_system(
    interactions: Query<
        (&Interaction, Option<&DayButton>, Option<&NightButton>),
        (Changed<Interaction>, With<Button>),
    >,
    mut lighting: ResMut<LightingState>,
) {
    for (interaction, day, night) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if day.is_some() && lighting.mode != LightingMode::Day {
            lighting.mode = LightingMode::Day;
            info!("Lighting mode: Day");
        }
        if night.is_some() && lighting.mode != LightingMode::Night {
            lighting.mode = LightingMode::Night;
            info!("Lighting mode: Night");
        }
    }
}

/// Highlight the active mode button.
pub fn style_mode_buttons(
    lighting: Res<LightingState>,
    mut buttons: Query<
        (
            &mut BackgroundColor,
            Option<&DayButton>,
            Option<&NightButton>,
        ),
        With<Button>,
    >,
) {
    if !lighting.is_changed() {
        return;
    }
    for (mut background, day, _night) in &mut buttons {
        let active = match lighting.mode {
            LightingMode::Day => day.is_some(),
            LightingMode::Night => day.is_none(),
        };
        let alpha = if active { 0.35 } else { 0.18 };
        *background = BackgroundColor(Color::srgba(1.0, 1.0, 1.0, alpha));
    }
}

/// Glass fill alpha deepens at night, like the original's panel blur swap.
pub fn apply_glass_opacity(
    lighting: Res<LightingState>,
    mut panels: Query<(&GlassPanel, &mut BackgroundColor)>,
) {
    for (panel, mut background) in &mut panels {
        let alpha = panel.day_alpha + (panel.night_alpha - panel.day_alpha) * lighting.blend;
        *background = BackgroundColor(Color::srgba(1.0, 1.0, 1.0, alpha));
    }
}

/// Rewrite the featured-journey panel whenever the selection (or the catalog
/// itself) changes.
pub fn refresh_featured_panel(
    selected: Res<SelectedDestination>,
    catalog: Option<Res<ActiveCatalog>>,
    mut city_text: Query<(&mut Text, &mut TextColor), With<PanelCityText>>,
    mut tagline_text: Query<&mut Text, (With<PanelTaglineText>, Without<PanelCityText>)>,
) {
    let Some(catalog) = catalog else {
        return;
    };
    if !selected.is_changed() && !catalog.is_changed() {
        return;
    }
    let Some(destination) = selected
        .index
        .and_then(|index| catalog.0.destinations.get(index))
    else {
        return;
    };

    for (mut text, mut color) in &mut city_text {
        text.0 = destination.name.clone();
        *color = TextColor(destination.color());
    }
    for mut text in &mut tagline_text {
        text.0 = destination.tagline.clone();
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
