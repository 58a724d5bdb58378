use bevy::prelude::*;

use constants::palette::{SUN_DAY, SUN_NIGHT};

/// Fixed world-space sun direction (pointing from the globe toward the sun).
/// The globe rotates underneath it, which is what moves the terminator.
pub const SUN_DIRECTION: Vec3 = Vec3::new(0.55, 0.35, 0.75);

const DAY_ILLUMINANCE: f32 = 11_000.0;
const NIGHT_ILLUMINANCE: f32 = 2_200.0;
const AMBIENT_DAY: f32 = 90.0;
const AMBIENT_NIGHT: f32 = 28.0;

/// How fast the blend chases the active mode.
const BLEND_RATE: f32 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingMode {
    Day,
    Night,
}

impl LightingMode {
    /// Blend target: 0 is full day, 1 is full night.
    pub fn blend_target(self) -> f32 {
        match self {
            Self::Day => 0.0,
            Self::Night => 1.0,
        }
    }
}

/// Current mode plus the eased blend scalar forwarded to lights, materials
/// and the UI glass.
#[derive(Resource)]
pub struct LightingState {
    pub mode: LightingMode,
    pub blend: f32,
}

impl Default for LightingState {
    fn default() -> Self {
        Self {
            mode: LightingMode::Day,
            blend: 0.0,
        }
    }
}

/// Step `value` toward `target` without overshooting.
pub fn ease_toward(value: f32, target: f32, dt: f32) -> f32 {
    value + (target - value) * (BLEND_RATE * dt).min(1.0)
}

pub fn spawn_sun(commands: &mut Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: DAY_ILLUMINANCE,
            color: SUN_DAY,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(SUN_DIRECTION.normalize() * 10.0)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        brightness: AMBIENT_DAY,
        ..default()
    });
}

/// Keyboard shortcut for the mode switch, mirroring the UI buttons.
pub fn lighting_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut lighting: ResMut<LightingState>,
) {
    if keyboard.just_pressed(KeyCode::KeyD) && lighting.mode != LightingMode::Day {
        lighting.mode = LightingMode::Day;
        info!("Lighting mode: Day");
    }
    if keyboard.just_pressed(KeyCode::KeyN) && lighting.mode != LightingMode::Night {
        lighting.mode = LightingMode::Night;
        info!("Lighting mode: Night");
    }
}

/// Ease the blend and apply it to the sun and ambient light.
pub fn lighting_blend_system(
    time: Res<Time>,
    mut lighting: ResMut<LightingState>,
    mut suns: Query<&mut DirectionalLight>,
    mut ambient: ResMut<AmbientLight>,
) {
    let target = lighting.mode.blend_target();
    lighting.blend = ease_toward(lighting.blend, target, time.delta_secs());
    let blend = lighting.blend;

    for mut sun in &mut suns {
        sun.illuminance = DAY_ILLUMINANCE + (NIGHT_ILLUMINANCE - DAY_ILLUMINANCE) * blend;
        let day = SUN_DAY.to_linear();
        let night = SUN_NIGHT.to_linear();
        sun.color = Color::from(day * (1.0 - blend) + night * blend);
    }
    ambient.brightness = AMBIENT_DAY + (AMBIENT_NIGHT - AMBIENT_DAY) * blend;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_converges_to_target() {
        let mut blend = 0.0;
        for _ in 0..600 {
            blend = ease_toward(blend, 1.0, 1.0 / 60.0);
        }
        assert!((blend - 1.0).abs() < 1.0e-3);
    }

    #[test]
    fn blend_never_overshoots() {
        let mut blend = 0.0_f32;
        for _ in 0..1_000 {
            let next = ease_toward(blend, 1.0, 1.0 / 60.0);
            assert!(next >= blend);
            assert!(next <= 1.0);
            blend = next;
        }

        // Large timesteps clamp instead of oscillating.
        let stepped = ease_toward(0.0, 1.0, 10.0);
        assert!(stepped <= 1.0);
    }

    #[test]
    fn mode_targets_are_the_extremes() {
        assert_eq!(LightingMode::Day.blend_target(), 0.0);
        assert_eq!(LightingMode::Night.blend_target(), 1.0);
    }
}
