use bevy::prelude::*;

/// Backdrop gradient, top of frame.
pub const BACKGROUND_TOP: Color = Color::srgb(0.039, 0.071, 0.141);

/// Backdrop gradient, bottom of frame.
pub const BACKGROUND_BOTTOM: Color = Color::srgb(0.012, 0.024, 0.071);

/// Atmosphere halo tint.
pub const HALO: Color = Color::srgb(0.47, 0.71, 1.0);

/// Ocean fallback tints for the generated placeholder albedo.
pub const INNER_OCEAN: Color = Color::srgb(0.32, 0.64, 0.86);
pub const OUTER_OCEAN: Color = Color::srgb(0.03, 0.09, 0.23);

/// Night-side surface tint.
pub const NIGHT_TINT: Color = Color::srgb(0.03, 0.05, 0.13);

/// Sun specular band tint.
pub const SPECULAR: Color = Color::srgb(0.82, 0.90, 1.0);

/// Daylight sun colour and its night-mode counterpart.
pub const SUN_DAY: Color = Color::srgb(1.0, 0.96, 0.88);
pub const SUN_NIGHT: Color = Color::srgb(0.55, 0.65, 0.95);

/// Glass panel fill and border (alpha animated with the lighting mode).
pub const CARD_FILL: Color = Color::srgba(1.0, 1.0, 1.0, 0.15);
pub const CARD_BORDER: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);

/// UI text colours.
pub const TEXT_PRIMARY: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_SECONDARY: Color = Color::srgb(0.78, 0.83, 0.91);
pub const TEXT_MUTED: Color = Color::srgb(0.78, 0.82, 0.88);
