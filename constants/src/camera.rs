/// Orbit sensitivities, radians per pixel of mouse motion.
pub const YAW_SENSITIVITY: f32 = 0.0035;
pub const PITCH_SENSITIVITY: f32 = 0.0030;

/// Keep the camera off the poles.
pub const PITCH_LIMIT: f32 = 1.35;

/// Dolly range and per-notch scroll step as a fraction of current distance.
pub const MIN_DISTANCE: f32 = 2.4;
pub const MAX_DISTANCE: f32 = 9.0;
pub const DOLLY_STEP: f32 = 0.12;

/// Initial pose.
pub const START_DISTANCE: f32 = 4.6;
pub const START_YAW: f32 = 0.45;
pub const START_PITCH: f32 = 0.28;

/// Pose smoothing factor, multiplied by delta time and clamped to 1.
pub const SMOOTHING: f32 = 12.0;
