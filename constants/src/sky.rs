/// Radius of the inverted gradient dome.
pub const SKY_RADIUS: f32 = 60.0;

/// Stars sit on a shell inside the dome.
pub const STARFIELD_RADIUS: f32 = 40.0;
pub const STAR_COUNT: usize = 160;

/// Star quad edge length range.
pub const STAR_SIZE_MIN: f32 = 0.10;
pub const STAR_SIZE_MAX: f32 = 0.28;

/// Twinkle frequency range (rad/s) and slow drift of the whole field (rad/s).
pub const TWINKLE_SPEED_MIN: f32 = 0.6;
pub const TWINKLE_SPEED_MAX: f32 = 2.2;
pub const STARFIELD_DRIFT_RATE: f32 = 0.004;

/// Deterministic scatter so the field is stable across runs.
pub const STARFIELD_SEED: u64 = 0x57414E44;
