/// World-space radius of the globe sphere.
pub const GLOBE_RADIUS: f32 = 1.6;

/// UV-sphere tessellation (longitude sectors, latitude stacks).
pub const GLOBE_SECTORS: usize = 96;
pub const GLOBE_STACKS: usize = 48;

/// Atmosphere shell radius relative to the globe.
pub const ATMOSPHERE_SCALE: f32 = 1.12;

/// Markers float slightly above the surface.
pub const MARKER_ALTITUDE: f32 = 1.02;

/// Marker core sphere radius and aura quad size.
pub const MARKER_CORE_RADIUS: f32 = 0.035;
pub const MARKER_AURA_SIZE: f32 = 0.34;

/// Picking sphere around each marker, generous enough for the aura.
pub const MARKER_PICK_RADIUS: f32 = 0.12;

/// Idle spin (rad/s) when nobody is dragging.
pub const IDLE_SPIN_RATE: f32 = 0.05;

/// Drag-to-rotation sensitivities and inertia decay per frame at 60 Hz.
pub const DRAG_ANGLE_PER_PIXEL: f32 = 0.004;
pub const DRAG_VELOCITY_PER_PIXEL: f32 = 0.0025;
pub const SPIN_DAMPING: f32 = 0.92;

/// Cloud layer scroll rate (uv units/s) and strength in the surface blend.
pub const CLOUD_SCROLL_RATE: f32 = 0.008;
pub const CLOUD_STRENGTH: f32 = 0.55;

/// Half-width of the day/night terminator band in dot(normal, sun) units.
pub const TERMINATOR_SOFTNESS: f32 = 0.18;

/// Specular highlight sharpness and strength on the sun side.
pub const SPECULAR_EXPONENT: f32 = 24.0;
pub const SPECULAR_STRENGTH: f32 = 0.35;
