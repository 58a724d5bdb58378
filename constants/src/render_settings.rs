use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::dof::{DepthOfField, DepthOfFieldMode};

/// Bloom tuned so marker cores and the specular band glow without washing
/// out the night side.
pub fn bloom_settings() -> Bloom {
    Bloom {
        intensity: 0.22,
        ..Bloom::NATURAL
    }
}

/// Depth of field keeps the globe crisp; `focal_distance` is retargeted every
/// frame to the camera's distance from the globe centre.
pub fn depth_of_field_settings() -> DepthOfField {
    DepthOfField {
        mode: DepthOfFieldMode::Bokeh,
        focal_distance: 4.6,
        aperture_f_stops: 1.8,
        ..Default::default()
    }
}

/// Offset added to the camera distance so focus sits on the near face of the
/// globe rather than its centre.
pub const FOCUS_DEPTH_BIAS: f32 = -1.2;
