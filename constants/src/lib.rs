pub mod camera;
pub mod globe;
pub mod palette;
pub mod render_settings;
pub mod sky;
pub mod texture;
