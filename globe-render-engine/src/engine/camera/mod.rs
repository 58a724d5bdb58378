pub mod orbit_camera;

pub use orbit_camera::{OrbitCamera, camera_controller};
