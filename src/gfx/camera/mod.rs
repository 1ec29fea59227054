pub mod camera_utils;
pub mod device_camera;
pub mod orbit_camera;

// Re-export main types
pub use camera_utils::{Camera, Viewport};
pub use device_camera::DeviceCamera;
pub use orbit_camera::OrbitCamera;
