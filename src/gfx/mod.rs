//! # Graphics Module
//!
//! Cameras, scene objects and the ray casting primitives placement is built
//! on. Nothing here draws; the scene is the state a renderer would read.
//!
//! - **Camera System** ([`camera`]) - Orbit and device cameras that turn
//!   window pixels into world rays
//! - **Scene Management** ([`scene`]) - Prototypes and the objects
//!   instantiated from them
//! - **Geometry** ([`geometry`]) - Procedural cube, sphere and plane meshes
//! - **Picking** ([`picking`]) - Rays, poses and bounding boxes

pub mod camera;
pub mod geometry;
pub mod picking;
pub mod scene;

// Re-export commonly used types
pub use camera::{Camera, DeviceCamera, OrbitCamera};
pub use picking::{Pose, Ray};
