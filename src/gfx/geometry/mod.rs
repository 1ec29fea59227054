//! # Procedural Geometry Generation
//!
//! This module provides functions to generate common 3D primitive shapes procedurally,
//! so placement prototypes and the simulation floor do not need external model files.
//!
//! ## Supported Primitives
//!
//! - **Cube**: Unit cube
//! - **Sphere**: UV sphere with configurable resolution
//! - **Plane**: Flat XZ plane with configurable size and subdivisions
//!
//! ## Usage
//!
//! ```rust
//! use arplace::gfx::geometry::{generate_cube, generate_sphere, generate_plane};
//!
//! // Generate a 20cm cube
//! let cube_data = generate_cube().scaled(0.2);
//!
//! // Generate a sphere with 32 segments
//! let sphere_data = generate_sphere(32, 16);
//!
//! // Generate a 10x10 floor with 4 subdivisions
//! let plane_data = generate_plane(10.0, 10.0, 4, 4);
//! ```

pub mod primitives;

pub use primitives::*;

/// Triangle mesh produced by the generators in [`primitives`]
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Unit normals, one per vertex
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uniformly scale every vertex position
    pub fn scaled(self, factor: f32) -> Self {
        self.scaled_xyz([factor; 3])
    }

    /// Scale each axis independently. Normals are left as they are, which is
    /// only correct for axis-aligned faces.
    pub fn scaled_xyz(mut self, factors: [f32; 3]) -> Self {
        for vertex in &mut self.vertices {
            for (value, factor) in vertex.iter_mut().zip(factors) {
                *value *= factor;
            }
        }
        self
    }
}
