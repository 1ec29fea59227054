//! # Scene Management Module
//!
//! This module holds the objects that exist in the placement scene: the
//! placed model, the simulation floor and any obstacles. It is render-agnostic;
//! objects carry their meshes and transform so a host renderer can draw them.
//!
//! ## Key Components
//!
//! - [`Scene`] - The container of instantiated objects
//! - [`Prototype`] - Template an object is instantiated from (procedural or OBJ)
//! - [`Object`] - Individual 3D object with meshes and a position/rotation/scale
//! - [`Vertex3D`] - 3D vertex data structure with position and normal
//!
//! ## Usage
//!
//! ```
//! use arplace::gfx::geometry::generate_cube;
//! use arplace::gfx::scene::{Prototype, Scene};
//! use cgmath::{One, Quaternion, Vector3};
//!
//! let mut scene = Scene::new();
//! let prototype = Prototype::from_geometry("cube", &generate_cube().scaled(0.2));
//! let id = scene.instantiate(&prototype, Vector3::new(0.0, 0.0, -1.0), Quaternion::one());
//! assert!(scene.object(id).is_some());
//! ```

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{Mesh, Object, ObjectId, Prototype};
pub use scene::Scene;
pub use vertex::Vertex3D;
