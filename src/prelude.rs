//! # arplace Prelude
//!
//! Commonly used types for setting up and driving a placement session.
//!
//! ```rust
//! use arplace::prelude::*;
//!
//! let config = PlacerConfig::from_toml_str("use_ar = false").unwrap();
//! let mut world = World::from_config(&config).unwrap();
//! let mut placer = ObjectPlacer::from_config(&config).unwrap();
//!
//! // No pointer has been pressed yet
//! assert_eq!(world.tick(&mut placer), PlacementDecision::NoPointer);
//! ```

// Re-export core application types
pub use crate::app::PlacerApp;
pub use crate::config::PlacerConfig;
pub use crate::error::PlacerError;
pub use crate::world::World;

// Placement
pub use crate::placement::{
    hit_tester_for, plan_placement, ArHitTester, ObjectPlacer, PlacementDecision,
    PlacementState, SimulationHitTester, SurfaceContext, SurfaceHitTester,
};

// Input
pub use crate::input::{
    pointer_for, MousePointer, PointerKind, PointerSample, PointerSource, ScriptedPointer,
    TouchPointer,
};

// Surfaces
pub use crate::ar::{DetectedPlane, PlaneFilter, PlaneHit, PlaneRaycaster, PlaneTracker};
pub use crate::physics::{Collider, ColliderWorld, PhysicsRaycaster, RaycastHit};

// Scene and camera types
pub use crate::gfx::camera::{Camera, DeviceCamera, OrbitCamera, Viewport};
pub use crate::gfx::geometry::{generate_cube, generate_plane, generate_sphere, GeometryData};
pub use crate::gfx::picking::{Pose, Ray};
pub use crate::gfx::scene::{Object, ObjectId, Prototype, Scene};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Point2, Quaternion, Vector3, Zero};
