//! # Object Placement
//!
//! Tap-to-place: each frame, the active pointer is cast onto the scene and
//! the single placed object is created at, or moved to, the hit.
//!
//! ## How it works
//!
//! 1. **Sample**: a [`PointerSource`](crate::input::PointerSource) yields this
//!    frame's screen point, if any
//! 2. **Hit test**: a [`SurfaceHitTester`] turns the point into a surface pose,
//!    against detected AR planes or scene colliders depending on the mode
//! 3. **Place**: [`plan_placement`] decides between spawning and moving, and
//!    [`ObjectPlacer`] applies the decision to the scene
//!
//! ## Usage
//!
//! ```
//! use arplace::prelude::*;
//!
//! let config = PlacerConfig { use_ar: false, ..PlacerConfig::default() };
//! let mut world = World::from_config(&config).unwrap();
//! let center = world.camera.viewport().center();
//! let mut placer = ObjectPlacer::new(
//!     config.prototype.build().unwrap(),
//!     Box::new(ScriptedPointer::new([Some(PointerSample::new(center.x, center.y))])),
//!     hit_tester_for(&config),
//! );
//!
//! let decision = world.tick(&mut placer);
//! assert!(matches!(decision, PlacementDecision::Spawn(_)));
//! ```

pub mod controller;

pub use controller::{plan_placement, ObjectPlacer, PlacementDecision, PlacementState};
pub use hit_test::{
    hit_tester_for, ArHitTester, SimulationHitTester, SurfaceContext, SurfaceHitTester,
};
