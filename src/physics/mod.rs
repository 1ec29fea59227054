//! # Physics Ray Casting
//!
//! Collider shapes and the nearest-hit ray cast used when placement runs
//! without an AR session.

pub mod collider;

pub use collider::{Collider, ColliderId, ColliderShape, ColliderWorld, PhysicsRaycaster, RaycastHit};
