//! # Plane Detection
//!
//! The AR side of placement: planes reported by an AR session and the ray
//! cast that finds which of them lie under a screen point.
//!
//! [`PlaneRaycaster`] is the seam an AR platform binding implements.
//! [`PlaneTracker`] is the in-process implementation, fed with planes as the
//! session detects them (or from configuration when replaying a session).

pub mod plane;
pub mod tracker;

pub use plane::{polygon_contains, DetectedPlane, PlaneFilter, TrackableId, TrackingState};
pub use tracker::{PlaneHit, PlaneRaycaster, PlaneTracker};
