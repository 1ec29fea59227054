// src/lib.rs
//! arplace
//!
//! Tap-to-place object placement for AR sessions and simulated 3D scenes,
//! with a winit host for running it on the desktop.

pub mod app;
pub mod ar;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod physics;
pub mod placement;
pub mod prelude;
pub mod world;

// Re-export main types for convenience
pub use app::PlacerApp;
pub use config::PlacerConfig;
pub use error::{PlacerError, Result};

/// Creates a desktop application from the default configuration
pub fn default() -> Result<PlacerApp> {
    PlacerApp::new(&PlacerConfig::default())
}
