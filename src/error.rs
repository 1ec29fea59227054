//! Error types for setting up a placement session.
//!
//! Placement itself never fails: a frame without a pointer or a ray that
//! misses every surface are ordinary outcomes reported through
//! [`PlacementDecision`](crate::placement::PlacementDecision). Errors only
//! arise while loading configuration, loading prototype models, or starting
//! the window event loop.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a placement session
#[derive(Debug, Error)]
pub enum PlacerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load model {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("model {0} contains no meshes")]
    EmptyModel(PathBuf),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

pub type Result<T> = std::result::Result<T, PlacerError>;
