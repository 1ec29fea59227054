//! # Place Object Example
//!
//! Opens a window and places the configured prototype wherever you click
//! (or touch). The first hit creates the object; later hits move it.
//!
//! ## Usage:
//! ```bash
//! cargo run --example place_object
//! cargo run --example place_object -- demos/placer.toml
//! RUST_LOG=arplace=debug cargo run --example place_object
//! ```
//!
//! ## What you'll see:
//! - The window title updates with the object's position after each placement
//! - With `use_ar = false` rays are cast against the simulation floor and
//!   any configured obstacles
//! - With `use_ar = true` rays are cast against the configured planes

use anyhow::Context;
use arplace::prelude::*;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => PlacerConfig::load(&path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => PlacerConfig::default(),
    };
    info!(
        "starting in {} mode",
        if config.use_ar { "AR" } else { "simulation" }
    );

    let app = PlacerApp::new(&config).context("setting up the placement session")?;
    app.run()?;
    Ok(())
}
