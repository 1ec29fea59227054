//! # Pointer Input
//!
//! Turns window input into at most one screen-space pointer position per
//! frame. Which device counts as "the pointer" is decided at runtime by the
//! [`PointerSource`] the placer is built with.
//!
//! Positions are in physical window pixels with the origin at the top-left
//! corner, matching what winit reports and what
//! [`Camera::screen_point_to_ray`](crate::gfx::camera::Camera::screen_point_to_ray)
//! expects.

pub mod mouse;
pub mod scripted;
pub mod touch;

use cgmath::Point2;
use serde::Deserialize;
use winit::event::WindowEvent;

pub use mouse::MousePointer;
pub use scripted::ScriptedPointer;
pub use touch::TouchPointer;

/// The active pointer position for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point2<f32>,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }
}

/// A source of per-frame pointer samples
pub trait PointerSource {
    /// Feed a window event; events the source does not care about are ignored
    fn handle_window_event(&mut self, event: &WindowEvent);

    /// The pointer for the current frame, or `None` when nothing is pressed
    fn sample(&mut self) -> Option<PointerSample>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    /// Touch on mobile targets, mouse everywhere else
    #[default]
    Auto,
    Mouse,
    Touch,
}

impl PointerKind {
    /// Resolves `Auto` for the platform this binary was built for
    pub fn resolve(self) -> PointerKind {
        match self {
            PointerKind::Auto if cfg!(any(target_os = "android", target_os = "ios")) => {
                PointerKind::Touch
            }
            PointerKind::Auto => PointerKind::Mouse,
            kind => kind,
        }
    }
}

/// Builds the pointer source for `kind`
pub fn pointer_for(kind: PointerKind) -> Box<dyn PointerSource> {
    match kind.resolve() {
        PointerKind::Touch => Box::new(TouchPointer::new()),
        _ => Box::new(MousePointer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_kinds_resolve_to_themselves() {
        assert_eq!(PointerKind::Mouse.resolve(), PointerKind::Mouse);
        assert_eq!(PointerKind::Touch.resolve(), PointerKind::Touch);
        assert_ne!(PointerKind::Auto.resolve(), PointerKind::Auto);
    }

    #[test]
    fn test_fresh_sources_report_no_pointer() {
        assert!(pointer_for(PointerKind::Mouse).sample().is_none());
        assert!(pointer_for(PointerKind::Touch).sample().is_none());
    }
}
