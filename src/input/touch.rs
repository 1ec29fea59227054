use cgmath::Point2;
use winit::event::{TouchPhase, WindowEvent};

use super::{PointerSample, PointerSource};

/// Touch pointer: the first finger still in contact with the screen
#[derive(Debug, Clone, Default)]
pub struct TouchPointer {
    /// Active touches in the order they started
    active: Vec<(u64, Point2<f32>)>,
}

impl TouchPointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) {
        let position = Point2::new(x, y);
        let existing = self.active.iter().position(|(touch_id, _)| *touch_id == id);

        match (phase, existing) {
            (TouchPhase::Started | TouchPhase::Moved, Some(index)) => {
                self.active[index].1 = position;
            }
            (TouchPhase::Started | TouchPhase::Moved, None) => {
                self.active.push((id, position));
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, Some(index)) => {
                self.active.remove(index);
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, None) => (),
        }
    }

    pub fn touch_count(&self) -> usize {
        self.active.len()
    }
}

impl PointerSource for TouchPointer {
    fn handle_window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::Touch(touch) = event {
            self.on_touch(
                touch.id,
                touch.phase,
                touch.location.x as f32,
                touch.location.y as f32,
            );
        }
    }

    fn sample(&mut self) -> Option<PointerSample> {
        self.active
            .first()
            .map(|(_, position)| PointerSample { position: *position })
    }
}
