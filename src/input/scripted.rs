use std::collections::VecDeque;

use winit::event::WindowEvent;

use super::{PointerSample, PointerSource};

/// Replays a fixed sequence of per-frame samples.
///
/// Each call to [`sample`](PointerSource::sample) consumes one frame; once
/// the script runs out every frame reports no pointer.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPointer {
    frames: VecDeque<Option<PointerSample>>,
}

impl ScriptedPointer {
    pub fn new(frames: impl IntoIterator<Item = Option<PointerSample>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn push(&mut self, frame: Option<PointerSample>) {
        self.frames.push_back(frame);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl PointerSource for ScriptedPointer {
    fn handle_window_event(&mut self, _event: &WindowEvent) {}

    fn sample(&mut self) -> Option<PointerSample> {
        self.frames.pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_frames_in_order() {
        let mut script = ScriptedPointer::new([
            Some(PointerSample::new(1.0, 2.0)),
            None,
            Some(PointerSample::new(3.0, 4.0)),
        ]);

        assert_eq!(script.sample(), Some(PointerSample::new(1.0, 2.0)));
        assert_eq!(script.sample(), None);
        assert_eq!(script.remaining(), 1);
        assert_eq!(script.sample(), Some(PointerSample::new(3.0, 4.0)));
        assert_eq!(script.sample(), None);

        script.push(Some(PointerSample::new(5.0, 6.0)));
        assert_eq!(script.sample(), Some(PointerSample::new(5.0, 6.0)));
    }
}
