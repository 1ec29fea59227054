use cgmath::Point2;
use winit::event::{ElementState, MouseButton, WindowEvent};

use super::{PointerSample, PointerSource};

/// Mouse pointer: active while the placement button is held down
#[derive(Debug, Clone)]
pub struct MousePointer {
    button: MouseButton,
    cursor: Option<Point2<f32>>,
    pressed: bool,
}

impl MousePointer {
    pub fn new() -> Self {
        Self::with_button(MouseButton::Left)
    }

    pub fn with_button(button: MouseButton) -> Self {
        Self {
            button,
            cursor: None,
            pressed: false,
        }
    }

    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Some(Point2::new(x, y));
    }

    pub fn on_cursor_left(&mut self) {
        self.cursor = None;
    }

    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        if button == self.button {
            self.pressed = state == ElementState::Pressed;
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Default for MousePointer {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSource for MousePointer {
    fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => self.on_cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => self.on_button(*button, *state),
            // A lost focus never delivers the release
            WindowEvent::Focused(false) => self.pressed = false,
            _ => (),
        }
    }

    fn sample(&mut self) -> Option<PointerSample> {
        if !self.pressed {
            return None;
        }
        self.cursor.map(|position| PointerSample { position })
    }
}
