use std::sync::Arc;

use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::config::{PlacerConfig, WindowConfig};
use crate::error::Result;
use crate::placement::{ObjectPlacer, PlacementDecision};
use crate::world::World;

/// Desktop host: opens a window and runs one placement tick per frame
pub struct PlacerApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    window_config: WindowConfig,
    world: World,
    placer: ObjectPlacer,
}

impl PlacerApp {
    pub fn new(config: &PlacerConfig) -> Result<Self> {
        let event_loop = EventLoop::new()?;
        let world = World::from_config(config)?;
        let placer = ObjectPlacer::from_config(config)?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                window_config: config.window.clone(),
                world,
                placer,
            },
        })
    }

    pub fn world(&self) -> &World {
        &self.app_state.world
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> Result<()> {
        let Some(event_loop) = self.event_loop.take() else {
            return Ok(());
        };
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;
        Ok(())
    }
}

impl AppState {
    fn redraw(&mut self) {
        let position = match self.world.tick(&mut self.placer) {
            PlacementDecision::Spawn(pose) => pose.position,
            PlacementDecision::Move { position, .. } => position,
            PlacementDecision::NoPointer | PlacementDecision::Miss => return,
        };

        if let Some(window) = self.window.as_ref() {
            window.set_title(&format!(
                "{} - '{}' at ({:.2}, {:.2}, {:.2})",
                self.window_config.title,
                self.placer.prototype().name(),
                position.x,
                position.y,
                position.z
            ));
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(self.window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.window_config.width,
                self.window_config.height,
            ));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let window_handle = Arc::new(window);
                let (width, height) = window_handle.inner_size().into();
                self.world.resize(width, height);
                info!("window opened at {}x{}", width, height);
                self.window = Some(window_handle);
            }
            Err(err) => {
                error!("failed to create window: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.placer.pointer_mut().handle_window_event(&event);

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.world.resize(width, height);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
