// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod config;
pub mod error;
pub mod font;
pub mod items;
pub mod render;
pub mod shell;
pub mod spin;
pub mod state;

pub use config::{Color, WheelConfig};
pub use error::{ItemError, WheelError};
pub use items::ItemList;
pub use state::WheelState;

// External crate imports
use pixels::{Pixels, SurfaceTexture};

// Standard library imports
use std::sync::Arc;
use std::time::{Duration, Instant};

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use render::Canvas;
use shell::Shell;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// The wheel widget: configuration plus the state it starts from.
#[derive(Debug, Clone)]
pub struct Wheel {
    config: WheelConfig,
    state: WheelState,
}

impl Wheel {
    pub fn new(config: WheelConfig) -> Result<Self, WheelError> {
        if !(config.max_framerate.is_finite() && config.max_framerate > 0.0) {
            return Err(WheelError::InvalidFramerate(config.max_framerate));
        }
        let items = ItemList::new(&config.items)?;
        Ok(Self {
            config,
            state: WheelState::new(items),
        })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WheelState {
        &mut self.state
    }

    /// Open the window and run until it is closed.
    pub fn show(&mut self) -> Result<(), WheelError> {
        let font = font::load_font(&self.config)?;
        self.run_window(font)
    }

    fn run_window(&mut self, font: Option<rusttype::Font<'static>>) -> Result<(), WheelError> {
        let config = &self.config;
        let (buffer_width, buffer_height) = (config.window_width, config.window_height);

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(buffer_width as f64, buffer_height as f64))
            .with_resizable(false)
            .build(&event_loop)?;
        let window = Arc::new(window);

        let window_clone = window.clone();
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(buffer_width, buffer_height, surface_texture)?;

        let wheel_state = &mut self.state;
        let mut shell = Shell::new(config);
        let mut cursor: Option<(i32, i32)> = None;

        let frame_duration = Duration::from_secs_f64(1.0 / config.max_framerate);
        let mut last_frame = Instant::now();

        log::info!(
            "wheel ready with {} items ({}x{})",
            wheel_state.items().len(),
            buffer_width,
            buffer_height
        );

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                            log::warn!("surface resize failed: {err}");
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = pixels
                            .window_pos_to_pixel((position.x as f32, position.y as f32))
                            .ok()
                            .map(|(x, y)| (x as i32, y as i32));
                    }
                    WindowEvent::CursorLeft { .. } => {
                        cursor = None;
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } => {
                        if let Some((x, y)) = cursor {
                            shell.click(wheel_state, x, y, Instant::now());
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. }
                        if event.state == ElementState::Pressed =>
                    {
                        match &event.logical_key {
                            Key::Named(NamedKey::Escape) => window_target.exit(),
                            Key::Named(NamedKey::Enter) => {
                                shell.submit(wheel_state, Instant::now());
                            }
                            Key::Named(NamedKey::Backspace) => shell.backspace(),
                            _ => {
                                if let Some(text) = &event.text {
                                    shell.type_text(text.as_str());
                                }
                            }
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        wheel_state.tick(now);

                        let scene = shell.scene(wheel_state, config, now);
                        let mut canvas = Canvas::new(
                            pixels.frame_mut(),
                            buffer_width as usize,
                            buffer_height as usize,
                        );
                        scene.render(&mut canvas, font.as_ref());
                        if let Err(err) = pixels.render() {
                            log::error!("render failed: {err}");
                            window_target.exit();
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wheel_starts_idle() {
        let wheel = Wheel::new(WheelConfig::default()).unwrap();
        assert_eq!(wheel.state().items().len(), 8);
        assert_eq!(wheel.state().rotation(), 0.0);
        assert!(!wheel.state().is_spinning());
        assert_eq!(wheel.state().winner(), None);
    }

    #[test]
    fn invalid_seed_is_rejected() {
        let config = WheelConfig::builder().items(vec!["solo".to_string()]).build();
        assert!(matches!(
            Wheel::new(config),
            Err(WheelError::Items(ItemError::InvalidSeed { len: 1, .. }))
        ));
    }

    #[test]
    fn non_positive_framerate_is_rejected() {
        for rate in [0.0, -30.0, f64::NAN, f64::INFINITY] {
            let config = WheelConfig::builder().max_framerate(rate).build();
            assert!(matches!(Wheel::new(config), Err(WheelError::InvalidFramerate(_))));
        }
        let config = WheelConfig::builder().max_framerate(0.5).build();
        assert!(Wheel::new(config).is_ok());
    }
}
