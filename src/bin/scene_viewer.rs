//! Scene Viewer - Orbit Camera Host
//!
//! Run with: `cargo run --bin scene_viewer`
//!
//! Controls:
//! - Mouse left-drag: Orbit around the table
//! - Scroll / pinch: Zoom
//! - Z / X: Discrete zoom in / out
//! - C / V (hold): Continuous zoom in / out
//! - R: Reset to the default view
//! - F: Start the zoom-out sequence (when configured)
//! - Space: Recoil shake
//! - ESC: Exit
//!
//! The window title shows live yaw/pitch/zoom telemetry. Camera config is
//! read from `scene_config.json` next to the working directory, missing
//! file falls back to defaults.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseScrollDelta, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use glam::Vec2;
use habitat_engine::camera::{OrbitCameraController, ZoomDirection};
use habitat_engine::game::SceneConfig;
use habitat_engine::input::{InputSnapshot, MouseButton, MouseState, ScrollDelta, TouchTracker};
use habitat_engine::viewport::Rect;

const CONFIG_PATH: &str = "scene_config.json";

struct SceneViewerApp {
    window: Option<Arc<Window>>,
    controller: OrbitCameraController,
    mouse: MouseState,
    touches: TouchTracker,
    window_size: PhysicalSize<u32>,
    last_frame: Instant,
    last_title_update: Instant,
}

impl SceneViewerApp {
    fn new(config: SceneConfig) -> Self {
        Self {
            window: None,
            controller: OrbitCameraController::new(config.camera),
            mouse: MouseState::new(),
            touches: TouchTracker::new(),
            window_size: PhysicalSize::new(1280, 720),
            last_frame: Instant::now(),
            last_title_update: Instant::now(),
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyR if pressed => self.controller.apply_initial_view(),
            KeyCode::KeyF if pressed => self.controller.start_zoom_out_sequence(),
            KeyCode::Space if pressed => self.controller.trigger_recoil_shake(),
            KeyCode::KeyZ if pressed => self.controller.zoom_step_in(),
            KeyCode::KeyX if pressed => self.controller.zoom_step_out(),
            KeyCode::KeyC => self.controller.set_zoom_held(ZoomDirection::In, pressed),
            KeyCode::KeyV => self.controller.set_zoom_held(ZoomDirection::Out, pressed),
            _ => {}
        }
    }

    fn handle_touch(&mut self, touch: Touch) {
        let position = Vec2::new(
            touch.location.x as f32,
            self.window_size.height as f32 - touch.location.y as f32,
        );
        match touch.phase {
            TouchPhase::Started => self.touches.begin(touch.id, position, false),
            TouchPhase::Moved => self.touches.moved(touch.id, position),
            TouchPhase::Ended => self.touches.end(touch.id),
            TouchPhase::Cancelled => self.touches.cancel(touch.id),
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let snapshot = InputSnapshot::capture(&self.mouse, &self.touches);
        self.controller.step(dt, &snapshot);
        self.mouse.end_frame();
        self.touches.end_frame();

        if now.duration_since(self.last_title_update).as_secs_f32() >= 0.1 {
            self.last_title_update = now;
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "Habitat Scene Viewer | yaw {:.1} pitch {:.1} zoom {:.2}",
                    self.controller.current_yaw(),
                    self.controller.current_pitch(),
                    self.controller.current_zoom()
                ));
            }
        }
    }
}

impl ApplicationHandler for SceneViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Habitat Scene Viewer")
                .with_inner_size(self.window_size);
            match event_loop.create_window(attrs) {
                Ok(window) => {
                    let window = Arc::new(window);
                    self.window_size = window.inner_size();
                    self.controller.set_viewport(Some(Rect::from_window(
                        self.window_size.width,
                        self.window_size.height,
                    )));
                    self.window = Some(window);
                }
                Err(err) => {
                    log::error!("could not create window: {}", err);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    self.handle_key(key, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    winit::event::MouseButton::Other(n) => MouseButton::Other(n),
                    _ => return,
                };
                self.mouse.set_button(button, pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse
                    .set_position(position.x, position.y, self.window_size.height);
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse.leave_window();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => ScrollDelta::from_lines(x, y),
                    MouseScrollDelta::PixelDelta(pos) => ScrollDelta::from_pixels(pos.x, pos.y),
                };
                self.mouse.add_scroll(delta);
            }
            WindowEvent::Touch(touch) => {
                self.handle_touch(touch);
            }
            WindowEvent::Resized(new_size) => {
                self.window_size = new_size;
                self.controller.set_viewport(Some(Rect::from_window(
                    new_size.width,
                    new_size.height,
                )));
            }
            WindowEvent::Focused(false) => {
                self.mouse.reset();
                self.touches.clear();
            }
            WindowEvent::RedrawRequested => {
                self.frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    env_logger::init();

    let config = SceneConfig::load_or_default(CONFIG_PATH);
    log::info!(
        "scene viewer starting (zoom {} pitch {} yaw {})",
        config.camera.default_zoom,
        config.camera.default_pitch,
        config.camera.default_yaw
    );

    let event_loop = EventLoop::new().expect("create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = SceneViewerApp::new(config);
    event_loop.run_app(&mut app).expect("run event loop");
}
