//! Window and frame loop.
//!
//! One frame, in order: window events are fed to [`Input`], then on redraw
//! the hotkeys run, the world is stepped, the drag is resolved on top of the
//! physics, the scene is drawn and the frame is paced. Everything runs on the
//! event loop thread.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::Config;
use crate::error::AppError;
use crate::input::{Input, KeyCode};
use crate::interaction::{Grab, GrabEvent};
use crate::physics::World;
use crate::render::{LineBatch, Renderer};
use crate::time::{FrameLimiter, Time};
use crate::view::Viewport;

/// Everything that changes from frame to frame, minus the window.
///
/// Kept separate from [`App`] so a frame can be driven without a GPU.
#[derive(Debug)]
pub struct Scene {
    pub world: World,
    pub grab: Grab,
    pub viewport: Viewport,
}

/// What happened during one [`Scene::frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub grab: GrabEvent,
    pub spring_added: bool,
    pub reset: bool,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            world: World::default(),
            grab: Grab::new(),
            viewport,
        }
    }

    /// Advance one frame of `dt` seconds using this frame's input.
    ///
    /// Hotkeys run first, then the physics step, then the drag override. A
    /// zero `dt` (paused) skips the physics step but still lets the cursor
    /// move the ball.
    pub fn frame(&mut self, input: &Input, dt: f32) -> FrameReport {
        let cursor = self.viewport.to_world(input.mouse_position());

        let spring_added = input.key_pressed(KeyCode::S);
        if spring_added {
            self.world.add_spring_at(cursor);
            ftlog::info!("Spring added at ({:.2}; {:.2})", cursor.x, cursor.y);
        }

        let reset = input.key_pressed(KeyCode::R);
        if reset {
            self.world.reset();
            self.grab.cancel();
            ftlog::info!("Scene reset");
        }

        if dt > 0.0 {
            self.world.step(dt);
        }

        let grab = self
            .grab
            .update(self.world.ball_mut(), input.mouse_down(), cursor, dt);

        FrameReport {
            grab,
            spring_added,
            reset,
        }
    }
}

/// Open the window and run until it is closed.
pub fn run(config: Config) -> Result<(), AppError> {
    config.validate()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    config: Config,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Scene,
    input: Input,
    time: Time,
    limiter: FrameLimiter,
    /// First fatal error; stops the loop and is returned from [`run`].
    error: Option<AppError>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            scene: Scene::new(config.viewport),
            limiter: FrameLimiter::new(config.max_fps),
            input: Input::new(),
            time: Self::clock(&config),
            window: None,
            renderer: None,
            error: None,
            config,
        }
    }

    fn clock(config: &Config) -> Time {
        let mut time = Time::new();
        time.set_fixed_delta(config.fixed_delta);
        time.set_time_scale(config.time_scale);
        time
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let (width, height) = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = pollster::block_on(Renderer::new(window.clone()))?;

        ftlog::info!(
            "Window {}x{} opened, surface format {:?}",
            renderer.config.width,
            renderer.config.height,
            renderer.config.format
        );
        match self.config.fixed_delta {
            Some(dt) => ftlog::info!("Fixed timestep: {}s", dt),
            None => ftlog::info!("Variable timestep: physics follows the frame rate"),
        }

        self.window = Some(window);
        self.renderer = Some(renderer);
        // Do not count window creation as the first frame's delta.
        self.time = Self::clock(&self.config);
        if self.time.time_scale() != 1.0 {
            ftlog::info!("Time scale: {}x", self.time.time_scale());
        }
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        ftlog::error!("{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame_start = Instant::now();

        if self.input.key_pressed(KeyCode::Escape) {
            event_loop.exit();
            return;
        }
        if self.input.key_pressed(KeyCode::Space) {
            self.time.toggle_pause();
            let state = if self.time.is_paused() {
                "Paused"
            } else {
                "Resumed"
            };
            ftlog::info!("{}", state);
        }

        let dt = self.time.update();
        self.scene.frame(&self.input, dt);
        self.input.begin_frame();

        if let Some(renderer) = &mut self.renderer {
            let lines = LineBatch::from_world(&self.scene.world, &self.scene.viewport);
            match renderer.render(&lines) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    ftlog::error!("GPU out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => ftlog::warn!("Render error: {:?}", e),
            }
        }

        if self.config.frame_diagnostics {
            let position = self.scene.world.ball().position;
            ftlog::info!(
                "FPS: {:.1} | DELTA_TIME: {:.6} s | ({:.4}; {:.4})",
                self.time.instant_fps(),
                dt,
                position.x,
                position.y
            );
        }

        self.limiter.pace(frame_start);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                ftlog::info!(
                    "Window closed after {} frames ({:.1} FPS)",
                    self.time.frame(),
                    self.time.fps()
                );
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use winit::event::ElementState;

    use crate::physics::BALL_START;

    fn scene() -> Scene {
        Scene::new(Viewport::default())
    }

    #[test]
    fn test_frame_idle_steps_physics() {
        let mut scene = scene();
        let report = scene.frame(&Input::new(), 0.01);
        assert_eq!(report.grab, GrabEvent::None);
        assert!(!report.spring_added && !report.reset);
        // Gravity pulls the ball down from its start.
        assert!(scene.world.ball().position.y < BALL_START.y);
    }

    #[test]
    fn test_frame_paused_keeps_ball() {
        let mut scene = scene();
        scene.frame(&Input::new(), 0.0);
        assert_eq!(scene.world.ball().position, BALL_START);
    }

    #[test]
    fn test_frame_drag_overrides_physics() {
        let mut scene = scene();
        let mut input = Input::new();
        input.set_button(ElementState::Pressed);
        // Pixel (1125, 450) is world (12.5, 15), inside the ball.
        input.set_mouse_position(Vec2::new(1125.0, 450.0));

        let report = scene.frame(&input, 0.01);
        assert_eq!(report.grab, GrabEvent::Held(Vec2::new(12.5, 15.0)));
        assert_eq!(scene.world.ball().position, Vec2::new(12.5, 15.0));
        assert!(scene.world.ball().is_stationary());
    }

    #[test]
    fn test_frame_hotkeys() {
        let mut scene = scene();
        let mut input = Input::new();
        input.set_mouse_position(Vec2::new(1000.0, 600.0));
        input.set_key(KeyCode::S, ElementState::Pressed);

        let report = scene.frame(&input, 0.01);
        assert!(report.spring_added);
        assert_eq!(scene.world.springs().len(), 2);
        assert_eq!(scene.world.springs()[1].anchor(), Vec2::ZERO);

        input.begin_frame();
        input.set_key(KeyCode::R, ElementState::Pressed);
        let report = scene.frame(&input, 0.01);
        assert!(report.reset);
        assert_eq!(scene.world.springs().len(), 1);
    }

    #[test]
    fn test_frame_any_release_ends_drag() {
        let mut scene = scene();
        let mut input = Input::new();
        let dt = 0.01;
        input.set_mouse_position(Viewport::default().to_screen(BALL_START));

        // Two buttons down, one let go: the ball is flung and no longer held.
        input.set_button(ElementState::Pressed);
        input.set_button(ElementState::Pressed);
        scene.frame(&input, dt);
        input.set_button(ElementState::Released);
        let report = scene.frame(&input, dt);
        assert_eq!(report.grab, GrabEvent::Released(Vec2::ZERO));
        assert!(!scene.grab.is_holding());

        let report = scene.frame(&input, dt);
        assert_eq!(report.grab, GrabEvent::None);
    }

    #[test]
    fn test_frame_reset_wins_over_spring_in_same_frame() {
        let mut scene = scene();
        let mut input = Input::new();
        input.set_key(KeyCode::R, ElementState::Pressed);
        input.set_key(KeyCode::S, ElementState::Pressed);

        let report = scene.frame(&input, 0.0);
        assert!(report.spring_added && report.reset);
        assert_eq!(scene.world.springs(), World::default().springs());
    }
}
