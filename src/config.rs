//! Runtime settings for the demo window.
//!
//! Defaults reproduce the classic setup: a 2400x1200 window with the world
//! origin at pixel (1000, 600), 10 pixels per meter, and a soft 600 FPS cap.

use glam::Vec2;

use crate::error::ConfigError;
use crate::view::Viewport;

/// Lowest accepted non-zero frame-rate cap.
pub const MIN_FPS_CAP: f32 = 1.0;

/// Window, view and timing settings.
///
/// Build with method chaining:
///
/// ```
/// use springball::Config;
///
/// let config = Config::new()
///     .with_window_size(1280, 720)
///     .with_max_fps(144.0)
///     .with_fixed_delta(Some(1.0 / 240.0));
/// assert_eq!(config.window_size, (1280, 720));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub title: String,
    /// Inner window size in pixels.
    pub window_size: (u32, u32),
    pub viewport: Viewport,
    /// Soft frame-rate cap; 0 disables it.
    pub max_fps: f32,
    /// Replace the measured frame delta with a constant, in seconds.
    pub fixed_delta: Option<f32>,
    /// Multiplier on the physics delta (1.0 = real time).
    pub time_scale: f32,
    /// Log FPS, delta and ball position every frame.
    pub frame_diagnostics: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            title: "Spring Test".to_string(),
            window_size: (2400, 1200),
            viewport: Viewport::default(),
            max_fps: 600.0,
            fixed_delta: None,
            time_scale: 1.0,
            frame_diagnostics: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Set pixels per meter.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.viewport.scale = scale;
        self
    }

    /// Set the pixel position of the world origin.
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.viewport.origin = Vec2::new(x, y);
        self
    }

    pub fn with_max_fps(mut self, max_fps: f32) -> Self {
        self.max_fps = max_fps;
        self
    }

    pub fn with_fixed_delta(mut self, delta: Option<f32>) -> Self {
        self.fixed_delta = delta;
        self
    }

    /// Run the physics faster (> 1) or in slow motion (< 1).
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale;
        self
    }

    pub fn with_frame_diagnostics(mut self, enabled: bool) -> Self {
        self.frame_diagnostics = enabled;
        self
    }

    /// Check values the frame loop cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = self.window_size;
        if w == 0 || h == 0 {
            return Err(ConfigError::WindowSize(w, h));
        }
        if !(self.viewport.scale > 0.0 && self.viewport.scale.is_finite()) {
            return Err(ConfigError::Scale(self.viewport.scale));
        }
        if let Some(dt) = self.fixed_delta {
            if !(dt > 0.0 && dt.is_finite()) {
                return Err(ConfigError::FixedDelta(dt));
            }
        }
        // 0 turns the cap off; anything else must be at least MIN_FPS_CAP.
        if self.max_fps != 0.0 && !(self.max_fps >= MIN_FPS_CAP && self.max_fps.is_finite()) {
            return Err(ConfigError::MaxFps(self.max_fps));
        }
        if !(self.time_scale >= 0.0 && self.time_scale.is_finite()) {
            return Err(ConfigError::TimeScale(self.time_scale));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
