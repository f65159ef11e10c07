//! Frame timing: delta time, FPS, pause, and the soft frame-rate cap.
//!
//! ```ignore
//! let mut time = Time::new();
//! let limiter = FrameLimiter::new(600.0);
//!
//! // In the frame loop:
//! let frame_start = Instant::now();
//! let dt = time.update();
//! world.step(dt);
//! limiter.pace(frame_start);
//! ```
//!
//! The delta is wall-clock time between frames, so the physics depends on
//! the frame rate. Set a fixed delta for repeatable runs.

use std::time::{Duration, Instant};

/// Time tracking for the frame loop.
#[derive(Debug)]
pub struct Time {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Averaged FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    paused: bool,
    /// Fixed delta time for deterministic updates (optional).
    fixed_delta: Option<f32>,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f32,
}

impl Time {
    /// Create a new time tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Advance to a new frame and return its delta in seconds.
    ///
    /// Returns 0 while paused.
    pub fn update(&mut self) -> f32 {
        self.update_at(Instant::now())
    }

    fn update_at(&mut self, now: Instant) -> f32 {
        let raw_delta = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.delta_secs = if self.paused {
            0.0
        } else {
            self.fixed_delta.unwrap_or(raw_delta) * self.time_scale
        };
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second averaged over the last half second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Reciprocal of the last delta; what a single frame would suggest.
    #[inline]
    pub fn instant_fps(&self) -> f32 {
        if self.delta_secs > 0.0 {
            1.0 / self.delta_secs
        } else {
            0.0
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set a fixed delta time for deterministic updates.
    ///
    /// Pass `None` to use real frame timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Set time scale multiplier.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = half speed (slow motion)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleeps at the end of a frame that finished ahead of the target rate.
///
/// The cap is soft: a slow frame is never compensated for.
#[derive(Clone, Copy, Debug)]
pub struct FrameLimiter {
    target: Option<Duration>,
}

impl FrameLimiter {
    /// Limit to `max_fps` frames per second.
    ///
    /// Non-positive values, and rates so low that one frame does not fit in
    /// a [`Duration`], disable it.
    pub fn new(max_fps: f32) -> Self {
        let target = if max_fps > 0.0 {
            Duration::try_from_secs_f32(1.0 / max_fps).ok()
        } else {
            None
        };
        Self { target }
    }

    /// Minimum frame duration, if limited.
    pub fn target(&self) -> Option<Duration> {
        self.target
    }

    /// How long to sleep after a frame that took `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        let target = self.target?;
        target.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleep out the rest of the frame that began at `frame_start`.
    pub fn pace(&self, frame_start: Instant) {
        if let Some(rest) = self.remaining(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert!(!time.is_paused());
        assert_eq!(time.time_scale(), 1.0);
        assert_eq!(time.instant_fps(), 0.0);
    }

    #[test]
    fn test_time_update() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        let delta = time.update();

        assert!(delta > 0.0);
        assert_eq!(time.frame(), 1);
        assert!(time.instant_fps() > 0.0);
    }

    #[test]
    fn test_time_pause() {
        let mut time = Time::new();
        time.update();

        time.toggle_pause();
        assert!(time.is_paused());
        thread::sleep(Duration::from_millis(5));
        assert_eq!(time.update(), 0.0);

        time.toggle_pause();
        thread::sleep(Duration::from_millis(5));
        assert!(time.update() > 0.0);
    }

    #[test]
    fn test_time_scale() {
        let mut time = Time::new();
        time.set_time_scale(2.0);
        assert_eq!(time.time_scale(), 2.0);

        // Negative scale should clamp to 0
        time.set_time_scale(-1.0);
        assert_eq!(time.time_scale(), 0.0);
    }

    #[test]
    fn test_fixed_delta() {
        let mut time = Time::new();
        time.set_fixed_delta(Some(1.0 / 60.0));

        thread::sleep(Duration::from_millis(20));
        let delta = time.update();
        assert!((delta - 1.0 / 60.0).abs() < 0.0001);

        time.set_time_scale(0.5);
        let delta = time.update();
        assert!((delta - 1.0 / 120.0).abs() < 0.0001);
    }

    #[test]
    fn test_fps_average() {
        let mut time = Time::new();
        let start = time.fps_update_time;
        for i in 1..=30 {
            time.update_at(start + Duration::from_millis(i * 20));
        }
        // 25 frames in the first 500ms window
        assert!((time.fps() - 50.0).abs() < 0.5, "fps = {}", time.fps());
    }

    #[test]
    fn test_limiter_remaining() {
        let limiter = FrameLimiter::new(600.0);
        let target = limiter.target().unwrap();
        assert!(limiter.remaining(Duration::ZERO).is_some());
        assert_eq!(limiter.remaining(target), None);
        assert_eq!(limiter.remaining(Duration::from_millis(10)), None);

        let half = target / 2;
        let rest = limiter.remaining(half).unwrap();
        assert_eq!(rest, target - half);
    }

    #[test]
    fn test_limiter_disabled() {
        assert_eq!(FrameLimiter::new(0.0).target(), None);
        assert_eq!(FrameLimiter::new(-5.0).remaining(Duration::ZERO), None);
    }

    #[test]
    fn test_limiter_out_of_range_rate() {
        // 1/x overflows Duration, or is infinite.
        assert_eq!(FrameLimiter::new(1e-20).target(), None);
        assert_eq!(FrameLimiter::new(1e-40).target(), None);
        assert_eq!(FrameLimiter::new(f32::NAN).target(), None);
        let instant = FrameLimiter::new(f32::INFINITY);
        assert_eq!(instant.target(), Some(Duration::ZERO));
        assert_eq!(
            FrameLimiter::new(1.0).target(),
            Some(Duration::from_secs(1))
        );
    }
}
