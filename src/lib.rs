//! # Springball
//!
//! A single ball hanging from Hookean springs, simulated in real time and
//! dragged around with the mouse.
//!
//! ## Quick Start
//!
//! ```no_run
//! use springball::Config;
//!
//! fn main() -> Result<(), springball::AppError> {
//!     springball::run(Config::new().with_max_fps(240.0))
//! }
//! ```
//!
//! ## Physics
//!
//! The [`World`] holds one [`Ball`], its [`Spring`]s and a list of global
//! [`Force`] rules. Each step resets the ball's force buffer, sums spring,
//! gravity and drag forces into it, then integrates with semi-implicit
//! Euler:
//!
//! ```
//! use glam::Vec2;
//! use springball::prelude::*;
//!
//! let mut world = World::default();
//! world.add_spring_at(Vec2::new(20.0, 15.0));
//! for _ in 0..60 {
//!     world.step(1.0 / 60.0);
//! }
//! assert!(world.ball().position.is_finite());
//! ```
//!
//! The step uses whatever delta it is given. The windowed app passes the
//! measured wall-clock frame time, so runs are not reproducible unless a
//! fixed delta is configured.
//!
//! ## Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Mouse button on the ball | Drag it; release to fling |
//! | `S` | Add a spring anchored at the cursor |
//! | `R` | Reset the ball and springs |
//! | `Space` | Pause / resume |
//! | `Esc` | Quit |

mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod interaction;
pub mod physics;
pub mod render;
pub mod time;
pub mod view;

pub use app::{run, FrameReport, Scene};
pub use config::Config;
pub use error::{AppError, ConfigError, GpuError};
pub use glam::Vec2;
pub use interaction::{Grab, GrabEvent};
pub use physics::{Ball, Force, Spring, World};
pub use view::Viewport;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use springball::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::input::{Input, KeyCode};
    pub use crate::interaction::{Grab, GrabEvent};
    pub use crate::physics::{Ball, Force, Spring, World};
    pub use crate::time::{FrameLimiter, Time};
    pub use crate::view::Viewport;
    pub use crate::Vec2;
}
