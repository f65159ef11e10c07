//! Force accumulation and integration for a single point mass on springs.
//!
//! Every frame the [`World`] runs the same pipeline:
//!
//! 1. reset the ball's force buffer
//! 2. add each spring's force, in insertion order
//! 3. add each global [`Force`] (gravity, drag), in insertion order
//! 4. integrate with semi-implicit Euler
//!
//! Distances are in meters, stiffness in newtons per meter, mass in
//! kilograms.

mod ball;
mod force;
mod spring;
mod world;

pub use ball::Ball;
pub use force::{direction, Force, DEGENERATE_DIRECTION};
pub use spring::Spring;
pub use world::{World, BALL_MASS, BALL_RADIUS, BALL_START, DEFAULT_ANCHOR};

/// Gravitational acceleration.
pub const GRAVITY: f32 = 10.0;

/// Drag force per unit of speed.
pub const DRAG_COEFFICIENT: f32 = 10.0;

/// Rest length of springs added at runtime and of the default spring.
pub const SPRING_REST_LENGTH: f32 = 10.0;

/// Stiffness of springs added at runtime and of the default spring.
pub const SPRING_STIFFNESS: f32 = 8000.0;
