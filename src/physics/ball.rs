//! The simulated point mass.

use glam::Vec2;

/// A point mass with a radius used for grabbing and drawing.
///
/// `force` is an accumulation buffer: it is only meaningful between
/// [`Ball::reset_forces`] and [`Ball::integrate`] within one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    /// Position in meters.
    pub position: Vec2,
    /// Velocity in meters per second.
    pub velocity: Vec2,
    /// Mass in kilograms. Must be strictly positive.
    pub mass: f32,
    /// Radius in meters.
    pub radius: f32,
    /// Sum of all forces applied since the last reset.
    pub force: Vec2,
}

impl Ball {
    /// Create a ball at rest.
    pub fn new(position: Vec2, mass: f32, radius: f32) -> Self {
        debug_assert!(mass > 0.0, "ball mass must be positive, got {}", mass);
        Self {
            position,
            velocity: Vec2::ZERO,
            mass,
            radius,
            force: Vec2::ZERO,
        }
    }

    /// Clear the force buffer. Call once per step before applying forces.
    #[inline]
    pub fn reset_forces(&mut self) {
        self.force = Vec2::ZERO;
    }

    /// Add `force` to the force buffer.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Advance one semi-implicit Euler step.
    ///
    /// Velocity is updated from the accumulated force first, and the new
    /// velocity moves the position.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.force / self.mass * dt;
        self.position += self.velocity * dt;
    }

    pub fn is_stationary(&self) -> bool {
        self.velocity == Vec2::ZERO
    }

    /// Whether `point` lies within the ball's radius.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) <= self.radius
    }

    /// Pin the ball to `position`, discarding its velocity.
    pub fn hold_at(&mut self, position: Vec2) {
        self.velocity = Vec2::ZERO;
        self.position = position;
    }
}
