//! Hookean springs with a fixed anchor.

use glam::Vec2;

use super::{direction, Ball, SPRING_REST_LENGTH, SPRING_STIFFNESS};

/// A spring from a fixed anchor point to the ball.
///
/// Springs are immutable once created; anchors never move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    anchor: Vec2,
    rest_length: f32,
    stiffness: f32,
}

impl Spring {
    /// Create a spring anchored at `anchor`.
    pub fn new(anchor: Vec2, rest_length: f32, stiffness: f32) -> Self {
        Self {
            anchor,
            rest_length,
            stiffness,
        }
    }

    /// A spring at `anchor` with the stock rest length and stiffness.
    pub fn anchored_at(anchor: Vec2) -> Self {
        Self::new(anchor, SPRING_REST_LENGTH, SPRING_STIFFNESS)
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    #[inline]
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    #[inline]
    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    /// Rest length minus the current anchor distance.
    ///
    /// Negative while stretched, positive while compressed.
    pub fn deformation(&self, position: Vec2) -> f32 {
        self.rest_length - position.distance(self.anchor)
    }

    /// Force on a mass at `position`.
    ///
    /// A stretched spring pulls toward the anchor and a compressed one pushes
    /// away. At the anchor itself the direction is degenerate and the force
    /// is zero.
    pub fn force_at(&self, position: Vec2) -> Vec2 {
        let magnitude = -self.deformation(position) * self.stiffness;
        direction(self.anchor - position) * magnitude
    }

    /// Accumulate this spring's force into the ball's force buffer.
    #[inline]
    pub fn apply(&self, ball: &mut Ball) {
        let force = self.force_at(ball.position);
        ball.apply_force(force);
    }
}
