//! Mouse dragging and flinging of the ball.
//!
//! While the button is down over the ball, the cursor owns the ball's
//! position and physics results for that frame are overwritten. On release
//! the ball is given the cursor's velocity, estimated from its last held
//! position.

use glam::Vec2;

use crate::physics::Ball;

/// Divisor applied to the release velocity.
///
/// A hand-tuned factor with no physical derivation.
pub const FLING_DAMPING: f32 = 2.0;

/// What the grab did to the ball this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrabEvent {
    /// No override; physics ran untouched.
    None,
    /// The ball was pinned to the cursor.
    Held(Vec2),
    /// The ball was let go with this velocity.
    Released(Vec2),
}

/// Drag history carried between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Grab {
    holding: bool,
    last_cursor: Vec2,
}

impl Grab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the ball was held on the most recent held frame and has not
    /// been released since.
    #[inline]
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Cursor position recorded on the last held frame.
    #[inline]
    pub fn last_cursor(&self) -> Vec2 {
        self.last_cursor
    }

    /// Apply the mouse state for this frame to `ball`.
    ///
    /// Must run after the physics step so that the override wins. `cursor` is
    /// in world coordinates.
    pub fn update(
        &mut self,
        ball: &mut Ball,
        button_down: bool,
        cursor: Vec2,
        dt: f32,
    ) -> GrabEvent {
        if button_down {
            if ball.contains(cursor) {
                ball.hold_at(cursor);
                self.last_cursor = cursor;
                self.holding = true;
                return GrabEvent::Held(cursor);
            }
            return GrabEvent::None;
        }

        if !self.holding {
            return GrabEvent::None;
        }
        self.holding = false;

        let velocity = fling_velocity(self.last_cursor, cursor, dt);
        ball.velocity = velocity;
        GrabEvent::Released(velocity)
    }

    /// Forget any drag in progress.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

/// Backward finite difference of the cursor, divided by [`FLING_DAMPING`].
///
/// A frame with no elapsed time yields zero rather than an infinite velocity.
pub fn fling_velocity(from: Vec2, to: Vec2, dt: f32) -> Vec2 {
    if dt <= 0.0 {
        return Vec2::ZERO;
    }
    (to - from) / dt / FLING_DAMPING
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball() -> Ball {
        Ball::new(Vec2::new(12.0, 15.0), 100.0, 1.5)
    }

    #[test]
    fn test_grab_snaps_and_zeroes_velocity() {
        let mut ball = ball();
        ball.velocity = Vec2::new(4.0, 4.0);
        let mut grab = Grab::new();

        let event = grab.update(&mut ball, true, Vec2::new(12.5, 15.5), 0.01);
        assert_eq!(event, GrabEvent::Held(Vec2::new(12.5, 15.5)));
        assert_eq!(ball.position, Vec2::new(12.5, 15.5));
        assert!(ball.is_stationary());
        assert!(grab.is_holding());
    }

    #[test]
    fn test_press_outside_radius_ignored() {
        let mut ball = ball();
        ball.velocity = Vec2::new(1.0, 0.0);
        let mut grab = Grab::new();

        let event = grab.update(&mut ball, true, Vec2::new(20.0, 20.0), 0.01);
        assert_eq!(event, GrabEvent::None);
        assert_eq!(ball.velocity, Vec2::new(1.0, 0.0));
        assert!(!grab.is_holding());

        // Releasing without ever holding does nothing either.
        let event = grab.update(&mut ball, false, Vec2::new(20.0, 20.0), 0.01);
        assert_eq!(event, GrabEvent::None);
        assert_eq!(ball.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_release_flings() {
        let mut ball = ball();
        let mut grab = Grab::new();
        let a = Vec2::new(12.0, 15.0);
        let b = Vec2::new(13.0, 14.0);
        let dt = 0.01;

        grab.update(&mut ball, true, a, dt);
        let event = grab.update(&mut ball, false, b, dt);

        let expected = (b - a) / dt / 2.0;
        assert_eq!(event, GrabEvent::Released(expected));
        assert_eq!(ball.velocity, expected);
        assert!(!grab.is_holding());
    }

    #[test]
    fn test_release_uses_last_held_cursor() {
        let mut ball = ball();
        let mut grab = Grab::new();

        grab.update(&mut ball, true, Vec2::new(12.0, 15.0), 0.01);
        grab.update(&mut ball, true, Vec2::new(12.5, 15.0), 0.01);
        // Cursor escapes the ball while the button is still down.
        grab.update(&mut ball, true, Vec2::new(30.0, 15.0), 0.01);
        assert!(grab.is_holding());
        assert_eq!(grab.last_cursor(), Vec2::new(12.5, 15.0));

        let event = grab.update(&mut ball, false, Vec2::new(30.5, 15.0), 0.5);
        assert_eq!(event, GrabEvent::Released(Vec2::new(18.0, 0.0)));
    }

    #[test]
    fn test_zero_dt_release_is_still() {
        let velocity = fling_velocity(Vec2::ZERO, Vec2::new(1.0, 1.0), 0.0);
        assert_eq!(velocity, Vec2::ZERO);
    }

    #[test]
    fn test_cancel() {
        let mut ball = ball();
        let mut grab = Grab::new();
        grab.update(&mut ball, true, Vec2::new(12.0, 15.0), 0.01);
        grab.cancel();
        assert!(!grab.is_holding());
        let event = grab.update(&mut ball, false, Vec2::ZERO, 0.01);
        assert_eq!(event, GrabEvent::None);
    }
}
