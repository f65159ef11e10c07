//! Global force rules applied to the ball every step.

use glam::Vec2;

use super::Ball;

/// Direction returned when normalizing a zero-length vector.
///
/// A spring whose anchor coincides with the ball, or drag on a ball at rest,
/// has no meaningful direction. Both contribute no force.
pub const DEGENERATE_DIRECTION: Vec2 = Vec2::ZERO;

/// Unit vector along `v`, or [`DEGENERATE_DIRECTION`] when `v` has no length.
#[inline]
pub fn direction(v: Vec2) -> Vec2 {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        v / length
    } else {
        DEGENERATE_DIRECTION
    }
}

/// Forces that act on the ball regardless of springs.
///
/// Applied every step in the order they were added to the world, after the
/// springs. All contributions are summed, so the order never changes the
/// result.
///
/// # Example
///
/// ```
/// use springball::physics::{Force, World};
///
/// let world = World::new()
///     .with_force(Force::Gravity(10.0))
///     .with_force(Force::Drag(10.0));
/// assert_eq!(world.forces().len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Force {
    /// Constant downward acceleration (negative Y), scaled by the ball's
    /// mass.
    ///
    /// - `g` - acceleration in meters per second squared
    Gravity(f32),

    /// Resistance opposing the current velocity.
    ///
    /// Magnitude is `coefficient * speed`, so this is linear in speed.
    /// A ball at rest feels no drag.
    Drag(f32),

    /// Constant force in any direction, independent of mass.
    Constant(Vec2),
}

impl Force {
    /// Force this rule would exert on `ball` right now.
    pub fn on(&self, ball: &Ball) -> Vec2 {
        match *self {
            Force::Gravity(g) => Vec2::new(0.0, -ball.mass * g),
            Force::Drag(coefficient) => {
                let magnitude = coefficient * ball.velocity.length();
                -direction(ball.velocity) * magnitude
            }
            Force::Constant(force) => force,
        }
    }

    /// Accumulate this rule's force into the ball's force buffer.
    #[inline]
    pub fn apply(&self, ball: &mut Ball) {
        let force = self.on(ball);
        ball.apply_force(force);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn ball_moving(velocity: Vec2) -> Ball {
        let mut ball = Ball::new(Vec2::ZERO, 100.0, 1.5);
        ball.velocity = velocity;
        ball
    }

    #[test]
    fn test_direction_of_zero_is_degenerate() {
        assert_eq!(direction(Vec2::ZERO), DEGENERATE_DIRECTION);
        assert_eq!(direction(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_direction_is_unit() {
        let d = direction(Vec2::new(3.0, -4.0));
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!((d - Vec2::new(0.6, -0.8)).length() < 1e-6);
    }

    #[test]
    fn test_gravity_scales_with_mass() {
        let ball = Ball::new(Vec2::ZERO, 100.0, 1.5);
        assert_eq!(Force::Gravity(10.0).on(&ball), Vec2::new(0.0, -1000.0));
    }

    #[test]
    fn test_drag_zero_at_rest() {
        let ball = ball_moving(Vec2::ZERO);
        assert_eq!(Force::Drag(10.0).on(&ball), Vec2::ZERO);
    }

    #[test]
    fn test_drag_anti_parallel_to_velocity() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let velocity = Vec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            if velocity.length() < 1e-3 {
                continue;
            }
            let ball = ball_moving(velocity);
            let drag = Force::Drag(10.0).on(&ball);

            // Opposes motion, proportional to speed.
            let cos = drag.dot(velocity) / (drag.length() * velocity.length());
            assert!((cos + 1.0).abs() < 1e-4, "cos = {}", cos);
            assert!((drag.length() - 10.0 * velocity.length()).abs() < 1e-2);
        }
    }

    #[test]
    fn test_apply_accumulates() {
        let mut ball = ball_moving(Vec2::new(1.0, 0.0));
        Force::Gravity(10.0).apply(&mut ball);
        Force::Drag(10.0).apply(&mut ball);
        Force::Constant(Vec2::new(5.0, 5.0)).apply(&mut ball);
        assert!((ball.force - Vec2::new(-5.0, -995.0)).length() < 1e-4);
    }
}
