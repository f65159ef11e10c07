//! Simulation state: one ball, its springs and the global forces.

use glam::Vec2;

use super::{Ball, Force, Spring, DRAG_COEFFICIENT, GRAVITY};

/// Where the ball starts and returns to on reset.
pub const BALL_START: Vec2 = Vec2::new(12.0, 15.0);
/// Ball mass in kilograms.
pub const BALL_MASS: f32 = 100.0;
/// Ball radius in meters.
pub const BALL_RADIUS: f32 = 1.5;
/// Anchor of the spring present at startup and after reset.
pub const DEFAULT_ANCHOR: Vec2 = Vec2::new(12.0, 5.0);

/// Everything the physics step reads and writes.
///
/// Use [`World::default`] for the stock scene, or build one up with the
/// `with_*` methods.
#[derive(Clone, Debug)]
pub struct World {
    ball: Ball,
    springs: Vec<Spring>,
    forces: Vec<Force>,
}

impl World {
    /// An empty world: default ball, no springs, no global forces.
    pub fn new() -> Self {
        Self {
            ball: Ball::new(BALL_START, BALL_MASS, BALL_RADIUS),
            springs: Vec::new(),
            forces: Vec::new(),
        }
    }

    /// Replace the ball.
    pub fn with_ball(mut self, ball: Ball) -> Self {
        self.ball = ball;
        self
    }

    /// Add a spring.
    pub fn with_spring(mut self, spring: Spring) -> Self {
        self.springs.push(spring);
        self
    }

    /// Add a global force rule.
    pub fn with_force(mut self, force: Force) -> Self {
        self.forces.push(force);
        self
    }

    #[inline]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    #[inline]
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    /// Springs in insertion order.
    #[inline]
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    #[inline]
    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    /// Append a spring with the stock rest length and stiffness.
    pub fn add_spring_at(&mut self, anchor: Vec2) {
        self.springs.push(Spring::anchored_at(anchor));
    }

    /// Restore the stock scene, discarding appended springs.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clear the ball's force buffer and sum every contribution into it.
    pub fn accumulate_forces(&mut self) {
        self.ball.reset_forces();
        for spring in &self.springs {
            spring.apply(&mut self.ball);
        }
        for force in &self.forces {
            force.apply(&mut self.ball);
        }
    }

    /// Net force the ball would feel at its current state.
    pub fn net_force(&self) -> Vec2 {
        let springs: Vec2 = self
            .springs
            .iter()
            .map(|s| s.force_at(self.ball.position))
            .sum();
        let forces: Vec2 = self.forces.iter().map(|f| f.on(&self.ball)).sum();
        springs + forces
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.accumulate_forces();
        self.ball.integrate(dt);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
            .with_spring(Spring::anchored_at(DEFAULT_ANCHOR))
            .with_force(Force::Gravity(GRAVITY))
            .with_force(Force::Drag(DRAG_COEFFICIENT))
    }
}
