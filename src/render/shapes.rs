//! CPU-side line geometry for one frame.
//!
//! Everything is drawn as a list of line segments in window pixels: one
//! segment per spring, and the ball's outline as a closed polygon.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::physics::World;
use crate::view::Viewport;

/// Segments used to approximate the ball outline.
pub const CIRCLE_SEGMENTS: usize = 100;

/// One end of a line segment, in window pixels.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
}

impl LineVertex {
    #[inline]
    pub fn new(p: Vec2) -> Self {
        Self { position: p.to_array() }
    }
}

/// Line segments stored as vertex pairs, ready for a line-list draw.
#[derive(Clone, Debug, Default)]
pub struct LineBatch {
    vertices: Vec<LineVertex>,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Springs and ball outline for `world` as seen through `view`.
    pub fn from_world(world: &World, view: &Viewport) -> Self {
        let mut batch = Self::new();
        let ball = world.ball();
        let center = view.to_screen(ball.position);

        for spring in world.springs() {
            batch.push_line(view.to_screen(spring.anchor()), center);
        }
        batch.push_circle(center, view.to_pixels(ball.radius), CIRCLE_SEGMENTS);
        batch
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn push_line(&mut self, a: Vec2, b: Vec2) {
        self.vertices.push(LineVertex::new(a));
        self.vertices.push(LineVertex::new(b));
    }

    /// Closed outline of a circle with `segments` edges.
    pub fn push_circle(&mut self, center: Vec2, radius: f32, segments: usize) {
        if segments == 0 {
            return;
        }
        let point = |i: usize| {
            let theta = std::f32::consts::TAU * i as f32 / segments as f32;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        };
        self.vertices.reserve(segments * 2);
        for i in 0..segments {
            self.push_line(point(i), point(i + 1));
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
