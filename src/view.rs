//! Mapping between world meters and window pixels.

use glam::Vec2;

/// A fixed 2D view: world origin at a pixel position, Y pointing up.
///
/// ```
/// use springball::view::Viewport;
/// use glam::Vec2;
///
/// let view = Viewport::default();
/// assert_eq!(view.to_screen(Vec2::ZERO), Vec2::new(1000.0, 600.0));
/// assert_eq!(view.to_screen(Vec2::new(1.0, 1.0)), Vec2::new(1010.0, 590.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Pixel position of the world origin.
    pub origin: Vec2,
    /// Pixels per meter.
    pub scale: f32,
}

impl Viewport {
    pub fn new(origin: Vec2, scale: f32) -> Self {
        Self { origin, scale }
    }

    /// World meters to window pixels.
    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + world.x * self.scale,
            self.origin.y - world.y * self.scale,
        )
    }

    /// Window pixels to world meters.
    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x - self.origin.x) / self.scale,
            (self.origin.y - screen.y) / self.scale,
        )
    }

    /// A world length in pixels.
    #[inline]
    pub fn to_pixels(&self, meters: f32) -> f32 {
        meters * self.scale
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Vec2::new(1000.0, 600.0), 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let view = Viewport::default();
        let p = Vec2::new(12.0, 15.0);
        let screen = view.to_screen(p);
        assert_eq!(screen, Vec2::new(1120.0, 450.0));
        assert!((view.to_world(screen) - p).length() < 1e-5);
    }

    #[test]
    fn test_cursor_to_world() {
        // Pixel (1000, 600) is the world origin; down on screen is negative Y.
        let view = Viewport::default();
        assert_eq!(view.to_world(Vec2::new(1000.0, 600.0)), Vec2::ZERO);
        let below_right = view.to_world(Vec2::new(1100.0, 700.0));
        assert_eq!(below_right, Vec2::new(10.0, -10.0));
    }
}
