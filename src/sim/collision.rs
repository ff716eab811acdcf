//! Collision detection for axis-aligned boxes
//!
//! Everything in the world is an axis-aligned rectangle anchored at its
//! top-left corner, with y growing downward.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Horizontal extents overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }

    /// Strict intersection on all four sides
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.max.y > other.min.y && self.min.y < other.max.y
    }
}

/// Whether a falling body should come to rest on a platform this tick.
///
/// The body's bottom edge must sit in `[top, top + band]` while it overlaps
/// the platform horizontally and is not moving upward.
pub fn lands_on(body: &Aabb, vel_y: f32, platform: &Aabb, band: f32) -> bool {
    body.overlaps_x(platform)
        && body.bottom() >= platform.top()
        && body.bottom() <= platform.top() + band
        && vel_y >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = rect(0.0, 0.0, 30.0, 30.0);
        assert!(a.overlaps(&rect(29.0, 29.0, 30.0, 30.0)));
        // Shared edges
        assert!(!a.overlaps(&rect(30.0, 0.0, 30.0, 30.0)));
        assert!(!a.overlaps(&rect(0.0, 30.0, 30.0, 30.0)));
        assert!(!a.overlaps(&rect(-30.0, 0.0, 30.0, 30.0)));
        assert!(!a.overlaps(&rect(0.0, -30.0, 30.0, 30.0)));
    }

    #[test]
    fn test_lands_on_band() {
        let platform = rect(100.0, 300.0, 100.0, 10.0);

        // Bottom exactly on top
        assert!(lands_on(&rect(120.0, 270.0, 30.0, 30.0), 1.0, &platform, 5.0));
        // Bottom at the far end of the band
        assert!(lands_on(&rect(120.0, 275.0, 30.0, 30.0), 1.0, &platform, 5.0));
        // Just past the band
        assert!(!lands_on(&rect(120.0, 275.5, 30.0, 30.0), 1.0, &platform, 5.0));
        // Above the top
        assert!(!lands_on(&rect(120.0, 269.0, 30.0, 30.0), 1.0, &platform, 5.0));
    }

    #[test]
    fn test_lands_on_requires_descent_and_overlap() {
        let platform = rect(100.0, 300.0, 100.0, 10.0);
        let body = rect(120.0, 272.0, 30.0, 30.0);

        assert!(lands_on(&body, 0.0, &platform, 5.0));
        assert!(!lands_on(&body, -0.1, &platform, 5.0));

        // Only the corner touches horizontally
        assert!(!lands_on(&rect(70.0, 272.0, 30.0, 30.0), 1.0, &platform, 5.0));
        assert!(!lands_on(&rect(200.0, 272.0, 30.0, 30.0), 1.0, &platform, 5.0));
        assert!(lands_on(&rect(71.0, 272.0, 30.0, 30.0), 1.0, &platform, 5.0));
    }
}
