//! Axis-aligned rectangles for sprites and hit boxes
//!
//! Screen space: x grows right, y grows down, origin at the top-left.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` whose top-left corner is `pos`
    pub fn at(pos: Vec2, size: (f32, f32)) -> Self {
        Self::new(pos.x, pos.y, size.0, size.1)
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered_on(center: Vec2, size: (f32, f32)) -> Self {
        Self::new(center.x - size.0 / 2.0, center.y - size.1 / 2.0, size.0, size.1)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Snap the rectangle onto whole pixels at `pos`
    pub fn snap_to(&mut self, pos: Vec2) {
        self.x = pos.x.trunc();
        self.y = pos.y.trunc();
    }

    /// Strict overlap test (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_centered_on() {
        let r = Rect::centered_on(Vec2::new(50.0, 50.0), (20.0, 10.0));
        assert_eq!(r, Rect::new(40.0, 45.0, 20.0, 10.0));
        assert_eq!(r.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_snap_truncates() {
        let mut r = Rect::new(0.0, 0.0, 4.0, 4.0);
        r.snap_to(Vec2::new(3.9, -0.5));
        assert_eq!(r.x, 3.0);
        assert_eq!(r.y, 0.0);
    }
}
