//! Axis-aligned rectangles for sprites and hitboxes
//!
//! Screen space: x grows to the right, y grows downward.

use glam::Vec2;

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    /// Rect whose top edge is centered on `midtop`
    pub fn from_midtop(midtop: Vec2, size: Vec2) -> Self {
        Self {
            min: Vec2::new(midtop.x - size.x / 2.0, midtop.y),
            size,
        }
    }

    /// Rect whose bottom edge is centered on `midbottom`
    pub fn from_midbottom(midbottom: Vec2, size: Vec2) -> Self {
        Self {
            min: Vec2::new(midbottom.x - size.x / 2.0, midbottom.y - size.y),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.min.x + self.size.x / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Move horizontally by `dx`
    pub fn translate_x(&mut self, dx: f32) {
        self.min.x += dx;
    }

    /// Grow (or shrink, for negative amounts) about the center.
    ///
    /// `dx`/`dy` are the total change per axis, split evenly between both
    /// sides. Size never goes below zero.
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        let size = (self.size + Vec2::new(dx, dy)).max(Vec2::ZERO);
        Self::from_center(self.center(), size)
    }

    /// Strict overlap test: rects that only share an edge do not intersect,
    /// and an empty rect never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
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
    fn test_anchors() {
        let size = Vec2::new(60.0, 380.0);

        let r = Rect::from_midtop(Vec2::new(500.0, 400.0), size);
        assert_eq!(r.top(), 400.0);
        assert_eq!(r.center_x(), 500.0);
        assert_eq!(r.left(), 470.0);

        let r = Rect::from_midbottom(Vec2::new(500.0, 200.0), size);
        assert_eq!(r.bottom(), 200.0);
        assert_eq!(r.top(), -180.0);
        assert_eq!(r.center_x(), 500.0);

        let r = Rect::from_center(Vec2::new(100.0, 300.0), Vec2::new(55.0, 40.0));
        assert_eq!(r.left(), 72.5);
        assert_eq!(r.bottom(), 320.0);
    }

    #[test]
    fn test_inflate_keeps_center() {
        let r = Rect::from_center(Vec2::new(100.0, 300.0), Vec2::new(55.0, 40.0));
        let shrunk = r.inflate(-14.0, -14.0);
        assert_eq!(shrunk.center(), r.center());
        assert_eq!(shrunk.size, Vec2::new(41.0, 26.0));

        let gone = r.inflate(-100.0, -100.0);
        assert!(gone.is_empty());
        assert_eq!(gone.center(), r.center());
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert!(!a.intersects(&Rect::new(20.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_empty_never_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(5.0, 5.0, 0.0, 3.0)));
    }
}
