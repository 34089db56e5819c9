//! Plain-data geometry for panel layout. All coordinates are f64 in the
//! container's coordinate space, y growing downward.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Point { Point { x, y } }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Size { Size { width, height } }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// The corner opposite `origin`.
    pub fn max(&self) -> Point {
        Point::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn area(&self) -> f64 { self.size.width * self.size.height }

    /// Strict interior overlap. Rects that merely share an edge or a corner
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.origin.x < other.max().x
            && other.origin.x < self.max().x
            && self.origin.y < other.max().y
            && other.origin.y < self.max().y
    }

    /// Smallest rect containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.origin.x.min(other.origin.x);
        let y = self.origin.y.min(other.origin.y);
        let max_x = self.max().x.max(other.max().x);
        let max_y = self.max().y.max(other.max().y);
        Rect::new(x, y, max_x - x, max_y - y)
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.origin.x <= other.origin.x
            && self.origin.y <= other.origin.y
            && other.max().x <= self.max().x
            && other.max().y <= self.max().y
    }

    /// The box this rect occupies once the presentation layer applies a
    /// uniform scale transform anchored at its center.
    pub fn scaled_about_center(&self, scale: f64) -> Rect {
        let center = self.center();
        let width = self.size.width * scale;
        let height = self.size.height * scale;
        Rect::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Shrunk by `d` on every edge; negative `d` expands. Used for
    /// tolerance-relaxed containment comparisons.
    pub fn inset_by(&self, d: f64) -> Rect {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            self.size.width - 2.0 * d,
            self.size.height - 2.0 * d,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn intersects_requires_interior_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        // Edge-adjacent rects do not count.
        let right = Rect::new(100.0, 0.0, 100.0, 100.0);
        let below = Rect::new(0.0, 100.0, 100.0, 100.0);
        let corner = Rect::new(100.0, 100.0, 100.0, 100.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));

        let distant = Rect::new(500.0, 500.0, 10.0, 10.0);
        assert!(!a.intersects(&distant));
    }

    #[test]
    fn coincident_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn union_spans_both() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(150.0, -50.0, 100.0, 100.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -50.0, 250.0, 150.0));
        assert_eq!(a.union(&a), a);
        // Union with a contained rect is the container.
        let inner = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(a.union(&inner), a);
    }

    #[test]
    fn center_and_area() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
        assert_eq!(r.area(), 5000.0);
        assert_eq!(r.max(), Point::new(110.0, 70.0));
    }

    #[test]
    fn scaled_about_center_keeps_center() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let scaled = r.scaled_about_center(0.5);
        assert_eq!(scaled, Rect::new(25.0, 25.0, 50.0, 50.0));
        assert_eq!(scaled.center(), r.center());

        // Scale 1.0 is the identity.
        assert_eq!(r.scaled_about_center(1.0), r);
    }
}
