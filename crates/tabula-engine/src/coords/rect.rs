use super::Point;

/// Axis-aligned rectangle in screen pixels (top-left origin).
///
/// Containment is **inclusive** on all four edges, matching pointer hit
/// testing for on-screen entities: a 10×10 rect at the origin contains
/// both (0, 0) and (10, 10).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(self) -> (i32, i32) {
        (self.w, self.h)
    }

    /// Center of the rect, rounded towards the origin.
    #[inline]
    pub const fn center(self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Inclusive containment test on all edges.
    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x <= self.x + self.w && p.y <= self.y + self.h
    }

    /// Grows the rect by `b` pixels on every side, keeping the center fixed.
    #[inline]
    pub const fn inflate(self, b: i32) -> Self {
        Rect::new(self.x - b, self.y - b, self.w + 2 * b, self.h + 2 * b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(Point::new(5, 5)));
    }

    #[test]
    fn contains_all_edges_inclusive() {
        let rect = r(0, 0, 10, 10);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(0, 10)));
        assert!(rect.contains(Point::new(10, 0)));
    }

    #[test]
    fn contains_outside() {
        let rect = r(0, 0, 10, 10);
        assert!(!rect.contains(Point::new(11, 5)));
        assert!(!rect.contains(Point::new(5, -1)));
    }

    // ── center / inflate ──────────────────────────────────────────────────

    #[test]
    fn center_of_even_rect() {
        assert_eq!(r(0, 0, 10, 20).center(), Point::new(5, 10));
    }

    #[test]
    fn inflate_keeps_center() {
        let rect = r(10, 10, 20, 20);
        let grown = rect.inflate(3);
        assert_eq!(grown, r(7, 7, 26, 26));
        assert_eq!(grown.center(), rect.center());
    }
}
