use serde::Serialize;

/// A rectangle in screen-space pixels, stored as origin plus size.
///
/// Edges follow the Win32 convention: `right = x + width` and
/// `bottom = y + height` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from its four edges.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns `true` when the rectangle has no area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns the number of overlapping pixels along the horizontal axis.
    pub fn horizontal_overlap(&self, other: &Rect) -> i32 {
        let left = self.x.max(other.x);
        let right = self.right().min(other.right());
        (right - left).max(0)
    }

    /// Returns the number of overlapping pixels along the vertical axis.
    pub fn vertical_overlap(&self, other: &Rect) -> i32 {
        let top = self.y.max(other.y);
        let bottom = self.bottom().min(other.bottom());
        (bottom - top).max(0)
    }

    /// Whether the two rectangles share any area.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.horizontal_overlap(other) > 0 && self.vertical_overlap(other) > 0
    }

    /// Area of the intersection, zero when the rectangles are disjoint.
    ///
    /// Computed in `i64` so two large virtual desktops cannot overflow.
    pub fn intersection_area(&self, other: &Rect) -> i64 {
        i64::from(self.horizontal_overlap(other)) * i64::from(self.vertical_overlap(other))
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_edges(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}/{}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_computes_size() {
        let r = Rect::from_edges(100, 50, 500, 450);

        assert_eq!(r, Rect::new(100, 50, 400, 400));
        assert_eq!(r.right(), 500);
        assert_eq!(r.bottom(), 450);
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        // Arrange
        let left = Rect::new(0, 0, 1920, 1080);
        let right = Rect::new(1920, 0, 1920, 1080);

        // Act / Assert
        assert!(!left.intersects(&right));
        assert_eq!(left.intersection_area(&right), 0);
    }

    #[test]
    fn intersects_is_symmetric() {
        let rects = [
            Rect::new(0, 0, 1920, 1080),
            Rect::new(1920, 0, 1920, 1080),
            Rect::new(1800, 0, 200, 200),
            Rect::new(-500, -500, 100, 100),
            Rect::new(-32000, -32000, 160, 28),
            Rect::new(0, 1080, 50, 50),
            Rect::new(10, 10, 0, 0),
        ];

        for a in &rects {
            for b in &rects {
                assert_eq!(a.intersects(b), b.intersects(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn intersection_area_matches_overlap() {
        let monitor_a = Rect::from_edges(0, 0, 1920, 1080);
        let monitor_b = Rect::from_edges(1920, 0, 3840, 1080);
        let window = Rect::from_edges(1800, 0, 2000, 200);

        assert_eq!(window.intersection_area(&monitor_a), 24_000);
        assert_eq!(window.intersection_area(&monitor_b), 16_000);
    }

    #[test]
    fn zero_size_rect_is_degenerate() {
        assert!(Rect::new(10, 10, 0, 100).is_degenerate());
        assert!(Rect::new(10, 10, 100, -1).is_degenerate());
        assert!(!Rect::new(10, 10, 1, 1).is_degenerate());
    }

    #[test]
    fn union_spans_both() {
        let a = Rect::new(0, 0, 1920, 1080);
        let b = Rect::new(-1280, 200, 1280, 1024);

        assert_eq!(a.union(&b), Rect::from_edges(-1280, 0, 1920, 1224));
    }

    #[test]
    fn contains_includes_shared_edges() {
        let monitor = Rect::new(0, 0, 1920, 1080);

        assert!(monitor.contains(&Rect::new(0, 0, 1920, 1080)));
        assert!(!monitor.contains(&Rect::new(1, 0, 1920, 1080)));
    }
}
