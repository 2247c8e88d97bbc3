//! Geometric primitives for family-tree layout.
//!
//! # Coordinate System
//!
//! Layout space is y-up, centered on the horizontal axis:
//!
//! ```text
//!          +Y   (ancestors)
//!           ▲
//!           │
//!  ─────────┼─────────► +X
//!           │
//!           │   (descendants)
//! ```
//!
//! Generation `g` sits at `y = -g * vertical_spacing`, so the oldest generation
//! lies on `y = 0` and every younger generation is further down. Rendering
//! surfaces with a y-down convention flip the sign when drawing.

/// A 2D point in layout space.
///
/// # Examples
///
/// ```
/// # use kinship_core::geometry::Point;
/// let p1 = Point::new(-125.0, 0.0);
/// let p2 = Point::new(125.0, -200.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 0.0);
/// assert_eq!(mid.y(), -100.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Axis-aligned box enclosing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a zero-sized bounds located at `point`.
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Returns the smallest bounds containing all `points`, or `None` when
    /// the iterator is empty.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, Self::include))
    }

    /// Grows the bounds so that it contains `point`.
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Returns the corner with the smallest coordinates.
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the corner with the largest coordinates.
    pub fn max_point(self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Returns the horizontal extent.
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the vertical extent.
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point.
    pub fn center(self) -> Point {
        self.min_point().midpoint(self.max_point())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(-250.0, 0.0).midpoint(Point::new(250.0, -400.0));
        assert_approx_eq!(f32, mid.x(), 0.0);
        assert_approx_eq!(f32, mid.y(), -200.0);
    }

    #[test]
    fn test_bounds_enclosing() {
        let bounds = Bounds::enclosing([
            Point::new(-125.0, 0.0),
            Point::new(125.0, 0.0),
            Point::new(0.0, -200.0),
        ])
        .unwrap();

        assert_approx_eq!(f32, bounds.width(), 250.0);
        assert_approx_eq!(f32, bounds.height(), 200.0);
        assert_eq!(bounds.min_point(), Point::new(-125.0, -200.0));
        assert_eq!(bounds.max_point(), Point::new(125.0, 0.0));
        assert_eq!(bounds.center(), Point::new(0.0, -100.0));
    }

    #[test]
    fn test_bounds_enclosing_empty() {
        assert!(Bounds::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bounds_single_point_is_degenerate() {
        let bounds = Bounds::from_point(Point::new(3.0, 4.0));
        assert_approx_eq!(f32, bounds.width(), 0.0);
        assert_approx_eq!(f32, bounds.height(), 0.0);
    }
}
