//! Planar geometry helpers shared by hit-testing and the robot overlay.

use serde::{Deserialize, Serialize};

/// A point in canvas pixel space (X right, Y down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Dot product, treating both points as vectors from the origin.
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Returns the point on segment `p1`-`p2` closest to `p`.
///
/// Projects `p` onto the segment and clamps the projection factor to
/// `[0, 1]`. A zero-length segment returns its shared endpoint.
pub fn closest_point_on_segment(p1: Point, p2: Point, p: Point) -> Point {
    let v = p2 - p1;
    let length_sq = v.dot(&v);
    if length_sq <= f64::EPSILON {
        return p1;
    }
    let t = ((p - p1).dot(&v) / length_sq).clamp(0.0, 1.0);
    p1 + v * t
}

/// Distance from `p` to the nearest point of segment `p1`-`p2`.
pub fn distance_to_segment(p1: Point, p2: Point, p: Point) -> f64 {
    closest_point_on_segment(p1, p2, p).distance_to(&p)
}
