//! 2D geometry utilities for sketch details.
//!
//! Coordinates follow the screen convention: y grows downward, so the
//! top-left corner of a rectangle carries the minimum x and y.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

/// Immutable 2D coordinate on the sketch surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns this point shifted by `offset`.
    pub fn translated(&self, offset: Point) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle described by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Degenerate rectangle covering a single point.
    pub fn from_point(point: Point) -> Self {
        Self::new(point, point)
    }

    /// Smallest rectangle containing every point, or `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut rect = Self::from_point(*first);
        for point in rest {
            rect.include_point(*point);
        }
        Some(rect)
    }

    /// Grows the rectangle so it contains `point`.
    pub fn include_point(&mut self, point: Point) {
        self.top_left.x = self.top_left.x.min(point.x);
        self.top_left.y = self.top_left.y.min(point.y);
        self.bottom_right.x = self.bottom_right.x.max(point.x);
        self.bottom_right.y = self.bottom_right.y.max(point.y);
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let mut rect = *self;
        rect.include_point(other.top_left);
        rect.include_point(other.bottom_right);
        rect
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn diagonal(&self) -> f64 {
        self.top_left.distance_to(&self.bottom_right)
    }
}

/// Distance from `p` to the segment `a`-`b`.
///
/// A zero-length segment degrades to the distance between `p` and `a`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let vx = b.x - a.x;
    let vy = b.y - a.y;
    let len_sq = vx * vx + vy * vy;
    if len_sq < 1e-12 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * vx + (p.y - a.y) * vy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * vx, a.y + t * vy))
}

/// Tolerance used when simplifying a freshly drawn path.
///
/// Scales with the size of the stroke so that long sweeping lines lose more
/// jitter than small detailed marks. Returns 0 for paths without extent.
pub fn simplification_epsilon(points: &[Point], factor: f64) -> f64 {
    Rect::from_points(points)
        .map(|rect| rect.diagonal() * factor)
        .unwrap_or(0.0)
}

/// Simplifies a polyline with the Ramer-Douglas-Peucker algorithm.
///
/// The first and last points are always kept. Polylines of two points or
/// fewer, and non-positive tolerances, return the input unchanged.
pub fn simplify(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() <= 2 || epsilon <= 0.0 || !epsilon.is_finite() {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    mark_kept(points, 0, points.len() - 1, epsilon, &mut keep);

    points
        .iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(*point))
        .collect()
}

/// Checked variant of [`simplify`] that rejects empty input and bad tolerances.
pub fn try_simplify(points: &[Point], epsilon: f64) -> GeometryResult<Vec<Point>> {
    if points.is_empty() {
        return Err(GeometryError::EmptyPath);
    }
    if epsilon < 0.0 || !epsilon.is_finite() {
        return Err(GeometryError::InvalidEpsilon(epsilon));
    }
    Ok(simplify(points, epsilon))
}

fn mark_kept(points: &[Point], first: usize, last: usize, epsilon: f64, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }

    let (a, b) = (points[first], points[last]);
    let mut max_distance = 0.0;
    let mut index = first;
    for (i, point) in points.iter().enumerate().take(last).skip(first + 1) {
        let distance = distance_to_segment(*point, a, b);
        if distance > max_distance {
            max_distance = distance;
            index = i;
        }
    }

    if max_distance > epsilon {
        keep[index] = true;
        mark_kept(points, first, index, epsilon, keep);
        mark_kept(points, index, last, epsilon, keep);
    }
}
