use cavesketch_core::{distance_to_segment, Colour, Point, Rect};
use serde::{Deserialize, Serialize};

use super::DetailGeometry;
use crate::error::{SketchError, SketchResult};

/// Freehand polyline.
///
/// Always holds at least one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPathDetail")]
pub struct PathDetail {
    points: Vec<Point>,
    colour: Colour,
}

#[derive(Deserialize)]
struct RawPathDetail {
    points: Vec<Point>,
    colour: Colour,
}

impl TryFrom<RawPathDetail> for PathDetail {
    type Error = SketchError;

    fn try_from(raw: RawPathDetail) -> SketchResult<Self> {
        PathDetail::from_points(raw.points, raw.colour)
    }
}

impl PathDetail {
    /// Starts a path at a single point.
    pub fn new(start: Point, colour: Colour) -> Self {
        Self {
            points: vec![start],
            colour,
        }
    }

    pub fn from_points(points: Vec<Point>, colour: Colour) -> SketchResult<Self> {
        if points.is_empty() {
            return Err(SketchError::EmptyPath);
        }
        Ok(Self { points, colour })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Paths always hold at least their starting point.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Replaces the geometry; empty input is rejected.
    pub(crate) fn set_points(&mut self, points: Vec<Point>) -> SketchResult<()> {
        if points.is_empty() {
            return Err(SketchError::EmptyPath);
        }
        self.points = points;
        Ok(())
    }
}

impl DetailGeometry for PathDetail {
    fn bounds(&self) -> Rect {
        let mut rect = Rect::from_point(self.start());
        for point in &self.points[1..] {
            rect.include_point(*point);
        }
        rect
    }

    fn distance_from(&self, point: Point) -> f64 {
        if self.points.len() == 1 {
            return point.distance_to(&self.points[0]);
        }
        self.points
            .windows(2)
            .map(|seg| distance_to_segment(point, seg[0], seg[1]))
            .fold(f64::INFINITY, f64::min)
    }

    fn translated(&self, offset: Point) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translated(offset)).collect(),
            colour: self.colour,
        }
    }

    fn colour(&self) -> Colour {
        self.colour
    }
}
