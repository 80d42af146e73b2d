use cavesketch_core::{Colour, Point, Rect};
use serde::{Deserialize, Serialize};

use super::DetailGeometry;

/// A text label anchored at a single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDetail {
    pub position: Point,
    pub text: String,
    pub colour: Colour,
    pub size: f64,
}

impl TextDetail {
    pub fn new(position: Point, text: impl Into<String>, colour: Colour, size: f64) -> Self {
        Self {
            position,
            text: text.into(),
            colour,
            size,
        }
    }
}

impl DetailGeometry for TextDetail {
    // Labels are hit-tested and bounded by their anchor only.
    fn bounds(&self) -> Rect {
        Rect::from_point(self.position)
    }

    fn distance_from(&self, point: Point) -> f64 {
        self.position.distance_to(&point)
    }

    fn translated(&self, offset: Point) -> Self {
        Self {
            position: self.position.translated(offset),
            ..self.clone()
        }
    }

    fn colour(&self) -> Colour {
        self.colour
    }
}
