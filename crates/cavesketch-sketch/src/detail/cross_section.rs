use cavesketch_core::{Colour, Point, Rect, StationId};
use serde::{Deserialize, Serialize};

use super::DetailGeometry;

/// Cross-section of the passage taken at a survey station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    pub station: StationId,
    /// Bearing of the section plane in degrees
    pub angle: f64,
}

impl CrossSection {
    pub fn new(station: StationId, angle: f64) -> Self {
        Self { station, angle }
    }
}

/// Marker placing a station's cross-section on the sketch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionDetail {
    pub cross_section: CrossSection,
    pub position: Point,
}

impl CrossSectionDetail {
    pub fn new(cross_section: CrossSection, position: Point) -> Self {
        Self {
            cross_section,
            position,
        }
    }

    pub fn station(&self) -> StationId {
        self.cross_section.station
    }
}

impl DetailGeometry for CrossSectionDetail {
    fn bounds(&self) -> Rect {
        Rect::from_point(self.position)
    }

    fn distance_from(&self, point: Point) -> f64 {
        self.position.distance_to(&point)
    }

    fn translated(&self, offset: Point) -> Self {
        Self {
            cross_section: self.cross_section.clone(),
            position: self.position.translated(offset),
        }
    }

    fn colour(&self) -> Colour {
        Colour::None
    }
}
