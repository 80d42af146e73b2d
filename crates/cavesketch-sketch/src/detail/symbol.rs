use cavesketch_core::{Colour, Point, Rect};
use serde::{Deserialize, Serialize};

use super::DetailGeometry;

/// Cave-survey map symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Stalactite,
    Stalagmite,
    Column,
    Straws,
    Helictite,
    Crystal,
    Flowstone,
    Boulders,
    Gravel,
    Sand,
    Mud,
    Water,
}

/// A map symbol placed at a single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolDetail {
    pub position: Point,
    pub symbol: Symbol,
    pub colour: Colour,
    pub size: f64,
}

impl SymbolDetail {
    pub fn new(position: Point, symbol: Symbol, colour: Colour, size: f64) -> Self {
        Self {
            position,
            symbol,
            colour,
            size,
        }
    }
}

impl DetailGeometry for SymbolDetail {
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
