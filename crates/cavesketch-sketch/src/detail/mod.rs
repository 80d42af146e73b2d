//! Drawable details of a sketch.
//!
//! Each variant is its own struct implementing [`DetailGeometry`]; the closed
//! [`Detail`] enum dispatches to them and decides which collection of the
//! sketch a detail belongs to.

use cavesketch_core::{Colour, Point, Rect};
use serde::{Deserialize, Serialize};

mod cross_section;
mod path;
mod symbol;
mod text;

pub use cross_section::{CrossSection, CrossSectionDetail};
pub use path::PathDetail;
pub use symbol::{Symbol, SymbolDetail};
pub use text::TextDetail;

/// Geometry every detail variant exposes to the sketch.
pub trait DetailGeometry {
    /// Rectangle enclosing the detail.
    fn bounds(&self) -> Rect;

    /// Distance from `point` to the detail, used by hit-testing.
    fn distance_from(&self, point: Point) -> f64;

    /// Returns a copy of the detail shifted by `offset`.
    fn translated(&self, offset: Point) -> Self
    where
        Self: Sized;

    fn colour(&self) -> Colour;
}

/// Identity of a detail within one sketch.
///
/// Ids are handed out by the sketch in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DetailId(pub u64);

impl std::fmt::Display for DetailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category of a detail; one sketch collection exists per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailKind {
    Path,
    Symbol,
    Text,
    CrossSection,
}

impl DetailKind {
    pub const ALL: [DetailKind; 4] = [
        DetailKind::Path,
        DetailKind::Symbol,
        DetailKind::Text,
        DetailKind::CrossSection,
    ];
}

impl std::fmt::Display for DetailKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::Symbol => write!(f, "symbol"),
            Self::Text => write!(f, "text"),
            Self::CrossSection => write!(f, "cross-section"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Detail {
    Path(PathDetail),
    Symbol(SymbolDetail),
    Text(TextDetail),
    CrossSection(CrossSectionDetail),
}

impl Detail {
    pub fn kind(&self) -> DetailKind {
        match self {
            Detail::Path(_) => DetailKind::Path,
            Detail::Symbol(_) => DetailKind::Symbol,
            Detail::Text(_) => DetailKind::Text,
            Detail::CrossSection(_) => DetailKind::CrossSection,
        }
    }

    pub fn as_path(&self) -> Option<&PathDetail> {
        match self {
            Detail::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&SymbolDetail> {
        match self {
            Detail::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextDetail> {
        match self {
            Detail::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_cross_section(&self) -> Option<&CrossSectionDetail> {
        match self {
            Detail::CrossSection(c) => Some(c),
            _ => None,
        }
    }
}

impl DetailGeometry for Detail {
    fn bounds(&self) -> Rect {
        match self {
            Detail::Path(d) => d.bounds(),
            Detail::Symbol(d) => d.bounds(),
            Detail::Text(d) => d.bounds(),
            Detail::CrossSection(d) => d.bounds(),
        }
    }

    fn distance_from(&self, point: Point) -> f64 {
        match self {
            Detail::Path(d) => d.distance_from(point),
            Detail::Symbol(d) => d.distance_from(point),
            Detail::Text(d) => d.distance_from(point),
            Detail::CrossSection(d) => d.distance_from(point),
        }
    }

    fn translated(&self, offset: Point) -> Self {
        match self {
            Detail::Path(d) => Detail::Path(d.translated(offset)),
            Detail::Symbol(d) => Detail::Symbol(d.translated(offset)),
            Detail::Text(d) => Detail::Text(d.translated(offset)),
            Detail::CrossSection(d) => Detail::CrossSection(d.translated(offset)),
        }
    }

    fn colour(&self) -> Colour {
        match self {
            Detail::Path(d) => d.colour(),
            Detail::Symbol(d) => d.colour(),
            Detail::Text(d) => d.colour(),
            Detail::CrossSection(d) => d.colour(),
        }
    }
}

impl From<PathDetail> for Detail {
    fn from(detail: PathDetail) -> Self {
        Detail::Path(detail)
    }
}

impl From<SymbolDetail> for Detail {
    fn from(detail: SymbolDetail) -> Self {
        Detail::Symbol(detail)
    }
}

impl From<TextDetail> for Detail {
    fn from(detail: TextDetail) -> Self {
        Detail::Text(detail)
    }
}

impl From<CrossSectionDetail> for Detail {
    fn from(detail: CrossSectionDetail) -> Self {
        Detail::CrossSection(detail)
    }
}

/// A detail placed on a sketch together with its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchObject {
    pub id: DetailId,
    pub detail: Detail,
}

impl SketchObject {
    pub fn new(id: DetailId, detail: Detail) -> Self {
        Self { id, detail }
    }

    pub fn kind(&self) -> DetailKind {
        self.detail.kind()
    }
}
