//! # CaveSketch Core
//!
//! Core types shared by the sketch document and its settings:
//! 2D geometry utilities (points, rectangles, distances and path
//! simplification), drawing colours and survey station identities.

pub mod colour;
pub mod error;
pub mod geometry;
pub mod station;

pub use colour::Colour;
pub use error::{GeometryError, GeometryResult};
pub use geometry::{
    distance_to_segment, simplification_epsilon, simplify, try_simplify, Point, Rect,
};
pub use station::StationId;
