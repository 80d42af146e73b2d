//! # CaveSketch Sketch
//!
//! In-memory document model for a cave-survey sketch drawn over a plan or
//! elevation: freehand paths, map symbols, text labels and cross-section
//! markers, with linear undo/redo and proximity queries for the editor.
//!
//! ## Architecture
//!
//! ```text
//! Sketch (document)
//!   ├── DetailStore (paths, symbols, texts, cross-sections)
//!   ├── active path (stroke being drawn, not yet queryable)
//!   ├── History (done / undone stacks of Insert and Delete entries)
//!   └── BoundingBox (grown on insert, rebuilt on removal)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cavesketch_core::Point;
//! use cavesketch_sketch::Sketch;
//!
//! let mut sketch = Sketch::new();
//! sketch.start_path(Point::new(0.0, 0.0))?;
//! sketch.append_point(Point::new(5.0, 5.0))?;
//! sketch.finish_path()?;
//!
//! let snap = sketch.find_eligible_snap_point_within(Point::new(0.5, 0.5), 1.0);
//! assert_eq!(snap, Some(Point::new(0.0, 0.0)));
//!
//! sketch.undo();
//! assert!(sketch.is_empty());
//! # Ok::<(), cavesketch_sketch::SketchError>(())
//! ```

pub mod bounds;
pub mod detail;
pub mod error;
pub mod history;
pub mod sketch;

pub use bounds::BoundingBox;
pub use detail::{
    CrossSection, CrossSectionDetail, Detail, DetailGeometry, DetailId, DetailKind, PathDetail,
    SketchObject, Symbol, SymbolDetail, TextDetail,
};
pub use error::{SketchError, SketchResult};
pub use history::{Deleted, History, HistoryEntry, Inserted};
pub use sketch::{DetailStore, Sketch};
