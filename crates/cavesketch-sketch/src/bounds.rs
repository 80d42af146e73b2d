//! Incrementally maintained bounding box over the visible details.
//!
//! The tracker keeps no per-detail history, so it can only grow. Shrinking
//! after a removal is done by resetting and growing over every remaining
//! detail (see `Sketch::recalculate_bounding_box`).

use cavesketch_core::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    rect: Option<Rect>,
}

impl BoundingBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tracker to the empty state.
    pub fn reset(&mut self) {
        self.rect = None;
    }

    /// Expands the box to include `rect`.
    pub fn grow(&mut self, rect: &Rect) {
        self.rect = Some(match self.rect {
            Some(current) => current.union(rect),
            None => *rect,
        });
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }
}
