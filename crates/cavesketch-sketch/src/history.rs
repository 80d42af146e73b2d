//! Undo/redo history of structural edits.
//!
//! Every entry owns the details that are off the sketch because of it: an
//! undone insertion holds the detail it retracted, an applied deletion holds
//! the deleted detail, and an undone deletion holds its replacements. A
//! detail is therefore always owned by exactly one of the sketch collections
//! or a history entry, and dropping an entry drops whatever it detached.

use crate::detail::{DetailId, SketchObject};

/// A detail was added to the sketch.
#[derive(Debug, Clone, PartialEq)]
pub struct Inserted {
    pub id: DetailId,
    /// Position in its collection, used to restore it in place
    pub index: usize,
    pub object: Option<SketchObject>, // None while on the sketch, Some when undone
    /// Set while undone if the detail was the path being drawn
    pub was_active: bool,
}

impl Inserted {
    pub fn new(id: DetailId, index: usize) -> Self {
        Self {
            id,
            index,
            object: None,
            was_active: false,
        }
    }
}

/// A detail was deleted, possibly replaced by others (e.g. a path split in two).
#[derive(Debug, Clone, PartialEq)]
pub struct Deleted {
    pub id: DetailId,
    /// Position the deleted detail had in its collection
    pub index: usize,
    pub object: Option<SketchObject>, // Some while applied, None when undone
    pub replacements: Vec<DetailId>,
    pub detached_replacements: Vec<SketchObject>, // filled only while undone
    /// The deleted detail was the path being drawn
    pub was_active: bool,
}

impl Deleted {
    pub fn new(
        id: DetailId,
        index: usize,
        object: Option<SketchObject>,
        replacements: Vec<DetailId>,
    ) -> Self {
        Self {
            id,
            index,
            object,
            replacements,
            detached_replacements: Vec::new(),
            was_active: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEntry {
    Insert(Inserted),
    Delete(Deleted),
}

impl HistoryEntry {
    /// Id of the detail the entry was recorded for.
    pub fn id(&self) -> DetailId {
        match self {
            HistoryEntry::Insert(entry) => entry.id,
            HistoryEntry::Delete(entry) => entry.id,
        }
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, HistoryEntry::Delete(_))
    }

    /// Returns the name of the edit for display.
    pub fn name(&self) -> &str {
        match self {
            HistoryEntry::Insert(_) => "Add Detail",
            HistoryEntry::Delete(entry) if entry.replacements.is_empty() => "Delete Detail",
            HistoryEntry::Delete(_) => "Replace Detail",
        }
    }
}

/// Linear undo/redo stacks.
#[derive(Debug, Clone, Default)]
pub struct History {
    done: Vec<HistoryEntry>,
    undone: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new edit. Anything that could have been redone is discarded.
    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.undone.clear();
        self.done.push(entry);
    }

    pub(crate) fn pop_done(&mut self) -> Option<HistoryEntry> {
        self.done.pop()
    }

    pub(crate) fn pop_undone(&mut self) -> Option<HistoryEntry> {
        self.undone.pop()
    }

    pub(crate) fn push_done(&mut self, entry: HistoryEntry) {
        self.done.push(entry);
    }

    pub(crate) fn push_undone(&mut self, entry: HistoryEntry) {
        self.undone.push(entry);
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.done.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.undone.len()
    }

    /// Applied edits, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.done
    }

    /// Undone edits, most recently undone last.
    pub fn undone_entries(&self) -> &[HistoryEntry] {
        &self.undone
    }

    /// Marks deletions of `id` as deletions of a finished path.
    pub(crate) fn mark_finished(&mut self, id: DetailId) {
        for entry in self.done.iter_mut().chain(self.undone.iter_mut()) {
            if let HistoryEntry::Delete(cmd) = entry {
                if cmd.id == id {
                    cmd.was_active = false;
                }
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}
