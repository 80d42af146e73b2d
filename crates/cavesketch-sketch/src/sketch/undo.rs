//! Undo and redo of recorded edits.

use tracing::{debug, warn};

use super::Sketch;
use crate::detail::{DetailGeometry, DetailId};
use crate::history::HistoryEntry;

impl Sketch {
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Reverts the most recent edit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(mut entry) = self.history.pop_done() else {
            return false;
        };

        match &mut entry {
            HistoryEntry::Insert(cmd) => {
                cmd.was_active = self.active_path == Some(cmd.id);
                match self.detach(cmd.id) {
                    Some((index, object)) => {
                        cmd.index = index;
                        cmd.object = Some(object);
                    }
                    None => warn!(id = %cmd.id, "undo: added detail is no longer on the sketch"),
                }
            }
            HistoryEntry::Delete(cmd) => {
                if let Some(object) = cmd.object.take() {
                    self.store.insert_at(cmd.index, object);
                    if cmd.was_active {
                        self.resume_drawing(cmd.id);
                    }
                }
                for id in &cmd.replacements {
                    match self.detach(*id) {
                        Some((_, object)) => cmd.detached_replacements.push(object),
                        None => warn!(%id, "undo: replacement is no longer on the sketch"),
                    }
                }
            }
        }
        self.recalculate_bounding_box();

        debug!(id = %entry.id(), name = entry.name(), "undo");
        self.history.push_undone(entry);
        self.saved = false;
        true
    }

    /// Re-applies the most recently undone edit. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(mut entry) = self.history.pop_undone() else {
            return false;
        };

        match &mut entry {
            HistoryEntry::Insert(cmd) => {
                if let Some(object) = cmd.object.take() {
                    let bounds = object.detail.bounds();
                    self.store.insert_at(cmd.index, object);
                    let drawing =
                        std::mem::take(&mut cmd.was_active) && self.resume_drawing(cmd.id);
                    if !drawing {
                        self.bounding_box.grow(&bounds);
                    }
                }
            }
            HistoryEntry::Delete(cmd) => {
                if let Some((index, object)) = self.detach(cmd.id) {
                    cmd.index = index;
                    cmd.object = Some(object);
                }
                for object in cmd.detached_replacements.drain(..) {
                    self.store.insert(object);
                }
                self.recalculate_bounding_box();
            }
        }

        debug!(id = %entry.id(), name = entry.name(), "redo");
        self.history.push_done(entry);
        self.saved = false;
        true
    }

    /// Makes a restored path the one being drawn again. Returns `false` if
    /// another path already holds the slot.
    fn resume_drawing(&mut self, id: DetailId) -> bool {
        if self.active_path.is_some() {
            warn!(%id, "another path is being drawn, restoring as finished");
            return false;
        }
        self.active_path = Some(id);
        true
    }
}
