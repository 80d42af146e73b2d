//! The sketch document: details, history and bounding box.

mod query;
mod store;
mod undo;

pub use store::DetailStore;

use cavesketch_core::{simplification_epsilon, try_simplify, Colour, Point, Rect, StationId};
use cavesketch_settings::SketchSettings;
use tracing::{debug, warn};

use crate::bounds::BoundingBox;
use crate::detail::{
    CrossSection, CrossSectionDetail, Detail, DetailGeometry, DetailId, DetailKind, PathDetail,
    SketchObject, Symbol, SymbolDetail, TextDetail,
};
use crate::error::{SketchError, SketchResult};
use crate::history::{Deleted, History, HistoryEntry, Inserted};

/// A plan or elevation sketch being edited.
///
/// Owns the visible details, the path currently being drawn (if any), the
/// undo/redo history and a bounding box over the visible details. The path
/// being drawn sits in the path collection from the moment it is started but
/// stays out of queries and out of the bounding box until it is finished.
#[derive(Debug, Clone)]
pub struct Sketch {
    store: DetailStore,
    history: History,
    bounding_box: BoundingBox,
    active_path: Option<DetailId>,
    active_colour: Colour,
    default_symbol_size: f64,
    default_text_size: f64,
    simplification_factor: f64,
    next_id: u64,
    saved: bool,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch {
    /// Creates an empty sketch with default settings.
    pub fn new() -> Self {
        Self::with_settings(&SketchSettings::default())
    }

    /// Creates an empty sketch from user settings, rejecting invalid ones.
    pub fn from_settings(settings: &SketchSettings) -> SketchResult<Self> {
        settings
            .validate()
            .map_err(|e| SketchError::InvalidSettings(e.to_string()))?;
        Ok(Self::with_settings(settings))
    }

    fn with_settings(settings: &SketchSettings) -> Self {
        Self {
            store: DetailStore::new(),
            history: History::new(),
            bounding_box: BoundingBox::new(),
            active_path: None,
            active_colour: settings.default_colour,
            default_symbol_size: settings.default_symbol_size,
            default_text_size: settings.default_text_size,
            simplification_factor: settings.simplification_factor,
            next_id: 1,
            saved: true,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn set_saved(&mut self, saved: bool) {
        self.saved = saved;
    }

    pub fn active_colour(&self) -> Colour {
        self.active_colour
    }

    pub fn set_active_colour(&mut self, colour: Colour) {
        self.active_colour = colour;
    }

    pub fn default_symbol_size(&self) -> f64 {
        self.default_symbol_size
    }

    pub fn default_text_size(&self) -> f64 {
        self.default_text_size
    }

    fn generate_id(&mut self) -> DetailId {
        let id = DetailId(self.next_id);
        self.next_id += 1;
        id
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.saved = false;
        self.history.push(entry);
    }

    // ============== Paths ==============

    /// Begins drawing a new path at `start` in the active colour.
    ///
    /// The path is recorded in the history straight away, so undoing right
    /// after drawing retracts the whole stroke.
    pub fn start_path(&mut self, start: Point) -> SketchResult<DetailId> {
        if self.active_path.is_some() {
            return Err(SketchError::PathAlreadyActive);
        }

        let id = self.generate_id();
        let path = PathDetail::new(start, self.active_colour);
        let index = self.store.insert(SketchObject::new(id, Detail::Path(path)));
        self.active_path = Some(id);
        self.record(HistoryEntry::Insert(Inserted::new(id, index)));
        debug!(%id, "started path");
        Ok(id)
    }

    /// Extends the path being drawn.
    pub fn append_point(&mut self, point: Point) -> SketchResult<()> {
        let path = self.active_path_mut().ok_or(SketchError::NoActivePath)?;
        path.push(point);
        Ok(())
    }

    /// Simplifies the path being drawn and makes it part of the visible set.
    pub fn finish_path(&mut self) -> SketchResult<DetailId> {
        let factor = self.simplification_factor;
        let id = self.active_path.ok_or(SketchError::NoActivePath)?;
        let path = self.active_path_mut().ok_or(SketchError::NoActivePath)?;

        let epsilon = simplification_epsilon(path.points(), factor);
        let simplified = try_simplify(path.points(), epsilon)?;
        let (before, after) = (path.len(), simplified.len());
        path.set_points(simplified)?;
        let bounds = path.bounds();

        self.active_path = None;
        self.history.mark_finished(id);
        self.bounding_box.grow(&bounds);
        debug!(%id, before, after, epsilon, "finished path");
        Ok(id)
    }

    pub fn active_path_id(&self) -> Option<DetailId> {
        self.active_path
    }

    pub fn has_active_path(&self) -> bool {
        self.active_path.is_some()
    }

    /// The path currently being drawn.
    pub fn active_path(&self) -> Option<&PathDetail> {
        let id = self.active_path?;
        self.store.get(id)?.detail.as_path()
    }

    fn active_path_mut(&mut self) -> Option<&mut PathDetail> {
        let id = self.active_path?;
        match &mut self.store.get_mut(id)?.detail {
            Detail::Path(path) => Some(path),
            _ => None,
        }
    }

    // ============== Other details ==============

    pub fn add_symbol(&mut self, position: Point, symbol: Symbol, size: f64) -> DetailId {
        let detail = SymbolDetail::new(position, symbol, self.active_colour, size);
        self.add_detail(Detail::Symbol(detail))
    }

    pub fn add_text(&mut self, position: Point, text: impl Into<String>, size: f64) -> DetailId {
        let detail = TextDetail::new(position, text, self.active_colour, size);
        self.add_detail(Detail::Text(detail))
    }

    /// Adds a symbol at the size configured for new symbols.
    pub fn add_symbol_with_default_size(&mut self, position: Point, symbol: Symbol) -> DetailId {
        self.add_symbol(position, symbol, self.default_symbol_size)
    }

    /// Adds a text label at the size configured for new labels.
    pub fn add_text_with_default_size(
        &mut self,
        position: Point,
        text: impl Into<String>,
    ) -> DetailId {
        self.add_text(position, text, self.default_text_size)
    }

    pub fn add_cross_section(&mut self, cross_section: CrossSection, position: Point) -> DetailId {
        let detail = CrossSectionDetail::new(cross_section, position);
        self.add_detail(Detail::CrossSection(detail))
    }

    /// Adds a ready-made detail to its collection and records it.
    pub fn add_detail(&mut self, detail: Detail) -> DetailId {
        let id = self.generate_id();
        let kind = detail.kind();
        self.bounding_box.grow(&detail.bounds());
        let index = self.store.insert(SketchObject::new(id, detail));
        self.record(HistoryEntry::Insert(Inserted::new(id, index)));
        debug!(%id, %kind, "added detail");
        id
    }

    /// Deletes a detail, putting `replacements` in its place.
    ///
    /// Splitting or trimming a path is a deletion of the original with the
    /// pieces as replacements; undo restores the original and retracts the
    /// pieces. Returns the ids given to the replacements.
    ///
    /// Deleting an id that is not on the sketch changes no collection but is
    /// still recorded, so the history stays a faithful log of edit calls.
    pub fn delete_detail(&mut self, id: DetailId, replacements: Vec<Detail>) -> Vec<DetailId> {
        let was_active = self.active_path == Some(id);
        let removed = self.detach(id);
        if removed.is_none() {
            warn!(%id, "deleting detail that is not on the sketch");
        }

        let replacement_ids: Vec<DetailId> = replacements
            .into_iter()
            .map(|detail| {
                let new_id = self.generate_id();
                self.store.insert(SketchObject::new(new_id, detail));
                new_id
            })
            .collect();

        self.recalculate_bounding_box();

        let (index, object) = match removed {
            Some((index, object)) => (index, Some(object)),
            None => (0, None),
        };
        debug!(%id, replacements = replacement_ids.len(), "deleted detail");
        self.record(HistoryEntry::Delete(Deleted {
            was_active,
            ..Deleted::new(id, index, object, replacement_ids.clone())
        }));
        replacement_ids
    }

    /// Takes a detail off the sketch, ending the path in progress if it was that one.
    fn detach(&mut self, id: DetailId) -> Option<(usize, SketchObject)> {
        if self.active_path == Some(id) {
            self.active_path = None;
        }
        self.store.remove(id)
    }

    // ============== Lookup ==============

    /// The cross-section marker placed for `station`, if any.
    pub fn get_cross_section_detail(&self, station: StationId) -> Option<&SketchObject> {
        self.store
            .of_kind(DetailKind::CrossSection)
            .iter()
            .find(|o| {
                o.detail
                    .as_cross_section()
                    .is_some_and(|c| c.station() == station)
            })
    }

    pub fn get(&self, id: DetailId) -> Option<&SketchObject> {
        self.store.get(id)
    }

    /// Number of details on the sketch, including a path being drawn.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn path_details(&self) -> impl Iterator<Item = &SketchObject> {
        self.store.of_kind(DetailKind::Path).iter()
    }

    pub fn symbol_details(&self) -> impl Iterator<Item = &SketchObject> {
        self.store.of_kind(DetailKind::Symbol).iter()
    }

    pub fn text_details(&self) -> impl Iterator<Item = &SketchObject> {
        self.store.of_kind(DetailKind::Text).iter()
    }

    pub fn cross_section_details(&self) -> impl Iterator<Item = &SketchObject> {
        self.store.of_kind(DetailKind::CrossSection).iter()
    }

    /// Every detail on the sketch, including a path being drawn.
    pub fn details(&self) -> impl Iterator<Item = &SketchObject> {
        self.store.iter()
    }

    /// Details that are drawn and queryable: everything but the path being drawn.
    pub fn visible_details(&self) -> impl Iterator<Item = &SketchObject> {
        let active = self.active_path;
        self.store.iter().filter(move |o| Some(o.id) != active)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // ============== Bounding box ==============

    pub fn bounding_box(&self) -> Option<Rect> {
        self.bounding_box.rect()
    }

    /// Rebuilds the bounding box from every visible detail.
    pub fn recalculate_bounding_box(&mut self) {
        self.bounding_box.reset();
        let active = self.active_path;
        for object in self.store.iter().filter(|o| Some(o.id) != active) {
            self.bounding_box.grow(&object.detail.bounds());
        }
    }

    // ============== Bulk load ==============

    pub fn set_path_details(&mut self, details: Vec<PathDetail>) {
        self.load_kind(DetailKind::Path, details.into_iter().map(Detail::Path));
    }

    pub fn set_symbol_details(&mut self, details: Vec<SymbolDetail>) {
        self.load_kind(DetailKind::Symbol, details.into_iter().map(Detail::Symbol));
    }

    pub fn set_text_details(&mut self, details: Vec<TextDetail>) {
        self.load_kind(DetailKind::Text, details.into_iter().map(Detail::Text));
    }

    pub fn set_cross_section_details(&mut self, details: Vec<CrossSectionDetail>) {
        self.load_kind(
            DetailKind::CrossSection,
            details.into_iter().map(Detail::CrossSection),
        );
    }

    /// Replaces one collection wholesale, as done when a sketch is loaded.
    ///
    /// Undo/redo state is not carried across a load, so both history stacks
    /// and any path in progress are dropped.
    fn load_kind(&mut self, kind: DetailKind, details: impl Iterator<Item = Detail>) {
        let objects: Vec<SketchObject> = details
            .map(|detail| SketchObject::new(self.generate_id(), detail))
            .collect();
        let count = objects.len();

        if let Some(id) = self.active_path.take() {
            self.store.remove(id);
        }
        self.store.replace_kind(kind, objects);
        self.history.clear();
        self.recalculate_bounding_box();
        debug!(%kind, count, "loaded details");
    }

    /// A new sketch holding every visible detail shifted by `offset`.
    pub fn translated_copy(&self, offset: Point) -> Sketch {
        let mut sketch = Sketch {
            active_colour: self.active_colour,
            default_symbol_size: self.default_symbol_size,
            default_text_size: self.default_text_size,
            simplification_factor: self.simplification_factor,
            ..Sketch::new()
        };

        let translated: Vec<Detail> = self
            .visible_details()
            .map(|o| o.detail.translated(offset))
            .collect();

        let mut paths = Vec::new();
        let mut symbols = Vec::new();
        let mut texts = Vec::new();
        let mut cross_sections = Vec::new();
        for detail in translated {
            match detail {
                Detail::Path(d) => paths.push(d),
                Detail::Symbol(d) => symbols.push(d),
                Detail::Text(d) => texts.push(d),
                Detail::CrossSection(d) => cross_sections.push(d),
            }
        }

        sketch.set_path_details(paths);
        sketch.set_symbol_details(symbols);
        sketch.set_text_details(texts);
        sketch.set_cross_section_details(cross_sections);
        sketch
    }
}
