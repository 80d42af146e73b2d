//! Type-partitioned detail storage.

use std::collections::HashMap;

use crate::detail::{DetailId, DetailKind, SketchObject};

/// Four insertion-ordered collections, one per detail kind.
///
/// A locator maps every stored id to its kind so removal goes straight to the
/// right collection.
#[derive(Debug, Clone, Default)]
pub struct DetailStore {
    paths: Vec<SketchObject>,
    symbols: Vec<SketchObject>,
    texts: Vec<SketchObject>,
    cross_sections: Vec<SketchObject>,
    locator: HashMap<DetailId, DetailKind>,
}

impl DetailStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locator.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locator.is_empty()
    }

    pub fn contains(&self, id: DetailId) -> bool {
        self.locator.contains_key(&id)
    }

    /// Objects of one kind in insertion order.
    pub fn of_kind(&self, kind: DetailKind) -> &[SketchObject] {
        match kind {
            DetailKind::Path => &self.paths,
            DetailKind::Symbol => &self.symbols,
            DetailKind::Text => &self.texts,
            DetailKind::CrossSection => &self.cross_sections,
        }
    }

    fn collection_mut(&mut self, kind: DetailKind) -> &mut Vec<SketchObject> {
        match kind {
            DetailKind::Path => &mut self.paths,
            DetailKind::Symbol => &mut self.symbols,
            DetailKind::Text => &mut self.texts,
            DetailKind::CrossSection => &mut self.cross_sections,
        }
    }

    /// All objects: paths, then symbols, texts and cross-sections.
    pub fn iter(&self) -> impl Iterator<Item = &SketchObject> {
        self.paths
            .iter()
            .chain(&self.symbols)
            .chain(&self.texts)
            .chain(&self.cross_sections)
    }

    pub fn get(&self, id: DetailId) -> Option<&SketchObject> {
        let kind = *self.locator.get(&id)?;
        self.of_kind(kind).iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: DetailId) -> Option<&mut SketchObject> {
        let kind = *self.locator.get(&id)?;
        self.collection_mut(kind).iter_mut().find(|o| o.id == id)
    }

    /// Appends an object to the end of its collection and returns its position.
    pub fn insert(&mut self, object: SketchObject) -> usize {
        let kind = object.kind();
        self.locator.insert(object.id, kind);
        let collection = self.collection_mut(kind);
        collection.push(object);
        collection.len() - 1
    }

    /// Inserts an object at `index` in its collection, clamped to the end.
    pub fn insert_at(&mut self, index: usize, object: SketchObject) {
        let kind = object.kind();
        self.locator.insert(object.id, kind);
        let collection = self.collection_mut(kind);
        let index = index.min(collection.len());
        collection.insert(index, object);
    }

    /// Removes an object, returning its former position and the object.
    pub fn remove(&mut self, id: DetailId) -> Option<(usize, SketchObject)> {
        let kind = self.locator.remove(&id)?;
        let collection = self.collection_mut(kind);
        let index = collection.iter().position(|o| o.id == id)?;
        Some((index, collection.remove(index)))
    }

    /// Replaces every object of `kind`, returning the previous contents.
    pub fn replace_kind(
        &mut self,
        kind: DetailKind,
        objects: Vec<SketchObject>,
    ) -> Vec<SketchObject> {
        let old = std::mem::take(self.collection_mut(kind));
        for object in &old {
            self.locator.remove(&object.id);
        }
        // Objects of the wrong kind go to their own collection
        let (matching, other): (Vec<_>, Vec<_>) =
            objects.into_iter().partition(|o| o.kind() == kind);
        for object in &matching {
            self.locator.insert(object.id, kind);
        }
        *self.collection_mut(kind) = matching;
        for object in other {
            self.insert(object);
        }
        old
    }
}
