use cavesketch_core::{Colour, Point, Rect};
use cavesketch_sketch::{Detail, DetailGeometry, PathDetail, Sketch, SketchObject, Symbol};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    Symbol(f64, f64),
    Text(f64, f64),
    Path(Vec<(f64, f64)>),
    StartPath(f64, f64),
    Append(f64, f64),
    Finish,
    Delete(usize),
    Split(usize),
    Undo,
    Redo,
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (coord(), coord()).prop_map(|(x, y)| Edit::Symbol(x, y)),
        (coord(), coord()).prop_map(|(x, y)| Edit::Text(x, y)),
        prop::collection::vec((coord(), coord()), 1..8).prop_map(Edit::Path),
        (coord(), coord()).prop_map(|(x, y)| Edit::StartPath(x, y)),
        (coord(), coord()).prop_map(|(x, y)| Edit::Append(x, y)),
        Just(Edit::Finish),
        any::<usize>().prop_map(Edit::Delete),
        any::<usize>().prop_map(Edit::Split),
        Just(Edit::Undo),
        Just(Edit::Redo),
    ]
}

fn apply(sketch: &mut Sketch, edit: &Edit) {
    match edit {
        Edit::Symbol(x, y) => {
            sketch.add_symbol(Point::new(*x, *y), Symbol::Column, 1.0);
        }
        Edit::Text(x, y) => {
            sketch.add_text(Point::new(*x, *y), "label", 1.0);
        }
        Edit::Path(points) => {
            let mut points = points.iter().map(|p| Point::from(*p));
            if let Some(first) = points.next() {
                if sketch.start_path(first).is_err() {
                    return;
                }
                for point in points {
                    sketch.append_point(point).unwrap();
                }
                sketch.finish_path().unwrap();
            }
        }
        // Strokes drawn a step at a time; misuse errors leave the sketch unchanged
        Edit::StartPath(x, y) => {
            let _ = sketch.start_path(Point::new(*x, *y));
        }
        Edit::Append(x, y) => {
            let _ = sketch.append_point(Point::new(*x, *y));
        }
        Edit::Finish => {
            let _ = sketch.finish_path();
        }
        Edit::Delete(pick) => {
            if let Some(id) = pick_id(sketch, *pick) {
                sketch.delete_detail(id, vec![]);
            }
        }
        Edit::Split(pick) => {
            if let Some(id) = pick_id(sketch, *pick) {
                let bounds = sketch.get(id).map(|o| o.detail.bounds());
                if let Some(bounds) = bounds {
                    let pieces = [bounds.top_left, bounds.bottom_right]
                        .into_iter()
                        .map(|p| Detail::Path(PathDetail::new(p, Colour::Red)))
                        .collect();
                    sketch.delete_detail(id, pieces);
                }
            }
        }
        Edit::Undo => {
            sketch.undo();
        }
        Edit::Redo => {
            sketch.redo();
        }
    }
}

fn pick_id(sketch: &Sketch, pick: usize) -> Option<cavesketch_sketch::DetailId> {
    let ids: Vec<_> = sketch.details().map(|o| o.id).collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids[pick % ids.len()])
    }
}

fn expected_bounds(sketch: &Sketch) -> Option<Rect> {
    sketch
        .visible_details()
        .map(|o| o.detail.bounds())
        .reduce(|a, b| a.union(&b))
}

fn snapshot(sketch: &Sketch) -> Vec<SketchObject> {
    sketch.details().cloned().collect()
}

proptest! {
    #[test]
    fn prop_undo_all_returns_to_empty(edits in prop::collection::vec(edit(), 0..30)) {
        let mut sketch = Sketch::new();
        for e in &edits {
            apply(&mut sketch, e);
        }

        let depth = sketch.history().undo_depth();
        for _ in 0..depth {
            prop_assert!(sketch.undo());
        }
        prop_assert!(!sketch.undo());
        prop_assert!(sketch.is_empty());
        prop_assert_eq!(sketch.bounding_box(), None);
    }

    #[test]
    fn prop_undo_redo_round_trip(edits in prop::collection::vec(edit(), 1..30)) {
        let mut sketch = Sketch::new();
        for e in &edits {
            apply(&mut sketch, e);
        }
        prop_assume!(sketch.can_undo());

        let before = snapshot(&sketch);
        let bbox = sketch.bounding_box();
        let done = sketch.history().entries().to_vec();
        let undone = sketch.history().undone_entries().to_vec();
        let active = sketch.active_path_id();

        sketch.undo();
        sketch.redo();

        prop_assert_eq!(snapshot(&sketch), before);
        prop_assert_eq!(sketch.active_path_id(), active);
        prop_assert_eq!(sketch.bounding_box(), bbox);
        prop_assert_eq!(sketch.history().entries(), done.as_slice());
        prop_assert_eq!(sketch.history().undone_entries(), undone.as_slice());
    }

    #[test]
    fn prop_path_being_drawn_is_never_queried(
        edits in prop::collection::vec(edit(), 0..30),
        x in coord(),
        y in coord(),
    ) {
        let mut sketch = Sketch::new();
        for e in &edits {
            apply(&mut sketch, e);
            if let Some(active) = sketch.active_path_id() {
                let point = Point::new(x, y);
                let nearest = sketch.find_nearest_detail_within(point, f64::MAX).map(|o| o.id);
                prop_assert_ne!(nearest, Some(active));
                prop_assert!(sketch.visible_details().all(|o| o.id != active));
            }
        }
    }

    #[test]
    fn prop_bounding_box_tracks_visible_set(edits in prop::collection::vec(edit(), 0..30)) {
        let mut sketch = Sketch::new();
        for e in &edits {
            apply(&mut sketch, e);
            prop_assert_eq!(sketch.bounding_box(), expected_bounds(&sketch));
        }
    }
}
