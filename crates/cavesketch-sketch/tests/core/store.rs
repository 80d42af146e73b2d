use cavesketch_core::{Colour, Point, StationId};
use cavesketch_settings::SketchSettings;
use cavesketch_sketch::{
    CrossSection, Detail, DetailGeometry, DetailKind, PathDetail, Sketch, SketchError, Symbol,
};

#[test]
fn test_new_sketch_is_empty_and_saved() {
    let sketch = Sketch::new();
    assert!(sketch.is_empty());
    assert!(sketch.is_saved());
    assert!(!sketch.has_active_path());
    assert_eq!(sketch.bounding_box(), None);
    assert_eq!(sketch.active_colour(), Colour::Black);
}

#[test]
fn test_from_settings_uses_default_colour() {
    let settings = SketchSettings {
        default_colour: Colour::Brown,
        ..Default::default()
    };
    let mut sketch = Sketch::from_settings(&settings).unwrap();
    let id = sketch.add_text(Point::new(1.0, 1.0), "Chamber", 2.0);
    assert_eq!(sketch.get(id).unwrap().detail.colour(), Colour::Brown);
}

#[test]
fn test_from_settings_uses_default_sizes() {
    let settings = SketchSettings {
        default_symbol_size: 2.5,
        default_text_size: 0.75,
        ..Default::default()
    };
    let mut sketch = Sketch::from_settings(&settings).unwrap();
    assert_eq!(sketch.default_symbol_size(), 2.5);
    assert_eq!(sketch.default_text_size(), 0.75);

    let symbol = sketch.add_symbol_with_default_size(Point::ORIGIN, Symbol::Column);
    let text = sketch.add_text_with_default_size(Point::new(1.0, 0.0), "Sump");
    assert_eq!(sketch.get(symbol).unwrap().detail.as_symbol().unwrap().size, 2.5);
    assert_eq!(sketch.get(text).unwrap().detail.as_text().unwrap().size, 0.75);

    let copy = sketch.translated_copy(Point::new(1.0, 1.0));
    assert_eq!(copy.default_symbol_size(), 2.5);
}

#[test]
fn test_from_settings_rejects_invalid_settings() {
    for factor in [f64::NAN, f64::INFINITY, -0.1] {
        let settings = SketchSettings {
            simplification_factor: factor,
            ..Default::default()
        };
        assert!(matches!(
            Sketch::from_settings(&settings),
            Err(SketchError::InvalidSettings(_))
        ));
    }

    let settings = SketchSettings {
        default_text_size: 0.0,
        ..Default::default()
    };
    assert!(Sketch::from_settings(&settings).is_err());
}

#[test]
fn test_add_details_route_to_collections() {
    let mut sketch = Sketch::new();
    sketch.set_active_colour(Colour::Red);

    let symbol = sketch.add_symbol(Point::new(1.0, 2.0), Symbol::Stalagmite, 1.5);
    let text = sketch.add_text(Point::new(3.0, 4.0), "Duck", 1.0);
    let station = StationId::new();
    let section = sketch.add_cross_section(CrossSection::new(station, 90.0), Point::new(5.0, 6.0));

    assert_eq!(sketch.len(), 3);
    assert_eq!(sketch.symbol_details().count(), 1);
    assert_eq!(sketch.text_details().count(), 1);
    assert_eq!(sketch.cross_section_details().count(), 1);
    assert_eq!(sketch.path_details().count(), 0);

    let symbol = sketch.get(symbol).unwrap();
    assert_eq!(symbol.kind(), DetailKind::Symbol);
    assert_eq!(symbol.detail.colour(), Colour::Red);
    assert_eq!(symbol.detail.as_symbol().unwrap().size, 1.5);

    assert_eq!(sketch.get(text).unwrap().detail.as_text().unwrap().text, "Duck");
    // Cross-sections carry no ink
    assert_eq!(sketch.get(section).unwrap().detail.colour(), Colour::None);

    assert!(!sketch.is_saved());
    assert_eq!(sketch.history().undo_depth(), 3);
}

#[test]
fn test_draw_path_lifecycle() {
    let mut sketch = Sketch::new();
    let id = sketch.start_path(Point::new(0.0, 0.0)).unwrap();
    assert!(sketch.has_active_path());
    assert_eq!(sketch.active_path_id(), Some(id));

    for i in 1..=10 {
        sketch.append_point(Point::new(i as f64, 0.0)).unwrap();
    }
    assert_eq!(sketch.active_path().unwrap().len(), 11);
    // Recorded when started, not when finished
    assert_eq!(sketch.history().undo_depth(), 1);

    let finished = sketch.finish_path().unwrap();
    assert_eq!(finished, id);
    assert!(!sketch.has_active_path());
    assert_eq!(sketch.history().undo_depth(), 1);

    // Collinear points are simplified away
    let path = sketch.get(id).unwrap().detail.as_path().unwrap();
    assert_eq!(path.points(), &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
}

#[test]
fn test_path_preconditions_are_reported() {
    let mut sketch = Sketch::new();
    assert_eq!(
        sketch.append_point(Point::new(1.0, 1.0)),
        Err(SketchError::NoActivePath)
    );
    assert_eq!(sketch.finish_path(), Err(SketchError::NoActivePath));

    sketch.start_path(Point::ORIGIN).unwrap();
    assert_eq!(
        sketch.start_path(Point::new(2.0, 2.0)),
        Err(SketchError::PathAlreadyActive)
    );
    assert_eq!(sketch.path_details().count(), 1);
}

#[test]
fn test_path_uses_active_colour_at_start() {
    let mut sketch = Sketch::new();
    sketch.set_active_colour(Colour::Green);
    let id = sketch.start_path(Point::ORIGIN).unwrap();
    sketch.set_active_colour(Colour::Blue);
    sketch.finish_path().unwrap();
    assert_eq!(sketch.get(id).unwrap().detail.colour(), Colour::Green);
}

#[test]
fn test_delete_detail_with_replacements() {
    let mut sketch = Sketch::new();
    let original = sketch.add_detail(Detail::Path(
        PathDetail::from_points(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            Colour::Black,
        )
        .unwrap(),
    ));

    let halves = vec![
        Detail::Path(
            PathDetail::from_points(vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)], Colour::Black)
                .unwrap(),
        ),
        Detail::Path(
            PathDetail::from_points(vec![Point::new(5.0, 0.0), Point::new(10.0, 0.0)], Colour::Black)
                .unwrap(),
        ),
    ];
    let ids = sketch.delete_detail(original, halves);

    assert_eq!(ids.len(), 2);
    assert!(sketch.get(original).is_none());
    assert!(ids.iter().all(|id| sketch.get(*id).is_some()));
    assert_eq!(sketch.path_details().count(), 2);
    assert!(sketch.history().entries().last().unwrap().is_tombstone());
}

#[test]
fn test_delete_missing_detail_still_recorded() {
    let mut sketch = Sketch::new();
    let id = sketch.add_symbol(Point::ORIGIN, Symbol::Boulders, 1.0);
    sketch.delete_detail(id, vec![]);
    assert!(sketch.is_empty());

    // Deleting again touches no collection but is logged
    sketch.delete_detail(id, vec![]);
    assert_eq!(sketch.history().undo_depth(), 3);
    assert!(sketch.is_empty());

    assert!(sketch.undo());
    assert!(sketch.is_empty());
    assert!(sketch.undo());
    assert!(sketch.get(id).is_some());
}

#[test]
fn test_deleting_active_path_ends_it() {
    let mut sketch = Sketch::new();
    let id = sketch.start_path(Point::ORIGIN).unwrap();
    sketch.delete_detail(id, vec![]);
    assert!(!sketch.has_active_path());
    assert_eq!(sketch.finish_path(), Err(SketchError::NoActivePath));
    assert!(sketch.start_path(Point::new(1.0, 1.0)).is_ok());
}

#[test]
fn test_get_cross_section_detail_by_station() {
    let mut sketch = Sketch::new();
    let a = StationId::new();
    let b = StationId::new();
    let missing = StationId::new();

    sketch.add_cross_section(CrossSection::new(a, 0.0), Point::new(1.0, 1.0));
    let b_id = sketch.add_cross_section(CrossSection::new(b, 45.0), Point::new(2.0, 2.0));

    let found = sketch.get_cross_section_detail(b).unwrap();
    assert_eq!(found.id, b_id);
    assert_eq!(found.detail.as_cross_section().unwrap().cross_section.angle, 45.0);
    assert!(sketch.get_cross_section_detail(missing).is_none());
}

#[test]
fn test_set_saved() {
    let mut sketch = Sketch::new();
    sketch.add_symbol(Point::ORIGIN, Symbol::Sand, 1.0);
    assert!(!sketch.is_saved());
    sketch.set_saved(true);
    assert!(sketch.is_saved());
    sketch.undo();
    assert!(!sketch.is_saved());
}
