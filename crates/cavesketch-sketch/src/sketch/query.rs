//! Proximity queries over the visible details.
//!
//! Both queries are linear scans; sketches hold tens to a few hundred
//! details. On equal distances the first detail in collection order wins.

use cavesketch_core::Point;
use tracing::trace;

use super::Sketch;
use crate::detail::{DetailGeometry, DetailKind, SketchObject};

impl Sketch {
    /// Closest path endpoint strictly within `delta` of `point`.
    ///
    /// Only the first and last point of each finished path are snap targets;
    /// interior points never are, and the path being drawn is ignored.
    pub fn find_eligible_snap_point_within(&self, point: Point, delta: f64) -> Option<Point> {
        let mut closest = None;
        let mut min_distance = f64::MAX;

        let paths = self
            .store
            .of_kind(DetailKind::Path)
            .iter()
            .filter(|o| Some(o.id) != self.active_path)
            .filter_map(|o| o.detail.as_path());

        for path in paths {
            for endpoint in [path.start(), path.end()] {
                let distance = point.distance_to(&endpoint);
                if distance < delta && distance < min_distance {
                    closest = Some(endpoint);
                    min_distance = distance;
                }
            }
        }

        trace!(?point, delta, ?closest, "snap query");
        closest
    }

    /// Visible detail nearest to `point`, if one lies strictly within `delta`.
    pub fn find_nearest_detail_within(&self, point: Point, delta: f64) -> Option<&SketchObject> {
        let mut closest = None;
        let mut min_distance = f64::MAX;

        for object in self.visible_details() {
            let distance = object.detail.distance_from(point);
            if distance < delta && distance < min_distance {
                closest = Some(object);
                min_distance = distance;
            }
        }

        trace!(?point, delta, found = ?closest.map(|o: &SketchObject| o.id), "nearest query");
        closest
    }
}
