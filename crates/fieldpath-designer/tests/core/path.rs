use fieldpath_core::PathError;
use fieldpath_designer::path::{WaypointPath, HIT_RADIUS};
use fieldpath_designer::viewport::Viewport;
use fieldpath_designer::waypoint::WaypointEdit;
use fieldpath_designer::Point;
use proptest::prelude::*;

#[test]
fn test_adds_keep_insertion_order() {
    let vp = Viewport::default();
    let mut path = WaypointPath::new();
    let positions = [(100.0, 100.0), (500.0, 120.0), (900.0, 900.0), (40.0, 1800.0)];
    let ids: Vec<_> = positions
        .iter()
        .map(|&(x, y)| path.add_waypoint(Point::new(x, y), &vp).unwrap())
        .collect();

    assert_eq!(path.len(), 4);
    for (i, (&(x, y), id)) in positions.iter().zip(&ids).enumerate() {
        assert_eq!(path.waypoints()[i].position(), Point::new(x, y));
        assert_eq!(path.index_of(*id), Some(i));
    }
    assert_eq!(path.origin().map(|wp| wp.id), Some(ids[0]));
}

#[test]
fn test_bulk_remove_takes_every_waypoint_in_radius() {
    let vp = Viewport::default();
    let mut path = WaypointPath::new();
    path.add_waypoint(Point::new(100.0, 100.0), &vp).unwrap();
    path.add_waypoint(Point::new(130.0, 100.0), &vp).unwrap();
    path.add_waypoint(Point::new(400.0, 400.0), &vp).unwrap();

    let removed = path.remove_waypoints_near(Point::new(115.0, 100.0), HIT_RADIUS);
    assert_eq!(removed, 2);
    assert_eq!(path.len(), 1);
    assert_eq!(path.waypoints()[0].position(), Point::new(400.0, 400.0));
}

#[test]
fn test_remove_on_empty_path_still_records_history() {
    let mut path = WaypointPath::new();
    assert_eq!(path.remove_waypoints_near(Point::new(10.0, 10.0), HIT_RADIUS), 0);
    assert!(path.is_empty());
    assert_eq!(path.undo_depth(), 1);
    assert!(path.undo());
    assert!(path.is_empty());
}

#[test]
fn test_clear_is_undoable() {
    let vp = Viewport::default();
    let mut path = WaypointPath::new();
    path.add_waypoint(Point::new(100.0, 100.0), &vp).unwrap();
    path.add_waypoint(Point::new(300.0, 100.0), &vp).unwrap();
    let before = path.waypoints().to_vec();

    path.clear();
    assert!(path.is_empty());
    assert!(path.undo());
    assert_eq!(path.waypoints(), before.as_slice());
}

#[test]
fn test_rejections_leave_history_untouched() {
    let vp = Viewport::default();
    let mut path = WaypointPath::new();
    path.add_waypoint(Point::new(100.0, 100.0), &vp).unwrap();
    let depth = path.undo_depth();

    assert!(matches!(
        path.add_waypoint(Point::new(2010.0, 0.0), &vp),
        Err(PathError::OutOfBounds { .. })
    ));
    assert_eq!(
        path.add_waypoint(Point::new(100.0, 110.0), &vp),
        Err(PathError::NearExisting { index: 0 })
    );
    assert_eq!(
        path.edit_waypoint(5, &WaypointEdit::default().angle(10.0)),
        Err(PathError::UnknownWaypoint { index: 5 })
    );
    assert_eq!(path.undo_depth(), depth);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut path = WaypointPath::new();
    assert!(!path.undo());
    assert!(path.is_empty());
}

fn grid_point() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=199, 0u32..=200)
}

proptest! {
    #[test]
    fn far_apart_adds_all_land_in_order(cells in prop::collection::btree_set(grid_point(), 1..30)) {
        let vp = Viewport::default();
        let mut path = WaypointPath::new();
        // Drop cells that fall inside the hit radius of an earlier one.
        let positions: Vec<Point> = cells
            .iter()
            .map(|&(cx, cy)| Point::new(f64::from(cx) * 10.0, f64::from(cy) * 10.0))
            .fold(Vec::new(), |mut acc: Vec<Point>, p| {
                if acc.iter().all(|q| q.distance_to(&p) >= HIT_RADIUS) {
                    acc.push(p);
                }
                acc
            });

        for p in &positions {
            path.add_waypoint(*p, &vp).unwrap();
        }
        prop_assert_eq!(path.len(), positions.len());
        for (i, p) in positions.iter().enumerate() {
            prop_assert_eq!(path.waypoints()[i].position(), *p);
        }
    }

    #[test]
    fn reflection_is_an_involution(
        cells in prop::collection::vec((grid_point(), 0u32..360), 1..20),
    ) {
        let vp = Viewport::default();
        let mut path = WaypointPath::new();
        for ((cx, cy), angle) in cells {
            let p = Point::new(f64::from(cx) * 10.0, f64::from(cy) * 10.0);
            if path.add_waypoint(p, &vp).is_ok() {
                let last = path.len() - 1;
                path.edit_waypoint(last, &WaypointEdit::default().angle(f64::from(angle))).unwrap();
            }
        }
        let original = path.waypoints().to_vec();

        path.reflect_vertically(&vp).unwrap();
        path.reflect_vertically(&vp).unwrap();
        for (a, b) in original.iter().zip(path.waypoints()) {
            prop_assert_eq!(a.x, b.x);
            prop_assert_eq!(a.angle, b.angle);
        }
    }

    #[test]
    fn undo_is_lifo_inverse(
        ops in prop::collection::vec((0u8..5, grid_point(), 0u32..360), 1..40),
    ) {
        let vp = Viewport::default();
        let mut path = WaypointPath::new();
        let mut states = vec![path.waypoints().to_vec()];

        for (op, (cx, cy), angle) in ops {
            let p = Point::new(f64::from(cx) * 10.0, f64::from(cy) * 10.0);
            match op {
                0 | 1 => {
                    let _ = path.add_waypoint(p, &vp);
                }
                2 => {
                    path.remove_waypoints_near(p, HIT_RADIUS);
                }
                3 => {
                    let _ = path.reflect_vertically(&vp);
                }
                _ => {
                    if !path.is_empty() {
                        let index = angle as usize % path.len();
                        let _ = path.edit_waypoint(index, &WaypointEdit::default().angle(f64::from(angle)));
                    }
                }
            }
            if path.undo_depth() == states.len() {
                states.push(path.waypoints().to_vec());
            }
            prop_assert_eq!(path.undo_depth(), states.len() - 1);
        }

        states.pop();
        while let Some(expected) = states.pop() {
            prop_assert!(path.undo());
            prop_assert_eq!(path.waypoints(), expected.as_slice());
        }
        prop_assert!(!path.undo());
    }
}
