use fieldpath_designer::history::UndoHistory;
use fieldpath_designer::{Viewport, WaypointPath};
use fieldpath_designer::Point;

#[test]
fn test_undo_history_creation() {
    let history = UndoHistory::new();
    assert!(!history.can_undo());
    assert_eq!(history.undo_depth(), 0);
}

#[test]
fn test_snapshots_pop_newest_first() {
    let vp = Viewport::default();
    let mut path = WaypointPath::new();
    path.add_waypoint(Point::new(100.0, 100.0), &vp).unwrap();
    path.add_waypoint(Point::new(300.0, 300.0), &vp).unwrap();

    let mut history = UndoHistory::new();
    history.record(&[]);
    history.record(&path.waypoints()[..1]);
    history.record(path.waypoints());
    assert_eq!(history.undo_depth(), 3);

    assert_eq!(history.undo().map(|s| s.len()), Some(2));
    assert_eq!(history.undo().map(|s| s.len()), Some(1));
    assert_eq!(history.undo().map(|s| s.len()), Some(0));
    assert!(history.undo().is_none());
}

#[test]
fn test_no_redo_after_undo() {
    let vp = Viewport::default();
    let mut path = WaypointPath::new();
    path.add_waypoint(Point::new(100.0, 100.0), &vp).unwrap();
    path.add_waypoint(Point::new(300.0, 300.0), &vp).unwrap();

    assert!(path.undo());
    assert_eq!(path.len(), 1);
    // The popped state is gone; a new mutation builds on the restored path.
    path.add_waypoint(Point::new(500.0, 500.0), &vp).unwrap();
    assert_eq!(path.undo_depth(), 2);
    assert!(path.undo());
    assert!(path.undo());
    assert!(path.is_empty());
    assert!(!path.undo());
}

#[test]
fn test_clear_history() {
    let mut history = UndoHistory::new();
    history.record(&[]);
    history.clear();
    assert!(!history.can_undo());
}
