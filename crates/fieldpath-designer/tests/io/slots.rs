use fieldpath_designer::slots::SaveSlots;
use fieldpath_designer::{EditorSession, PointerButton, Viewport};
use tempfile::TempDir;

fn session_with_points(points: &[(f64, f64)]) -> EditorSession {
    let mut session = EditorSession::with_viewport(Viewport::square(1000.0));
    for &(x, y) in points {
        session.pointer_down(PointerButton::Primary, x, y);
        session.pointer_up();
    }
    session
}

#[test]
fn test_load_slot_replaces_path_and_is_undoable() {
    let mut session = session_with_points(&[(100.0, 100.0), (300.0, 300.0)]);
    let slot = session.save_slot("Two points");
    session.clear();

    session.load_slot(slot).unwrap();
    assert_eq!(session.path().len(), 2);
    assert_eq!(session.loaded_slot(), Some(slot));

    assert!(session.undo());
    assert!(session.path().is_empty());
}

#[test]
fn test_loaded_slot_is_auto_saved() {
    let mut session = session_with_points(&[(100.0, 100.0)]);
    let slot = session.save_slot("Auto");
    session.load_slot(slot).unwrap();

    session.pointer_down(PointerButton::Primary, 500.0, 500.0);
    session.pointer_up();
    let stored = session.slots().get(slot).unwrap();
    assert_eq!(stored.waypoints.len(), 2);
    assert_eq!(stored.waypoints, session.path().waypoints());
    assert!(stored.modified >= stored.created);
}

#[test]
fn test_unloaded_slot_is_left_alone() {
    let mut session = session_with_points(&[(100.0, 100.0)]);
    let slot = session.save_slot("Frozen");
    session.pointer_down(PointerButton::Primary, 500.0, 500.0);
    session.pointer_up();
    assert_eq!(session.slots().get(slot).unwrap().waypoints.len(), 1);
}

#[test]
fn test_deleting_loaded_slot_unloads_it() {
    let mut session = session_with_points(&[(100.0, 100.0)]);
    let first = session.save_slot("First");
    let second = session.save_slot("Second");
    session.load_slot(first).unwrap();

    assert!(session.delete_slot(first));
    assert_eq!(session.loaded_slot(), None);
    assert!(session.slots().get(second).is_some());
    assert!(session.load_slot(first).is_err());
}

#[test]
fn test_slots_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("slots.json");

    let mut session = session_with_points(&[(100.0, 100.0), (200.0, 400.0)]);
    let id = session.save_slot("Skills");
    session.rename_slot(id, "Skills v2");
    session.save_slots_to_file(&file_path).unwrap();

    let slots = SaveSlots::load_from_file(&file_path).unwrap();
    assert_eq!(slots.len(), 1);
    let slot = slots.get(id).unwrap();
    assert_eq!(slot.name, "Skills v2");
    assert_eq!(slot.waypoints, session.path().waypoints());

    let mut other = EditorSession::new();
    other.load_slots_from_file(&file_path).unwrap();
    other.load_slot(id).unwrap();
    assert_eq!(other.path().len(), 2);
}

#[test]
fn test_clearing_keeps_loaded_slot_contents() {
    let mut session = session_with_points(&[(100.0, 100.0), (300.0, 300.0)]);
    let slot = session.save_slot("Keep");
    session.load_slot(slot).unwrap();
    session.clear();
    assert_eq!(session.slots().get(slot).unwrap().waypoints.len(), 2);
}

#[test]
fn test_slot_off_the_current_field_is_not_loaded() {
    let mut session = session_with_points(&[(100.0, 100.0), (900.0, 900.0)]);
    let slot = session.save_slot("Big field");
    session.clear();
    session.set_canvas_size(500.0).unwrap();
    let depth = session.path().undo_depth();

    assert!(session.load_slot(slot).is_err());
    assert!(session.path().is_empty());
    assert_eq!(session.path().undo_depth(), depth);
    assert_eq!(session.loaded_slot(), None);
}
