use fieldpath_designer::viewport::{is_within_field, snap_to_grid, Viewport};
use fieldpath_designer::Point;
use proptest::prelude::*;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::default();
    assert_eq!(vp.grid_size(), 10);
    assert_eq!(vp.canvas_size(), 2000.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}

#[test]
fn test_snap_with_pan() {
    let mut vp = Viewport::square(800.0);
    vp.set_pan(35.0, -20.0);
    // (137 - 35, 46 + 20) = (102, 66) -> (100, 70)
    assert_eq!(vp.snap(137.0, 46.0), Point::new(100.0, 70.0));
    assert_eq!(vp.device_to_canvas(137.0, 46.0), Point::new(102.0, 66.0));
}

#[test]
fn test_grid_change_affects_new_snaps_only() {
    let mut vp = Viewport::square(800.0);
    let before = vp.snap(47.0, 47.0);
    vp.set_grid_size(25);
    assert_eq!(before, Point::new(50.0, 50.0));
    assert_eq!(vp.snap(47.0, 47.0), Point::new(50.0, 50.0));
    assert_eq!(vp.snap(62.0, 63.0), Point::new(50.0, 75.0));
}

#[test]
fn test_rectangular_canvas_bounds() {
    let vp = Viewport::new(600.0, 400.0);
    assert!(vp.contains(&Point::new(600.0, 400.0)));
    assert!(!vp.contains(&Point::new(410.0, 410.0)));
    assert_eq!(vp.canvas_size(), 400.0);
}

#[test]
fn test_pixels_to_inches_scale() {
    let vp = Viewport::square(2000.0);
    assert!((vp.pixels_to_inches() - 0.0743125).abs() < 1e-12);
}

proptest! {
    #[test]
    fn snapping_is_idempotent(
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
        pan_x in -500.0f64..500.0,
        pan_y in -500.0f64..500.0,
        grid in 1u32..100,
    ) {
        let once = snap_to_grid(x, y, pan_x, pan_y, grid);
        // A snapped point is already in canvas space, so it is re-snapped unpanned.
        let twice = snap_to_grid(once.x, once.y, 0.0, 0.0, grid);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn snapped_points_lie_on_the_grid(
        x in 0.0f64..2000.0,
        y in 0.0f64..2000.0,
        grid in 1u32..100,
    ) {
        let p = snap_to_grid(x, y, 0.0, 0.0, grid);
        let g = f64::from(grid);
        prop_assert_eq!(p.x % g, 0.0);
        prop_assert_eq!(p.y % g, 0.0);
        prop_assert!((p.x - x).abs() <= g / 2.0 + 1e-9);
    }

    #[test]
    fn field_check_matches_ranges(x in -100.0f64..1100.0, y in -100.0f64..1100.0) {
        let expected = (0.0..=1000.0).contains(&x) && (0.0..=1000.0).contains(&y);
        prop_assert_eq!(is_within_field(x, y, 1000.0, 1000.0), expected);
    }
}
