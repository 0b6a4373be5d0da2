use fieldpath_designer::codegen::{generate_code, CodeFormat, PathCodeGenerator, NO_WAYPOINTS_PLACEHOLDER};
use fieldpath_designer::waypoint::{AngularDirection, Waypoint, WaypointId};

fn waypoint(x: f64, y: f64, angle: f64) -> Waypoint {
    Waypoint {
        id: WaypointId::new(),
        x,
        y,
        angle,
        forwards: true,
        min_speed: 0,
        max_speed: 127,
        timeout: 2000,
        angular_direction: AngularDirection::Auto,
    }
}

#[test]
fn test_empty_path_placeholder() {
    let code = generate_code(&[], 2000.0).unwrap();
    assert_eq!(code, NO_WAYPOINTS_PLACEHOLDER);
    assert!(!code.contains("chassis"));
}

#[test]
fn test_two_waypoint_program() {
    let origin = waypoint(0.0, 0.0, 0.0);
    let second = Waypoint {
        timeout: 1500,
        forwards: false,
        max_speed: 100,
        angular_direction: AngularDirection::Clockwise,
        ..waypoint(10.0, 0.0, 90.0)
    };

    let code = generate_code(&[origin, second], 2000.0).unwrap();
    let expected = "\
// libKS MTPoint v0.1
// Starting point: (-74.31 in, -74.31 in)
chassis.turnToHeading(0, 2000); // Point 1
chassis.moveToPoint(0.00, 0.00, 2000, {.forwards = true, .maxSpeed = 127, .minSpeed = 0}); // Point 1
chassis.turnToHeading(90, 1500, {.direction = AngularDirection::CW_CLOCKWISE}); // Point 2
chassis.moveToPoint(0.74, 0.00, 1500, {.forwards = false, .maxSpeed = 100, .minSpeed = 0}); // Point 2
";
    assert_eq!(code, expected);
}

#[test]
fn test_origin_is_always_zero() {
    let path = vec![waypoint(640.0, 220.0, 135.0), waypoint(900.0, 900.0, 0.0)];
    let code = generate_code(&path, 1600.0).unwrap();
    assert!(code.contains(
        "chassis.moveToPoint(0.00, 0.00, 2000, {.forwards = true, .maxSpeed = 127, .minSpeed = 0}); // Point 1\n"
    ));
}

#[test]
fn test_screen_down_is_field_backwards() {
    // Origin faces north; a point below it on screen is behind the robot.
    let path = vec![waypoint(1000.0, 1000.0, 0.0), waypoint(1000.0, 1200.0, 0.0)];
    let code = generate_code(&path, 2000.0).unwrap();
    assert!(code.contains("chassis.moveToPoint(0.00, -14.86, 2000"));
}

#[test]
fn test_canvas_resize_changes_scale() {
    let path = vec![waypoint(0.0, 0.0, 0.0), waypoint(100.0, 0.0, 0.0)];
    let small = PathCodeGenerator::new(CodeFormat::LibKsMtPoint, 1000.0).unwrap();
    let large = PathCodeGenerator::new(CodeFormat::LibKsMtPoint, 2000.0).unwrap();
    assert!(small.generate(&path).contains("moveToPoint(14.86, 0.00"));
    assert!(large.generate(&path).contains("moveToPoint(7.43, 0.00"));
}

#[test]
fn test_every_line_is_terminated() {
    let path = vec![waypoint(0.0, 0.0, 0.0), waypoint(50.0, 50.0, 45.0), waypoint(90.0, 10.0, 270.0)];
    let code = generate_code(&path, 2000.0).unwrap();
    assert!(code.ends_with('\n'));
    assert_eq!(code.lines().count(), 2 + 2 * path.len());
}
