use dashboard_charts::api::{ChartConfig, hit_test, hit_test_bar, hit_test_line, hit_test_pie};
use dashboard_charts::core::{ChartKind, DataPoint};
use dashboard_charts::interaction::HoverTarget;

fn months() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Jan", 10.0),
        DataPoint::new("Feb", 20.0),
        DataPoint::new("Mar", 15.0),
    ]
}

#[test]
fn marker_pixel_hits_its_point_and_past_the_end_misses() {
    let config = ChartConfig::default_for(ChartKind::Line);
    assert_eq!(
        hit_test(ChartKind::Line, &months(), &config, 360.0, 100.0).expect("hit"),
        Some(HoverTarget::Point(2))
    );
    assert_eq!(
        hit_test_line(&months(), &config, 439.0).expect("hit"),
        Some(HoverTarget::Point(2))
    );
    assert_eq!(hit_test_line(&months(), &config, 440.0).expect("hit"), None);
}

#[test]
fn line_hits_round_to_the_nearest_point_and_ignore_y() {
    let config = ChartConfig::default_for(ChartKind::Line);
    assert_eq!(
        hit_test_line(&months(), &config, 119.0).expect("hit"),
        Some(HoverTarget::Point(0))
    );
    assert_eq!(
        hit_test_line(&months(), &config, 120.0).expect("hit"),
        Some(HoverTarget::Point(1))
    );
    for y in [-500.0, 0.0, 199.0, 10_000.0] {
        assert_eq!(
            hit_test(ChartKind::Line, &months(), &config, 200.0, y).expect("hit"),
            Some(HoverTarget::Point(1))
        );
    }
    assert_eq!(
        hit_test_line(&months(), &config, -1.0).expect("hit"),
        Some(HoverTarget::Point(0))
    );
    assert_eq!(hit_test_line(&months(), &config, -41.0).expect("hit"), None);
}

#[test]
fn single_point_line_is_hit_everywhere_in_range() {
    let config = ChartConfig::default_for(ChartKind::Line);
    let single = vec![DataPoint::new("Only", 3.0)];
    assert_eq!(
        hit_test_line(&single, &config, 399.0).expect("hit"),
        Some(HoverTarget::Point(0))
    );
}

#[test]
fn bar_hits_floor_into_slots() {
    let config = ChartConfig::default_for(ChartKind::Bar);
    let points = vec![
        DataPoint::new("A", 0.0),
        DataPoint::new("B", 50.0),
        DataPoint::new("C", 100.0),
    ];
    let spacing = 320.0 / 3.0;
    assert_eq!(
        hit_test_bar(&points, &config, 40.0).expect("hit"),
        Some(HoverTarget::Bar(0))
    );
    assert_eq!(
        hit_test_bar(&points, &config, 40.0 + spacing - 0.01).expect("hit"),
        Some(HoverTarget::Bar(0))
    );
    assert_eq!(
        hit_test_bar(&points, &config, 40.0 + spacing + 0.01).expect("hit"),
        Some(HoverTarget::Bar(1))
    );
    assert_eq!(hit_test_bar(&points, &config, 39.9).expect("hit"), None);
    assert_eq!(hit_test_bar(&points, &config, 360.0).expect("hit"), None);
}

#[test]
fn pie_hits_by_angle_inside_the_radius() {
    let config = ChartConfig::default_for(ChartKind::Pie);
    let points = vec![
        DataPoint::new("A", 25.0),
        DataPoint::new("B", 25.0),
        DataPoint::new("C", 25.0),
        DataPoint::new("D", 25.0),
    ];
    let center = 150.0;
    let probe = 50.0;

    // Quadrants clockwise from twelve o'clock.
    let cases = [
        ((center + probe, center - probe), 0),
        ((center + probe, center + probe), 1),
        ((center - probe, center + probe), 2),
        ((center - probe, center - probe), 3),
    ];
    for ((x, y), expected) in cases {
        assert_eq!(
            hit_test_pie(&points, &config, x, y).expect("hit"),
            Some(HoverTarget::Slice(expected)),
            "pointer ({x}, {y})"
        );
    }

    assert_eq!(hit_test_pie(&points, &config, 150.0, 39.0).expect("hit"), None);
    assert_eq!(
        hit_test_pie(&points, &config, 150.0, 41.0).expect("hit"),
        Some(HoverTarget::Slice(0))
    );
}

#[test]
fn hit_tests_follow_the_live_dataset() {
    let config = ChartConfig::default_for(ChartKind::Line);
    let mut points = months();
    assert_eq!(
        hit_test_line(&points, &config, 360.0).expect("hit"),
        Some(HoverTarget::Point(2))
    );

    points.truncate(2);
    assert_eq!(
        hit_test_line(&points, &config, 360.0).expect("hit"),
        Some(HoverTarget::Point(1))
    );
}
