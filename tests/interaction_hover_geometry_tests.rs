use timeline_rs::core::BarGeometry;
use timeline_rs::interaction::{
    InteractionBounds, Point, anchor_position, client_to_timeline_x, is_outside_interaction_bounds,
    is_over_empty_space, should_show_action_affordance,
};

fn bars() -> Vec<BarGeometry> {
    vec![BarGeometry::new(10.0, 40.0), BarGeometry::new(200.0, 80.0)]
}

#[test]
fn bar_edges_count_as_occupied() {
    let bars = bars();
    assert!(!is_over_empty_space(10.0, &bars));
    assert!(!is_over_empty_space(50.0, &bars));
    assert!(!is_over_empty_space(280.0, &bars));
    assert!(is_over_empty_space(9.5, &bars));
    assert!(is_over_empty_space(50.5, &bars));
    assert!(is_over_empty_space(150.0, &bars));
}

#[test]
fn empty_row_is_all_empty_space() {
    assert!(is_over_empty_space(0.0, &[]));
    assert!(is_over_empty_space(-25.0, &[]));
}

#[test]
fn affordance_hidden_over_label_column_or_bar() {
    let bars = bars();
    assert!(should_show_action_affordance(false, false, 150.0, &bars));
    assert!(!should_show_action_affordance(true, false, 150.0, &bars));
    assert!(!should_show_action_affordance(false, true, 150.0, &bars));
    assert!(!should_show_action_affordance(false, false, 220.0, &bars));
}

#[test]
fn client_x_is_shifted_by_container_label_and_scroll() {
    assert_eq!(client_to_timeline_x(500.0, 20.0, 380.0, 100.0), 200.0);
    assert_eq!(client_to_timeline_x(400.0, 20.0, 380.0, 0.0), 0.0);
}

#[test]
fn interaction_bounds_check_each_axis_independently() {
    let bounds = InteractionBounds {
        width: 32.0,
        height: 32.0,
        margin: 8.0,
    };
    let anchor = Point::new(100.0, 100.0);

    assert!(!is_outside_interaction_bounds(Point::new(124.0, 100.0), anchor, bounds));
    assert!(is_outside_interaction_bounds(Point::new(124.1, 100.0), anchor, bounds));
    assert!(is_outside_interaction_bounds(Point::new(100.0, 75.0), anchor, bounds));
    // Diagonal corner is 28px away in Euclidean terms but inside on both axes.
    assert!(!is_outside_interaction_bounds(Point::new(120.0, 120.0), anchor, bounds));
}

#[test]
fn anchor_tracks_cursor_and_centers_on_row() {
    assert_eq!(anchor_position(250.0, 100.0, 60.0), Point::new(250.0, 130.0));
}
