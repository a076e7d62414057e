use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use timeline_rs::core::{TimelineWindow, ZoomLevel, generate_columns, generate_columns_by_name};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn at(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, 0, 0).expect("valid time")
}

#[test]
fn month_window_spans_seventeen_first_of_month_columns() {
    let window = generate_columns(ZoomLevel::Month, at(2024, 6, 15, 0)).expect("month window");

    assert_eq!(window.level(), ZoomLevel::Month);
    assert_eq!(window.column_width_px(), 160.0);
    assert_eq!(window.columns().len(), 17);
    assert_eq!(window.columns()[0].label, "Oct 2023");
    assert_eq!(window.columns()[16].label, "Feb 2025");
    assert!(window.columns().iter().all(|column| column.start.day() == 1));
    assert_eq!(window.window_start(), at(2023, 10, 1, 0));
    assert_eq!(window.window_end(), at(2025, 2, 28, 0));
    assert_eq!(window.columns()[16].end, at(2025, 3, 1, 0));
    assert_eq!(window.total_width_px(), 17.0 * 160.0);
}

#[test]
fn hour_window_has_twenty_five_one_hour_columns_around_midnight() {
    let window = generate_columns(ZoomLevel::Hour, at(2024, 6, 15, 12)).expect("hour window");

    assert_eq!(window.column_width_px(), 60.0);
    assert_eq!(window.columns().len(), 25);
    assert_eq!(window.window_start(), at(2024, 6, 14, 12));
    assert_eq!(window.window_end(), at(2024, 6, 15, 12));
    for column in window.columns() {
        assert_eq!(column.end - column.start, TimeDelta::hours(1));
    }
    assert_eq!(window.columns()[0].label, "12:00 PM");
    assert_eq!(window.columns()[1].label, "1:00 PM");
    assert_eq!(window.columns()[12].label, "12:00 AM");
}

#[test]
fn day_window_has_sixty_one_columns_with_short_labels() {
    let window = generate_columns(ZoomLevel::Day, at(2024, 6, 15, 9)).expect("day window");

    assert_eq!(window.column_width_px(), 80.0);
    assert_eq!(window.columns().len(), 61);
    assert_eq!(window.window_start(), at(2024, 5, 16, 0));
    assert_eq!(window.window_end(), at(2024, 7, 15, 0));
    assert_eq!(window.columns()[0].label, "May 16");
    assert_eq!(window.columns()[30].label, "Jun 15");
}

#[test]
fn week_window_starts_on_monday_before_reported_sunday_bound() {
    let window = generate_columns(ZoomLevel::Week, at(2024, 6, 15, 0)).expect("week window");

    assert_eq!(window.column_width_px(), 120.0);
    assert_eq!(window.window_start(), at(2024, 3, 17, 0));
    assert_eq!(window.window_end(), at(2024, 9, 7, 0));
    assert_eq!(window.window_start().weekday(), Weekday::Sun);
    assert_eq!(window.window_end().weekday(), Weekday::Sat);

    let columns = window.columns();
    assert_eq!(columns.len(), 26);
    assert!(columns.iter().all(|column| column.start.weekday() == Weekday::Mon));
    assert_eq!(columns[0].label, "Mar 11 - 17");

    // Known asymmetry: the reported start falls inside the first column.
    assert!(columns[0].start < window.window_start());
    assert!(columns[0].end > window.window_start());
    assert!(columns[25].end >= window.window_end());
}

#[test]
fn unknown_level_name_falls_back_to_month() {
    let window =
        generate_columns_by_name("Quarter", Some(at(2024, 6, 15, 0))).expect("fallback window");
    assert_eq!(window.level(), ZoomLevel::Month);
    assert_eq!(window.columns().len(), 17);

    let window = generate_columns_by_name("week", Some(at(2024, 6, 15, 0))).expect("week");
    assert_eq!(window.level(), ZoomLevel::Week);
}

#[test]
fn reference_time_of_day_is_ignored() {
    let morning = generate_columns(ZoomLevel::Day, at(2024, 2, 29, 1)).expect("morning");
    let evening = generate_columns(ZoomLevel::Day, at(2024, 2, 29, 23)).expect("evening");
    assert_eq!(morning, evening);
}

#[test]
fn column_lookup_helpers_follow_column_layout() {
    let window = generate_columns(ZoomLevel::Month, at(2024, 6, 15, 0)).expect("month window");

    assert_eq!(window.column_index_at(0.0), Some(0));
    assert_eq!(window.column_index_at(161.0), Some(1));
    assert_eq!(window.column_index_at(-1.0), None);
    assert_eq!(window.column_index_at(window.total_width_px()), None);

    let today = at(2024, 6, 15, 10);
    let current = window.column_containing(today).expect("june column");
    assert_eq!(window.columns()[current].label, "Jun 2024");
    assert!(window.is_current_column(current, today));
    assert!(!window.is_current_column(current + 1, today));
}

#[test]
fn default_no_reference_generates_a_window_around_now() {
    let window = generate_columns_by_name("Day", None).expect("now window");
    assert_eq!(window.columns().len(), 61);
}

#[test]
fn window_json_round_trip_revalidates_columns() {
    let window = generate_columns(ZoomLevel::Week, at(2024, 6, 12, 0)).expect("week window");
    let json = serde_json::to_string(&window).expect("serialize window");
    let restored: TimelineWindow = serde_json::from_str(&json).expect("deserialize window");
    assert_eq!(restored, window);

    let mut value: serde_json::Value = serde_json::from_str(&json).expect("json value");
    value["columns"]
        .as_array_mut()
        .expect("columns array")
        .remove(1);
    let gapped = serde_json::from_value::<TimelineWindow>(value);
    assert!(gapped.is_err());

    let mut value: serde_json::Value = serde_json::from_str(&json).expect("json value");
    value["column_width_px"] = serde_json::json!(0.0);
    assert!(serde_json::from_value::<TimelineWindow>(value).is_err());
}
