use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use timeline_rs::core::{
    MIN_BAR_WIDTH_PX, ScheduledEntry, ZoomLevel, bar_geometry, date_to_position, generate_columns,
    position_to_date,
};

fn base_date(day_offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(1960, 1, 1)
        .expect("base date")
        .checked_add_days(Days::new(day_offset))
        .expect("offset date")
}

fn select_level(code: u8) -> ZoomLevel {
    [ZoomLevel::Day, ZoomLevel::Week, ZoomLevel::Month][usize::from(code % 3)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(192))]

    #[test]
    fn date_position_round_trip_is_exact_inside_window(
        reference_offset in 0u64..50_000,
        level_code in 0u8..3,
        probe_ratio in 0.0f64..=1.0,
    ) {
        let reference = base_date(reference_offset);
        let level = select_level(level_code);
        let window = generate_columns(level, reference.and_hms_opt(0, 0, 0).expect("midnight"))
            .expect("window");
        let total = window.total_width_px();

        let first = window.window_start().date();
        let last = window.window_end().date();
        let span_days = (last - first).num_days() as f64;
        let probe = first
            .checked_add_days(Days::new((probe_ratio * span_days).floor() as u64))
            .expect("probe date");

        let px = date_to_position(probe, &window, total);
        prop_assert!(px >= -1e-6 && px <= total + 1e-6);
        let recovered = position_to_date(px, &window, total).expect("pixel to date");
        prop_assert_eq!(recovered, probe);
    }

    #[test]
    fn bar_width_never_drops_below_floor(
        reference_offset in 0u64..50_000,
        start_shift in 0u64..400,
        length in 0u64..60,
        total in 100.0f64..5_000.0,
    ) {
        let reference = base_date(reference_offset);
        let window = generate_columns(
            ZoomLevel::Month,
            reference.and_hms_opt(0, 0, 0).expect("midnight"),
        )
        .expect("window");
        let start = window
            .window_start()
            .date()
            .checked_add_days(Days::new(start_shift))
            .expect("start");
        let end = start.checked_add_days(Days::new(length)).expect("end");
        let entry = ScheduledEntry::new("wo", "wc", "probe", start, end);

        let geometry = bar_geometry(&entry, &window, total);
        prop_assert!(geometry.width_px >= MIN_BAR_WIDTH_PX);
        if length == 0 {
            prop_assert_eq!(geometry.width_px, MIN_BAR_WIDTH_PX);
        }
        prop_assert_eq!(geometry.left_px, date_to_position(start, &window, total));
    }
}
