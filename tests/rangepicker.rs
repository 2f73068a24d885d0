//! Drives the rendered widget through its accessibility tree.

use chrono::NaiveDate;
use egui_kittest::Harness;
use egui_kittest::kittest::Queryable as _;
use egui_rangepicker::{DateRange, DateRangePicker};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[derive(Default)]
struct PickerState {
    range: DateRange,
    changes: usize,
}

/// A picker pinned to June/July 2024 with the spec-like test window:
/// min 2024-01-01, max 2024-12-31, max span 30 days.
fn picker_harness(advanced: bool, disabled: Vec<NaiveDate>) -> Harness<'static, PickerState> {
    Harness::new_ui_state(
        move |ui, state| {
            let response = ui.add(
                DateRangePicker::new(&mut state.range)
                    .min_date(date(2024, 1, 1))
                    .max_date(date(2024, 12, 31))
                    .max_range(30)
                    .disabled_dates(disabled.iter().copied())
                    .advanced_mode(advanced)
                    .initial_month(2024, 6),
            );
            if response.changed() {
                state.changes += 1;
            }
        },
        PickerState::default(),
    )
}

#[test]
fn completing_a_range_reports_exactly_one_change() {
    let mut harness = picker_harness(false, vec![]);

    harness.get_by_label("June 5, 2024").click();
    harness.run();
    assert_eq!(harness.state().range.start, Some(date(2024, 6, 5)));
    assert_eq!(harness.state().range.end, None);
    assert_eq!(harness.state().changes, 0);

    harness.get_by_label("June 20, 2024").click();
    harness.run();
    assert_eq!(harness.state().range.start, Some(date(2024, 6, 5)));
    assert_eq!(harness.state().range.end, Some(date(2024, 6, 20)));
    assert_eq!(harness.state().changes, 1);
}

#[test]
fn clicking_in_reverse_order_normalizes_the_range() {
    let mut harness = picker_harness(false, vec![]);

    harness.get_by_label("June 20, 2024").click();
    harness.run();
    harness.get_by_label("June 5, 2024").click();
    harness.run();

    assert_eq!(harness.state().range.start, Some(date(2024, 6, 5)));
    assert_eq!(harness.state().range.end, Some(date(2024, 6, 20)));
    assert_eq!(harness.state().changes, 1);
}

#[test]
fn over_long_second_click_is_ignored() {
    let mut harness = picker_harness(false, vec![]);

    harness.get_by_label("June 5, 2024").click();
    harness.run();
    // 45 days away, in the right pane.
    harness.get_by_label("July 20, 2024").click();
    harness.run();

    assert_eq!(harness.state().range.start, Some(date(2024, 6, 5)));
    assert_eq!(harness.state().range.end, None);
    assert_eq!(harness.state().changes, 0);
}

#[test]
fn disabled_day_clicks_are_inert() {
    let mut harness = picker_harness(false, vec![date(2024, 6, 10)]);

    harness.get_by_label("June 10, 2024").click();
    harness.run();
    assert!(harness.state().range.is_empty());
    assert_eq!(harness.state().changes, 0);

    // Still ignored while a selection is in progress.
    harness.get_by_label("June 5, 2024").click();
    harness.run();
    harness.get_by_label("June 10, 2024").click();
    harness.run();
    assert_eq!(harness.state().range.start, Some(date(2024, 6, 5)));
    assert_eq!(harness.state().range.end, None);
    assert_eq!(harness.state().changes, 0);
}

#[test]
fn weekend_toggle_clears_selection_without_a_change_event() {
    let mut harness = picker_harness(true, vec![]);

    harness.get_by_label("June 5, 2024").click();
    harness.run();
    harness.get_by_label("June 6, 2024").click();
    harness.run();
    assert!(harness.state().range.is_complete());
    assert_eq!(harness.state().changes, 1);

    harness.get_by_label("Exclude weekends").click();
    harness.run();
    assert!(harness.state().range.is_empty());
    assert_eq!(harness.state().changes, 1);
}

#[test]
fn weekend_days_are_unselectable_while_excluded() {
    let mut harness = picker_harness(true, vec![]);

    harness.get_by_label("Exclude weekends").click();
    harness.run();

    // 2024-06-08 is a Saturday.
    harness.get_by_label("June 8, 2024").click();
    harness.run();
    assert!(harness.state().range.is_empty());

    // A Friday still works.
    harness.get_by_label("June 7, 2024").click();
    harness.run();
    assert_eq!(harness.state().range.start, Some(date(2024, 6, 7)));
}

#[test]
fn navigation_moves_both_panes_in_lockstep() {
    let mut harness = picker_harness(false, vec![]);

    harness.get_by_label("June 2024");
    harness.get_by_label("July 2024");

    harness.get_by_label("<").click();
    harness.run();
    harness.get_by_label("May 2024");
    harness.get_by_label("June 2024");
    assert!(harness.query_by_label("July 2024").is_none());

    harness.get_by_label(">").click();
    harness.run();
    harness.get_by_label(">").click();
    harness.run();
    harness.get_by_label("July 2024");
    harness.get_by_label("August 2024");

    // Moving the panes never touches the selection.
    assert!(harness.state().range.is_empty());
    assert_eq!(harness.state().changes, 0);
}
