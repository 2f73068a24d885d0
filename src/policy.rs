use std::collections::BTreeSet;

use chrono::{Datelike as _, NaiveDate, Weekday};

/// The rules deciding which days can be clicked.
///
/// Assembled by [`crate::DateRangePicker`] once per frame from its builder
/// parameters plus the persisted "exclude weekends" toggle, and treated as
/// read-only for the rest of the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangePickerConfig {
    /// Earliest selectable day.
    pub min_date: NaiveDate,

    /// Latest selectable day; `max_date` itself is still selectable.
    pub max_date: Option<NaiveDate>,

    /// Maximum inclusive span of a range, in whole days.
    pub max_range_days: Option<i64>,

    /// Individually unselectable days.
    pub disabled_dates: BTreeSet<NaiveDate>,

    /// Disable Saturdays and Sundays.
    pub exclude_weekends: bool,
}

impl Default for RangePickerConfig {
    fn default() -> Self {
        Self {
            min_date: chrono::offset::Local::now().date_naive(),
            max_date: None,
            max_range_days: Some(30),
            disabled_dates: BTreeSet::new(),
            exclude_weekends: false,
        }
    }
}

impl RangePickerConfig {
    /// Whether `date` is unselectable under this configuration.
    ///
    /// Pure calendar-day comparison: dates before `min_date`'s day or after
    /// `max_date`'s day are out, as is every entry of `disabled_dates` and,
    /// with `exclude_weekends`, every Saturday and Sunday.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        if date < self.min_date {
            return true;
        }
        if self.max_date.is_some_and(|max_date| date > max_date) {
            return true;
        }
        if self.disabled_dates.contains(&date) {
            return true;
        }
        self.exclude_weekends && matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            min_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            max_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            max_range_days: Some(30),
            disabled_dates: BTreeSet::new(),
            exclude_weekends: false,
        }
    }
}
