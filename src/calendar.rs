use chrono::{Datelike as _, NaiveDate};

use crate::{DateRange, RangePickerConfig};

/// Weekday column labels, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A month shown in one of the two calendar panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct MonthCursor {
    pub year: i32,

    /// 1..=12
    pub month: u32,
}

impl MonthCursor {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("Could not create NaiveDate")
    }

    /// The date of the given day of this month. `day` must be in `1..=last_day_of_month`.
    pub fn date(self, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, day).expect("Could not create NaiveDate")
    }

    pub fn last_day_of_month(self) -> u32 {
        let date = self.first_day();
        date.with_day(31)
            .map(|_| 31)
            .or_else(|| date.with_day(30).map(|_| 30))
            .or_else(|| date.with_day(29).map(|_| 29))
            .unwrap_or(28)
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Pane header text, e.g. "June 2024".
    pub fn title(self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => unreachable!("Unknown month: {month}"),
    }
}

/// One cell of a month grid, recomputed every frame from the current
/// selection and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// `None` for the leading blanks before the 1st of the month.
    pub date: Option<NaiveDate>,

    /// The range start or end.
    pub selected: bool,

    /// Strictly between the endpoints of a complete range.
    pub in_range: bool,

    pub disabled: bool,
}

impl DayCell {
    fn blank() -> Self {
        Self {
            date: None,
            selected: false,
            in_range: false,
            disabled: true,
        }
    }
}

/// Project one month into its grid cells: leading blanks up to the weekday of
/// the 1st (Sunday-first), then one cell per day. No trailing blanks.
pub fn month_cells(
    month: MonthCursor,
    range: &DateRange,
    config: &RangePickerConfig,
) -> Vec<DayCell> {
    let offset = month.first_day().weekday().num_days_from_sunday();
    let days = month.last_day_of_month();

    let mut cells = Vec::with_capacity((offset + days) as usize);
    for _ in 0..offset {
        cells.push(DayCell::blank());
    }
    for day in 1..=days {
        let date = month.date(day);
        let selected = range.start == Some(date) || range.end == Some(date);
        let in_range = match (range.start, range.end) {
            (Some(start), Some(end)) => start < date && date < end,
            _ => false,
        };
        cells.push(DayCell {
            date: Some(date),
            selected,
            in_range,
            disabled: config.is_disabled(date),
        });
    }
    cells
}
