use chrono::NaiveDate;

use crate::RangePickerConfig;

/// The picked range. Owned by the host and bound into
/// [`crate::DateRangePicker`] with `&mut`.
///
/// Invariant: `end` is only ever `Some` while `start` is `Some` and
/// `start <= end`. The range is *empty* (nothing picked), *partial* (only an
/// anchor) or *complete*.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn is_partial(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Apply a day click. Returns `true` iff the click completed the range.
    ///
    /// Clicks on disabled days are ignored. A click while empty or complete
    /// starts a new partial selection at that day. A click while partial
    /// completes the range with the two days in calendar order, unless the
    /// span exceeds `max_range_days`, in which case the click is ignored and
    /// the anchor is kept.
    pub fn click(&mut self, date: NaiveDate, config: &RangePickerConfig) -> bool {
        if config.is_disabled(date) {
            return false;
        }

        match (self.start, self.end) {
            (Some(anchor), None) => {
                let (lo, hi) = if date < anchor {
                    (date, anchor)
                } else {
                    (anchor, date)
                };
                if let Some(max_days) = config.max_range_days {
                    let span = (hi - lo).num_days();
                    if span > max_days {
                        log::trace!(
                            "ignoring click on {date}: span of {span} days exceeds the maximum of {max_days}"
                        );
                        return false;
                    }
                }
                self.start = Some(lo);
                self.end = Some(hi);
                true
            }
            _ => {
                self.start = Some(date);
                self.end = None;
                false
            }
        }
    }
}
