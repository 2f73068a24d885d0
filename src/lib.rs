//! A dual-month date range picker widget for [`egui`](https://github.com/emilk/egui).
//!
//! [`DateRangePicker`] shows two adjacent month panes. The user clicks a first
//! day to anchor a selection and a second day to complete it; the completed
//! range is normalized so that `start <= end` no matter the click order.
//! Selection is constrained by a minimum date, an optional maximum date, a set
//! of individually disabled days, a maximum span in days, and an optional
//! "exclude weekends" toggle. Out-of-policy clicks are silently ignored.
//!
//! ```no_run
//! # egui::__run_test_ui(|ui| {
//! use egui_rangepicker::{DateRange, DateRangePicker};
//!
//! # let mut range = DateRange::default();
//! // `range` is host state, kept between frames.
//! let response = ui.add(DateRangePicker::new(&mut range).max_range(30));
//! if response.changed() {
//!     // Fires exactly once per completed selection.
//! }
//! # });
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!
#![forbid(unsafe_code)]

mod calendar;
mod policy;
mod selection;
mod widget;

pub use crate::calendar::{DayCell, MonthCursor, WEEKDAY_NAMES, month_cells, month_name};
pub use crate::policy::RangePickerConfig;
pub use crate::selection::DateRange;
pub use crate::widget::DateRangePicker;
