use std::collections::BTreeSet;

use chrono::{Datelike as _, NaiveDate};
use egui::{
    Align, Button, Direction, Layout, Response, RichText, Ui, Vec2, Widget, WidgetInfo, WidgetType,
};
use egui_extras::{Column, Size, StripBuilder, TableBuilder};

use crate::DateRange;
use crate::calendar::{DayCell, MonthCursor, WEEKDAY_NAMES, month_cells, month_name};
use crate::policy::RangePickerConfig;

/// Widget state that survives between frames.
#[derive(Clone, serde::Deserialize, serde::Serialize)]
struct DateRangePickerState {
    /// Month shown in the left pane; the right pane always shows the month after.
    left: MonthCursor,
    exclude_weekends: bool,
}

/// Two side-by-side month panes for picking an inclusive date range.
///
/// The picked range lives in a host-owned [`DateRange`]. Clicking a first day
/// starts a selection, clicking a second day completes it (in either order);
/// the returned [`Response`] reports [`Response::changed`] exactly once per
/// completed range. Clicks on disabled days and clicks that would exceed
/// [`Self::max_range`] are ignored.
///
/// ```no_run
/// # egui::__run_test_ui(|ui| {
/// # let mut range = egui_rangepicker::DateRange::default();
/// let response = ui.add(
///     egui_rangepicker::DateRangePicker::new(&mut range)
///         .max_range(30)
///         .advanced_mode(true),
/// );
/// if response.changed() {
///     // `range` is now complete.
/// }
/// # });
/// ```
pub struct DateRangePicker<'a> {
    selection: &'a mut DateRange,
    id_salt: Option<&'a str>,
    min_date: NaiveDate,
    max_date: Option<NaiveDate>,
    max_range_days: Option<i64>,
    disabled_dates: BTreeSet<NaiveDate>,
    advanced_mode: bool,
    initial_month: Option<MonthCursor>,
}

impl<'a> DateRangePicker<'a> {
    pub fn new(selection: &'a mut DateRange) -> Self {
        Self {
            selection,
            id_salt: None,
            min_date: chrono::offset::Local::now().date_naive(),
            max_date: None,
            max_range_days: Some(30),
            disabled_dates: BTreeSet::new(),
            advanced_mode: false,
            initial_month: None,
        }
    }

    /// Add id source.
    /// Must be set if multiple range pickers are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = Some(id_salt);
        self
    }

    /// Earliest selectable day. (Default: today)
    #[inline]
    pub fn min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = min_date;
        self
    }

    /// Latest selectable day, inclusive. (Default: unbounded)
    #[inline]
    pub fn max_date(mut self, max_date: impl Into<Option<NaiveDate>>) -> Self {
        self.max_date = max_date.into();
        self
    }

    /// Maximum inclusive span of the range in whole days, or `None` for
    /// unlimited. (Default: 30)
    #[inline]
    pub fn max_range(mut self, days: impl Into<Option<i64>>) -> Self {
        self.max_range_days = days.into();
        self
    }

    /// Individual days that can not be selected. (Default: none)
    #[inline]
    pub fn disabled_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.disabled_dates = dates.into_iter().collect();
        self
    }

    /// Show the "Exclude weekends" toggle. While hidden, weekends stay
    /// selectable. (Default: false)
    #[inline]
    pub fn advanced_mode(mut self, advanced_mode: bool) -> Self {
        self.advanced_mode = advanced_mode;
        self
    }

    /// Month initially shown in the left pane. (Default: the current month)
    #[inline]
    pub fn initial_month(mut self, year: i32, month: u32) -> Self {
        self.initial_month = Some(MonthCursor { year, month });
        self
    }
}

impl Widget for DateRangePicker<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            selection,
            id_salt,
            min_date,
            max_date,
            max_range_days,
            disabled_dates,
            advanced_mode,
            initial_month,
        } = self;

        let id = ui.make_persistent_id(id_salt);
        let mut state = ui
            .data_mut(|data| data.get_persisted::<DateRangePickerState>(id))
            .unwrap_or_else(|| DateRangePickerState {
                left: initial_month
                    .unwrap_or_else(|| MonthCursor::from_date(chrono::offset::Local::now().date_naive())),
                exclude_weekends: false,
            });

        let config = RangePickerConfig {
            min_date,
            max_date,
            max_range_days,
            disabled_dates,
            exclude_weekends: advanced_mode && state.exclude_weekends,
        };

        // Draw from the state at the start of the frame; clicks are applied
        // afterwards and show up in the next frame's projection.
        let range = *selection;
        let left = state.left;
        let right = left.next();

        let mut clicked_day: Option<NaiveDate> = None;
        let mut nav_delta: i32 = 0;
        let mut toggled_weekends: Option<bool> = None;

        let height = 20.0;
        let spacing = 2.0;

        let mut response = ui
            .scope(|ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(spacing);
                // Nav row + weekday header + at most six week rows per pane.
                let pane_height = (spacing + height) * 8.0;
                StripBuilder::new(ui)
                    .size(Size::exact(pane_height))
                    .sizes(Size::exact(height), advanced_mode as usize)
                    .vertical(|mut strip| {
                        strip.strip(|builder| {
                            builder.sizes(Size::remainder(), 2).horizontal(|mut strip| {
                                strip.cell(|ui| {
                                    ui.horizontal(|ui| {
                                        if ui
                                            .button("<")
                                            .on_hover_text("previous month")
                                            .clicked()
                                        {
                                            nav_delta -= 1;
                                        }
                                        ui.label(RichText::new(left.title()).strong());
                                    });
                                    if let Some(date) =
                                        calendar_grid(ui, "left_pane", left, &range, &config, height)
                                    {
                                        clicked_day = Some(date);
                                    }
                                });
                                strip.cell(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.label(RichText::new(right.title()).strong());
                                        if ui.button(">").on_hover_text("next month").clicked() {
                                            nav_delta += 1;
                                        }
                                    });
                                    if let Some(date) = calendar_grid(
                                        ui,
                                        "right_pane",
                                        right,
                                        &range,
                                        &config,
                                        height,
                                    ) {
                                        clicked_day = Some(date);
                                    }
                                });
                            });
                        });
                        if advanced_mode {
                            strip.cell(|ui| {
                                let mut exclude = state.exclude_weekends;
                                if ui.checkbox(&mut exclude, "Exclude weekends").changed() {
                                    toggled_weekends = Some(exclude);
                                }
                            });
                        }
                    });
            })
            .response;

        // Navigation moves both panes together and is never clamped against
        // the selectable window.
        if nav_delta < 0 {
            state.left = state.left.prev();
        } else if nav_delta > 0 {
            state.left = state.left.next();
        }

        if let Some(exclude) = toggled_weekends {
            state.exclude_weekends = exclude;
            // The new policy can invalidate the current selection; start
            // over. This is not a host-visible change.
            selection.clear();
        } else if let Some(date) = clicked_day {
            if selection.click(date, &config) {
                if let DateRange {
                    start: Some(start),
                    end: Some(end),
                } = *selection
                {
                    log::debug!("date range completed: {start} ..= {end}");
                }
                response.mark_changed();
            }
        }

        ui.data_mut(|data| data.insert_persisted(id, state));

        response
    }
}

/// One month pane: weekday header plus the day grid. Returns the day that was
/// clicked, if any.
fn calendar_grid(
    ui: &mut Ui,
    id_salt: &str,
    month: MonthCursor,
    range: &DateRange,
    config: &RangePickerConfig,
    height: f32,
) -> Option<NaiveDate> {
    let cells = month_cells(month, range, config);
    let mut clicked = None;

    TableBuilder::new(ui)
        .id_salt(id_salt)
        .vscroll(false)
        .columns(Column::remainder(), 7)
        .header(height, |mut header| {
            for name in WEEKDAY_NAMES {
                header.col(|ui| {
                    ui.with_layout(Layout::centered_and_justified(Direction::TopDown), |ui| {
                        ui.label(name);
                    });
                });
            }
        })
        .body(|mut body| {
            for week in cells.chunks(7) {
                body.row(height, |mut row| {
                    for cell in week {
                        row.col(|ui| {
                            if let Some(date) = cell.date {
                                if day_button(ui, date, *cell).clicked() {
                                    clicked = Some(date);
                                }
                            }
                        });
                    }
                    // Pad the last week out to a full grid row.
                    for _ in week.len()..7 {
                        row.col(|_| {});
                    }
                });
            }
        });

    clicked
}

fn day_button(ui: &mut Ui, date: NaiveDate, cell: DayCell) -> Response {
    let fill_color = if cell.selected {
        ui.visuals().selection.bg_fill
    } else if cell.in_range {
        ui.visuals().selection.bg_fill.linear_multiply(0.4)
    } else {
        ui.visuals().extreme_bg_color
    };

    let mut text_color = ui.visuals().widgets.inactive.text_color();
    if cell.disabled {
        text_color = text_color.linear_multiply(0.5);
    }

    let response = ui
        .with_layout(Layout::top_down_justified(Align::Center), |ui| {
            ui.add_enabled(
                !cell.disabled,
                Button::new(RichText::new(date.day().to_string()).color(text_color))
                    .fill(fill_color),
            )
        })
        .inner;

    // Full date for accessibility, "June 5, 2024".
    response.widget_info(|| {
        WidgetInfo::labeled(
            WidgetType::Button,
            !cell.disabled,
            format!("{} {}, {}", month_name(date.month()), date.day(), date.year()),
        )
    });

    response
}
