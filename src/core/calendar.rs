use crate::core::day_store::DayStatusStore;
use crate::core::grid::{self, WEEK_LEN};
use crate::errors::AppResult;
use crate::models::{CellState, DayKey, DayStatus};
use crate::store::KeyValueStore;
use crate::utils::colors::{GREY, MAGENTA, paint};
use chrono::{Datelike, NaiveDate};

const CELL_WIDTH: usize = 4;
const NOTE_BADGE: char = '*';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: DayKey,
    pub state: CellState,
    pub has_note: bool,
}

/// One month as the calendar screen shows it.
#[derive(Debug, Clone)]
pub struct CalendarView {
    pub title: String,
    pub labels: [String; WEEK_LEN],
    pub rows: Vec<Vec<Option<CalendarCell>>>,
}

pub fn build_view<S: KeyValueStore>(
    store: &DayStatusStore<S>,
    month: NaiveDate,
    first_weekday: u8,
    locale: &str,
    today: DayKey,
) -> AppResult<CalendarView> {
    let month_grid = grid::days_in_grid(month, first_weekday)?;

    let rows = month_grid
        .weeks()
        .map(|week| {
            week.iter()
                .map(|cell| {
                    cell.map(|day| {
                        let state = store.cell_state(day, today);
                        // no badge on days that have not happened yet
                        let has_note = state != CellState::Future && store.has_note(day);
                        CalendarCell {
                            day,
                            state,
                            has_note,
                        }
                    })
                })
                .collect()
        })
        .collect();

    Ok(CalendarView {
        title: grid::month_label(month, locale)?,
        labels: grid::weekday_labels(first_weekday, locale)?,
        rows,
    })
}

impl CalendarView {
    pub fn days(&self) -> impl Iterator<Item = &CalendarCell> {
        self.rows.iter().flatten().flatten()
    }

    pub fn render(&self, color: bool) -> String {
        let width = CELL_WIDTH * WEEK_LEN;
        let mut out = String::new();

        out.push_str(&format!("{:^width$}\n", self.title, width = width));

        for label in &self.labels {
            let short: String = label.chars().take(CELL_WIDTH - 1).collect();
            let padded = format!("{:>w$} ", short, w = CELL_WIDTH - 1);
            out.push_str(&paint(&padded, GREY, color));
        }
        out.push('\n');

        for row in &self.rows {
            for cell in row {
                match cell {
                    None => out.push_str(&" ".repeat(CELL_WIDTH)),
                    Some(c) => {
                        let num = format!("{:>w$}", c.day.date().day(), w = CELL_WIDTH - 1);
                        out.push_str(&paint(&num, c.state.color(), color));
                        if c.has_note {
                            out.push_str(&paint(&NOTE_BADGE.to_string(), MAGENTA, color));
                        } else {
                            out.push(' ');
                        }
                    }
                }
            }
            out.push('\n');
        }

        out
    }

    /// Count of past-or-today days per status.
    pub fn tally(&self) -> (usize, usize, usize) {
        self.days().fold((0, 0, 0), |(t, n, u), c| match c.state {
            CellState::Recorded(DayStatus::Taken) => (t + 1, n, u),
            CellState::Recorded(DayStatus::NotTaken) => (t, n + 1, u),
            CellState::Recorded(DayStatus::Unset) => (t, n, u + 1),
            CellState::Future => (t, n, u),
        })
    }
}
