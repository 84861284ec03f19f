use crate::models::day_status::DayStatus;
use crate::utils::colors::{GREEN, GREY, RED, YELLOW};

/// How a single day is drawn in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// After today: greyed out and not editable.
    Future,
    Recorded(DayStatus),
}

impl CellState {
    pub fn color(&self) -> &'static str {
        match self {
            CellState::Future => GREY,
            CellState::Recorded(DayStatus::Taken) => GREEN,
            CellState::Recorded(DayStatus::NotTaken) => RED,
            CellState::Recorded(DayStatus::Unset) => YELLOW,
        }
    }

    pub fn is_editable(&self) -> bool {
        !matches!(self, CellState::Future)
    }
}
