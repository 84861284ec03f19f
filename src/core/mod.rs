pub mod backup;
pub mod calendar;
pub mod day_store;
pub mod export;
pub mod grid;
pub mod intake;
pub mod log;
pub mod reminders;
pub mod session;

pub use day_store::{DayRecord, DayStatusStore};
pub use grid::{MonthGrid, days_in_grid, month_label, shift_month, weekday_labels};
