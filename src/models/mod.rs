pub mod cell_state;
pub mod day_key;
pub mod day_status;
pub mod reminder;

pub use cell_state::CellState;
pub use day_key::DayKey;
pub use day_status::DayStatus;
pub use reminder::{ReminderTime, ScheduledReminder};
