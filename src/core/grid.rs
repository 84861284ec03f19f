//! Month grid construction and calendar labels.
//!
//! Weekdays are numbered 1 = Sunday .. 7 = Saturday throughout, so a
//! `first_weekday` of 2 puts Monday in the leftmost column.

use crate::errors::{AppError, AppResult};
use crate::models::DayKey;
use crate::utils::date::all_days_of_month;
use crate::utils::formatting::capitalize_words;
use chrono::{Datelike, Days, Locale, Months, NaiveDate, NaiveTime};

pub const WEEK_LEN: usize = 7;

/// Day cells of one month, padded with blanks to whole weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub first_weekday: u8,
    cells: Vec<Option<DayKey>>,
}

impl MonthGrid {
    pub fn cells(&self) -> &[Option<DayKey>] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of exactly [`WEEK_LEN`] cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<DayKey>]> {
        self.cells.chunks(WEEK_LEN)
    }

    /// Non-blank cells in order.
    pub fn days(&self) -> impl Iterator<Item = DayKey> + '_ {
        self.cells.iter().flatten().copied()
    }
}

fn check_first_weekday(first_weekday: u8) -> AppResult<()> {
    if (1..=7).contains(&first_weekday) {
        Ok(())
    } else {
        Err(AppError::InvalidArgument(format!(
            "first weekday must be between 1 (Sunday) and 7 (Saturday), got {first_weekday}"
        )))
    }
}

/// Weekday number of `date`, 1 = Sunday.
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().number_from_sunday() as u8
}

pub fn first_of_month(month: NaiveDate) -> NaiveDate {
    month.with_day(1).unwrap_or(month)
}

/// Grid for the month containing `month`.
pub fn days_in_grid(month: NaiveDate, first_weekday: u8) -> AppResult<MonthGrid> {
    check_first_weekday(first_weekday)?;

    let start = first_of_month(month);
    let prefix = (weekday_number(start) as usize + WEEK_LEN - first_weekday as usize) % WEEK_LEN;

    let mut cells: Vec<Option<DayKey>> = vec![None; prefix];
    cells.extend(
        all_days_of_month(start.year(), start.month())
            .into_iter()
            .map(|d| Some(DayKey::new(d))),
    );

    while cells.len() % WEEK_LEN != 0 {
        cells.push(None);
    }

    Ok(MonthGrid {
        year: start.year(),
        month: start.month(),
        first_weekday,
        cells,
    })
}

/// Move `delta` whole months from `month`.
///
/// The day of month is kept when the target month has it, otherwise it is
/// clamped to the target month's last day (Jan 31 + 1 → Feb 28/29).
pub fn shift_month(month: NaiveDate, delta: i32) -> AppResult<NaiveDate> {
    let shifted = if delta >= 0 {
        month.checked_add_months(Months::new(delta as u32))
    } else {
        month.checked_sub_months(Months::new(delta.unsigned_abs()))
    };

    shifted.ok_or_else(|| {
        AppError::InvalidArgument(format!("cannot move {delta} months from {month}"))
    })
}

/// Resolve a locale identifier such as `nl_BE` or `en-GB`.
pub fn parse_locale(id: &str) -> AppResult<Locale> {
    let normalized = id.trim().replace('-', "_");
    Locale::try_from(normalized.as_str())
        .map_err(|_| AppError::InvalidArgument(format!("unknown locale '{id}'")))
}

// 2023-01-01 was a Sunday.
fn reference_sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default()
}

fn format_day(date: NaiveDate, fmt: &str, locale: Locale) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(fmt, locale)
        .to_string()
}

/// Short weekday names, index 0 naming weekday `first_weekday`.
pub fn weekday_labels(first_weekday: u8, locale: &str) -> AppResult<[String; WEEK_LEN]> {
    check_first_weekday(first_weekday)?;
    let locale = parse_locale(locale)?;

    let sunday = reference_sunday();
    Ok(std::array::from_fn(|i| {
        let offset = (first_weekday as usize - 1 + i) % WEEK_LEN;
        let date = sunday + Days::new(offset as u64);
        capitalize_words(&format_day(date, "%a", locale))
    }))
}

/// Localized "Month Year", e.g. `Maart 2025` for `nl_BE`.
pub fn month_label(month: NaiveDate, locale: &str) -> AppResult<String> {
    let locale = parse_locale(locale)?;
    Ok(capitalize_words(&format_day(
        first_of_month(month),
        "%B %Y",
        locale,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn march_2025_monday_first() {
        let grid = days_in_grid(ymd(2025, 3, 14), 2).unwrap();

        assert_eq!(grid.len() % WEEK_LEN, 0);
        // March 1st 2025 is a Saturday: five blanks in a Monday-first week
        assert!(grid.cells()[..5].iter().all(Option::is_none));
        assert_eq!(grid.cells()[5], Some(DayKey::from_ymd(2025, 3, 1).unwrap()));

        let days: Vec<DayKey> = grid.days().collect();
        assert_eq!(days.first(), Some(&DayKey::from_ymd(2025, 3, 1).unwrap()));
        assert_eq!(days.last(), Some(&DayKey::from_ymd(2025, 3, 31).unwrap()));
        assert_eq!(grid.len(), 42);
    }

    #[test]
    fn every_month_and_first_weekday_fills_whole_weeks() {
        for year in [2023, 2024, 2025] {
            for month in 1..=12 {
                let m = ymd(year, month, 1);
                let expected_days = all_days_of_month(year, month).len();
                for fw in 1..=7 {
                    let grid = days_in_grid(m, fw).unwrap();
                    assert_eq!(grid.len() % WEEK_LEN, 0, "{year}-{month} fw={fw}");
                    assert_eq!(grid.days().count(), expected_days, "{year}-{month} fw={fw}");
                    assert!(grid.weeks().all(|w| w.len() == WEEK_LEN));
                    assert_eq!(
                        weekday_number(grid.days().next().unwrap().date()),
                        ((fw as usize - 1 + grid.cells().iter().take_while(|c| c.is_none()).count())
                            % WEEK_LEN
                            + 1) as u8
                    );
                }
            }
        }
    }

    #[test]
    fn grid_is_deterministic() {
        let a = days_in_grid(ymd(2024, 2, 10), 1).unwrap();
        let b = days_in_grid(ymd(2024, 2, 29), 1).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.days().count(), 29);
    }

    #[test]
    fn february_2015_sunday_first_is_exactly_four_weeks() {
        let grid = days_in_grid(ymd(2015, 2, 1), 1).unwrap();
        assert_eq!(grid.len(), 28);
        assert!(grid.cells().iter().all(Option::is_some));
    }

    #[test]
    fn rejects_out_of_range_first_weekday() {
        assert!(matches!(
            days_in_grid(ymd(2025, 3, 1), 0),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            weekday_labels(8, "en_GB"),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn shift_month_clamps_day_overflow() {
        assert_eq!(shift_month(ymd(2025, 1, 31), 1).unwrap(), ymd(2025, 2, 28));
        assert_eq!(shift_month(ymd(2024, 1, 31), 1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(shift_month(ymd(2025, 3, 31), -1).unwrap(), ymd(2025, 2, 28));
        assert_eq!(shift_month(ymd(2025, 3, 15), -3).unwrap(), ymd(2024, 12, 15));
        assert_eq!(shift_month(ymd(2025, 3, 15), 0).unwrap(), ymd(2025, 3, 15));
        assert_eq!(shift_month(ymd(2025, 12, 15), 13).unwrap(), ymd(2027, 1, 15));
    }

    #[test]
    fn weekday_labels_rotate_to_first_weekday() {
        let sunday_first = weekday_labels(1, "en_US").unwrap();
        assert_eq!(sunday_first[0], "Sun");
        assert_eq!(sunday_first[6], "Sat");

        let monday_first = weekday_labels(2, "en_GB").unwrap();
        assert_eq!(monday_first.len(), 7);
        assert_eq!(monday_first[0], "Mon");
        assert_eq!(monday_first[6], "Sun");

        let saturday_first = weekday_labels(7, "en_GB").unwrap();
        assert_eq!(saturday_first[0], "Sat");
        assert_eq!(saturday_first[1], "Sun");
    }

    #[test]
    fn labels_are_localized_and_capitalized() {
        assert_eq!(month_label(ymd(2025, 3, 5), "en_GB").unwrap(), "March 2025");
        assert_eq!(month_label(ymd(2025, 3, 5), "nl_BE").unwrap(), "Maart 2025");
        assert_eq!(month_label(ymd(2025, 3, 5), "nl-BE").unwrap(), "Maart 2025");
        assert!(month_label(ymd(2025, 3, 5), "xx_YY").is_err());
    }
}
