use crate::errors::{AppError, AppResult};
use crate::utils::date::{all_days_of_month, parse_date, parse_month};
use chrono::{Datelike, NaiveDate};

fn invalid(msg: &str, raw: &str) -> AppError {
    AppError::InvalidDate(format!("{msg}: '{raw}'"))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or
/// `YYYY-MM-DD` token.
fn bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match token.len() {
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid("invalid year", token))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1);
            let last = NaiveDate::from_ymd_opt(y, 12, 31);
            first
                .zip(last)
                .ok_or_else(|| invalid("year out of range", token))
        }
        7 => {
            let first = parse_month(token).ok_or_else(|| invalid("invalid month", token))?;
            let last = all_days_of_month(first.year(), first.month())
                .last()
                .copied()
                .ok_or_else(|| invalid("invalid month", token))?;
            Ok((first, last))
        }
        10 => {
            let d = parse_date(token).ok_or_else(|| invalid("invalid date", token))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported range format", token)),
    }
}

/// Parse `--range`.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or two tokens of the same shape
/// joined by `:`.
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((a, b)) => {
            let (a, b) = (a.trim(), b.trim());
            if a.len() != b.len() {
                return Err(invalid("start and end must have the same format", r));
            }
            (bounds(a)?.0, bounds(b)?.1)
        }
        None => bounds(r.trim())?,
    };

    if start > end {
        return Err(invalid("range starts after it ends", r));
    }
    Ok((start, end))
}
