//! Operating-day rules for the shuttle calendar.

use chrono::{Datelike, NaiveDate, Weekday};

/// Hard-coded dates on which the shuttle does not run.
pub const NON_OPERATION_DATES: [&str; 2] = ["2024-01-28", "2025-01-28"];

/// Memo pre-seeded on every non-operation date at session creation.
pub const NON_OPERATION_MEMO: &str = "기사님 휴무일";

/// Weekdays the shuttle operates (Mon/Wed/Thu).
pub const BOARDING_WEEKDAYS: [Weekday; 3] = [Weekday::Mon, Weekday::Wed, Weekday::Thu];

pub fn is_non_operation_date(date: NaiveDate) -> bool {
    let s = date.format("%Y-%m-%d").to_string();
    NON_OPERATION_DATES.contains(&s.as_str())
}

pub fn is_boarding_weekday(date: NaiveDate) -> bool {
    BOARDING_WEEKDAYS.contains(&date.weekday())
}

/// A date is operating when it falls on a boarding weekday and is not a
/// forced holiday.
pub fn is_operating_day(date: NaiveDate) -> bool {
    is_boarding_weekday(date) && !is_non_operation_date(date)
}
