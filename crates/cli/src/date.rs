//! Local calendar date, for date-derived seeds and year ranges.

use chrono::{Datelike, Local, NaiveDate};
use exopack_catalog::date_seed;

/// Returns today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Seed derived from a calendar date (`day * year * month`).
pub fn seed_for(date: NaiveDate) -> u64 {
    date_seed(date.year(), date.month(), date.day())
}
