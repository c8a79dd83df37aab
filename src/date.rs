// src/date.rs
//
// Day/month → calendar date, corrected for academic-year rollover.
//
// A school year starts in September of one calendar year and ends in the
// next. The page only shows day.month plus one year label, so a record is
// first placed in that year and pulled back one year if that lands after
// today. No resolved date is ever later than today.

use chrono::NaiveDate;

use crate::core::sanitize::parse_day_month;
use crate::error::{Error, Result};

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::InvalidDate(format!("{day:02}.{month:02}.{year}")))
}

pub fn resolve_date(day: u32, month: u32, school_year: i32, today: NaiveDate) -> Result<NaiveDate> {
    let candidate = ymd(school_year, month, day)?;
    if candidate > today {
        ymd(school_year - 1, month, day)
    } else {
        Ok(candidate)
    }
}

/// Same as [`resolve_date`] from a raw "dd.mm" token.
pub fn resolve_token(token: &str, school_year: i32, today: NaiveDate) -> Result<NaiveDate> {
    let (day, month) = parse_day_month(token)?;
    resolve_date(day, month, school_year, today)
}
