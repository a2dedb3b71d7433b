//! Hit counter aggregation.
//!
//! A hit hash stores a cumulative `Total` field plus one field per
//! day-of-year (`"1"` to `"366"`). The year is never stored: on read each
//! day is placed in the current year, or in the previous year when that date
//! would still be in the future.
//!
//! # Example
//!
//! With `now` = 2016-06-16 (day 168), field `"204"` resolves to
//! 2016-07-22, which is after `now`, so the bucket is reported as
//! 2015-07-22.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::domain::entities::HitRecord;
use crate::domain::error::HitsParseError;
use crate::domain::keys::TOTAL_FIELD;

/// Builds a [`HitRecord`] from the raw fields of a hit hash.
///
/// An absent or empty `Total` counts as 0. Fields resolving to the same
/// calendar date are summed.
///
/// # Errors
///
/// Returns [`HitsParseError`] if a field name or value is not an integer, or
/// a day cannot be placed on the calendar.
pub fn aggregate(
    raw: &HashMap<String, String>,
    now: DateTime<Utc>,
) -> Result<HitRecord, HitsParseError> {
    let count = match raw.get(TOTAL_FIELD).map(String::as_str) {
        None | Some("") => 0,
        Some(value) => parse_counter(TOTAL_FIELD, value)?,
    };

    let mut record = HitRecord::new(count);

    for (field, value) in raw {
        if field == TOTAL_FIELD {
            continue;
        }

        let year_day: i64 = field
            .parse()
            .map_err(|_| HitsParseError::InvalidField(field.clone()))?;
        let hits = parse_counter(field, value)?;

        record.add_day(resolve_year_day(year_day, now)?, hits);
    }

    Ok(record)
}

/// Resolves a stored day-of-year to midnight UTC of a concrete date.
///
/// Day `d` is January 1 of `now`'s year plus `d - 1` days, so out-of-range
/// days roll over into the neighbouring year. If the result is strictly
/// after `now`, the same month and day of the previous year is used instead
/// (February 29 becomes March 1).
pub fn resolve_year_day(
    year_day: i64,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, HitsParseError> {
    let out_of_range = || HitsParseError::DayOutOfRange(year_day);

    let offset = year_day
        .checked_sub(1)
        .and_then(TimeDelta::try_days)
        .ok_or_else(out_of_range)?;

    let date = NaiveDate::from_yo_opt(now.year(), 1)
        .and_then(|jan_first| jan_first.checked_add_signed(offset))
        .ok_or_else(out_of_range)?;

    if at_midnight(date) <= now {
        return Ok(at_midnight(date));
    }

    let previous = date
        .with_year(date.year() - 1)
        .or_else(|| NaiveDate::from_ymd_opt(date.year() - 1, 3, 1))
        .ok_or_else(out_of_range)?;

    Ok(at_midnight(previous))
}

/// The two hash fields bumped by one hit at `now`: `Total` and today's
/// day-of-year.
pub fn hit_fields_for(now: DateTime<Utc>) -> [String; 2] {
    [TOTAL_FIELD.to_string(), now.ordinal().to_string()]
}

/// Increments one counter field in place, treating an absent field as 0.
///
/// Returns the new value.
pub fn increment_field(
    fields: &mut HashMap<String, String>,
    field: &str,
) -> Result<i64, HitsParseError> {
    let current = match fields.get(field) {
        Some(value) => parse_counter(field, value)?,
        None => 0,
    };

    let next = current
        .checked_add(1)
        .ok_or_else(|| HitsParseError::InvalidValue {
            field: field.to_string(),
            value: current.to_string(),
        })?;

    fields.insert(field.to_string(), next.to_string());
    Ok(next)
}

/// Applies one hit at `now` to a copy of the raw fields.
///
/// This is the in-process model of the two `increment_hash` calls performed
/// by the store.
pub fn increment_fields(
    current: &HashMap<String, String>,
    now: DateTime<Utc>,
) -> Result<HashMap<String, String>, HitsParseError> {
    let mut updated = current.clone();
    for field in hit_fields_for(now) {
        increment_field(&mut updated, &field)?;
    }
    Ok(updated)
}

fn parse_counter(field: &str, value: &str) -> Result<i64, HitsParseError> {
    value.parse().map_err(|_| HitsParseError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn at_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
