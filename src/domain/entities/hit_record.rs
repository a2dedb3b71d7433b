//! Hit record entity: aggregated redirect counters for one short code.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::collections::BTreeMap;

/// Total and per-day hit counts for a short code.
///
/// `days` is keyed by midnight UTC of the resolved calendar date, so
/// iteration order is chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRecord {
    pub count: i64,
    pub days: BTreeMap<DateTime<Utc>, i64>,
}

impl HitRecord {
    pub fn new(count: i64) -> Self {
        Self {
            count,
            days: BTreeMap::new(),
        }
    }

    /// Adds `hits` to the bucket for `day`, creating it if needed.
    pub fn add_day(&mut self, day: DateTime<Utc>, hits: i64) {
        *self.days.entry(day).or_insert(0) += hits;
    }

    /// Hits recorded for a calendar date, or 0 if there is no bucket.
    pub fn hits_on(&self, date: NaiveDate) -> i64 {
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        self.days.get(&midnight).copied().unwrap_or(0)
    }
}
