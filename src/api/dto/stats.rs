//! DTO for link hit statistics.

use chrono::SecondsFormat;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::HitRecord;

/// Hit statistics for a short code.
///
/// `Days` maps an RFC 3339 midnight-UTC timestamp (for example
/// `2015-07-22T00:00:00Z`) to that day's hit count. Keys sort
/// chronologically.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatsResponse {
    pub count: i64,
    pub days: BTreeMap<String, i64>,
}

impl From<HitRecord> for StatsResponse {
    fn from(record: HitRecord) -> Self {
        let days = record
            .days
            .into_iter()
            .map(|(day, hits)| (day.to_rfc3339_opts(SecondsFormat::Secs, true), hits))
            .collect();

        Self {
            count: record.count,
            days,
        }
    }
}
