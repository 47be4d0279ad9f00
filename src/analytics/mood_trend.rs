use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::mood::MoodSample;

/// Granularity of a mood trend bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    #[default]
    Week,
    Month,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("period must be one of day, week or month (got '{0}')")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}

/// Grouping key. Variants of one period compare chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Bucket {
    Day(NaiveDate),
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl Bucket {
    fn of(period: Period, at: DateTime<Utc>) -> Self {
        let date = at.date_naive();
        match period {
            Period::Day => Bucket::Day(date),
            Period::Week => {
                let iso = date.iso_week();
                Bucket::Week {
                    year: iso.year(),
                    week: iso.week(),
                }
            }
            Period::Month => Bucket::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Bucket::Week { year, week } => write!(f, "{year}-W{week:02}"),
            Bucket::Month { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTrendPoint {
    pub bucket_label: String,
    pub average_mood: f64,
    pub sample_count: usize,
}

/// Average mood per bucket for samples logged at or after `window_start`,
/// oldest bucket first. Buckets without samples are omitted.
pub fn mood_trend(
    samples: &[MoodSample],
    period: Period,
    window_start: DateTime<Utc>,
) -> Vec<MoodTrendPoint> {
    let mut buckets: BTreeMap<Bucket, (i64, usize)> = BTreeMap::new();

    for sample in samples.iter().filter(|s| s.logged_at >= window_start) {
        if !sample.has_valid_level() {
            tracing::warn!(
                sample_id = %sample.id,
                mood_level = sample.mood_level,
                "Skipping out-of-range mood sample"
            );
            continue;
        }
        let (sum, count) = buckets.entry(Bucket::of(period, sample.logged_at)).or_default();
        *sum += i64::from(sample.mood_level);
        *count += 1;
    }

    buckets
        .into_iter()
        .map(|(bucket, (sum, count))| MoodTrendPoint {
            bucket_label: bucket.to_string(),
            average_mood: sum as f64 / count as f64,
            sample_count: count,
        })
        .collect()
}
