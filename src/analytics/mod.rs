//! Aggregations over a single user's tracked records.
//!
//! Every function here is pure: records and the reference time come in as
//! arguments, nothing is read from the clock or the database.

pub mod mood_trend;
pub mod recommendations;
pub mod streak;
pub mod stress;

use chrono::{DateTime, Duration, Utc};

pub use mood_trend::{mood_trend, MoodTrendPoint, Period};
pub use recommendations::{compose_recommendations, Recommendations};
pub use streak::{journaling_streak, JournalingStreak};
pub use stress::{stress_patterns, StressPattern};

/// Start of a lookback window of `days` days ending at `now`.
pub fn window_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}
