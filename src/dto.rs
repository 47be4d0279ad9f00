//! # MindTrack: Request DTOs
//!
//! Query-parameter types for the analytics endpoints. Response bodies are the
//! analytics result structs themselves and need no separate wrapper.
//!
//! Conventions:
//! - `*Query` → deserialized from query params
//! - Range validation is expressed via `validator` derive macros
//! - Missing optional params fall back to the documented defaults

use serde::Deserialize;
use validator::Validate;

use crate::analytics::Period;
use crate::error::{AppError, AppResult};

/// Lookback used when `days` is omitted.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

/// GET /api/analytics/mood-trend
#[derive(Debug, Default, Deserialize, Validate)]
pub struct MoodTrendQuery {
    /// "day", "week" or "month". Default: "week"
    pub period: Option<String>,

    /// Days to look back, 1-365. Default: 30
    #[validate(range(min = 1, max = 365, message = "days must be between 1 and 365"))]
    pub days: Option<i64>,
}

impl MoodTrendQuery {
    /// Validated `(period, days)` with defaults applied.
    pub fn resolve(&self) -> AppResult<(Period, i64)> {
        self.validate()?;
        let period = match self.period.as_deref() {
            Some(raw) => raw
                .parse::<Period>()
                .map_err(|e| AppError::Validation(e.to_string()))?,
            None => Period::default(),
        };
        Ok((period, self.days.unwrap_or(DEFAULT_LOOKBACK_DAYS)))
    }
}

/// GET /api/analytics/stress-patterns
#[derive(Debug, Default, Deserialize, Validate)]
pub struct StressPatternQuery {
    /// Days to look back, 1-365. Default: 30
    #[validate(range(min = 1, max = 365, message = "days must be between 1 and 365"))]
    pub days: Option<i64>,
}

impl StressPatternQuery {
    pub fn resolve(&self) -> AppResult<i64> {
        self.validate()?;
        Ok(self.days.unwrap_or(DEFAULT_LOOKBACK_DAYS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_trend_defaults_to_weekly_thirty_days() {
        let (period, days) = MoodTrendQuery::default().resolve().unwrap();
        assert_eq!(period, Period::Week);
        assert_eq!(days, 30);
    }

    #[test]
    fn unknown_period_is_a_validation_error() {
        let query = MoodTrendQuery {
            period: Some("year".into()),
            days: None,
        };
        assert!(matches!(query.resolve(), Err(AppError::Validation(_))));
    }

    #[test]
    fn days_outside_range_are_rejected() {
        for days in [0, 366, -5] {
            let query = StressPatternQuery { days: Some(days) };
            assert!(
                matches!(query.resolve(), Err(AppError::Validation(_))),
                "days={days} should be rejected"
            );
        }
        assert_eq!(StressPatternQuery { days: Some(365) }.resolve().unwrap(), 365);
    }
}
