use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::mood::MoodSample;
use crate::models::self_care::SelfCareActivity;
use crate::models::stress::StressEvent;

/// Optional time bounds and row cap applied to a record fetch.
///
/// Both bounds are inclusive. `limit: None` fetches every matching row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}

impl RecordWindow {
    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }

    pub fn latest(limit: i64) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.map_or(true, |s| at >= s) && self.end.map_or(true, |e| at <= e)
    }
}

/// Read-only view over a user's tracked records.
///
/// The analytics never write through this trait; records are owned by the
/// CRUD layer that persists them.
#[async_trait]
pub trait RecordAccessor: Send + Sync {
    /// Mood samples newest first.
    async fn fetch_mood_samples(
        &self,
        user_id: Uuid,
        window: RecordWindow,
    ) -> AppResult<Vec<MoodSample>>;

    /// Stress events newest first, optionally restricted to one trigger tag.
    async fn fetch_stress_events(
        &self,
        user_id: Uuid,
        window: RecordWindow,
        trigger_tag: Option<&str>,
    ) -> AppResult<Vec<StressEvent>>;

    /// Distinct UTC dates with at least one journal entry, newest first.
    async fn fetch_journal_entry_dates(&self, user_id: Uuid) -> AppResult<Vec<NaiveDate>>;

    /// Self-care activities not yet completed, most recently created first.
    async fn fetch_incomplete_self_care(
        &self,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> AppResult<Vec<SelfCareActivity>>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> AppResult<()>;
}
