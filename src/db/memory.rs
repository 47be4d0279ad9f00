//! In-memory record accessor for tests. Mirrors the ordering and filtering
//! contract of [`PgStore`](super::PgStore).

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::accessor::{RecordAccessor, RecordWindow};
use crate::error::{AppError, AppResult};
use crate::models::mood::MoodSample;
use crate::models::self_care::SelfCareActivity;
use crate::models::stress::StressEvent;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub moods: Vec<MoodSample>,
    pub stress_events: Vec<StressEvent>,
    pub journal_entries: Vec<(Uuid, DateTime<Utc>)>,
    pub self_care: Vec<SelfCareActivity>,
    /// When set, `ping` fails as if the pool could not hand out a connection.
    pub unreachable: bool,
}

impl MemoryStore {
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn with_mood(mut self, user_id: Uuid, mood_level: i32, logged_at: DateTime<Utc>) -> Self {
        self.moods.push(MoodSample {
            id: Uuid::new_v4(),
            user_id,
            mood_level,
            logged_at,
        });
        self
    }

    pub fn with_stress(
        mut self,
        user_id: Uuid,
        trigger_tag: Option<&str>,
        intensity: i32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        self.stress_events.push(StressEvent {
            id: Uuid::new_v4(),
            user_id,
            trigger_tag: trigger_tag.map(String::from),
            intensity,
            timestamp,
        });
        self
    }

    pub fn with_journal_entry(mut self, user_id: Uuid, created_at: DateTime<Utc>) -> Self {
        self.journal_entries.push((user_id, created_at));
        self
    }

    pub fn with_self_care(
        mut self,
        user_id: Uuid,
        name: &str,
        is_completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        self.self_care.push(SelfCareActivity {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            description: None,
            is_completed,
            created_at,
        });
        self
    }
}

fn take_limit<T>(mut rows: Vec<T>, limit: Option<i64>) -> Vec<T> {
    if let Some(limit) = limit {
        rows.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
    }
    rows
}

#[async_trait]
impl RecordAccessor for MemoryStore {
    async fn fetch_mood_samples(
        &self,
        user_id: Uuid,
        window: RecordWindow,
    ) -> AppResult<Vec<MoodSample>> {
        let mut rows: Vec<MoodSample> = self
            .moods
            .iter()
            .filter(|m| m.user_id == user_id && window.contains(m.logged_at))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        Ok(take_limit(rows, window.limit))
    }

    async fn fetch_stress_events(
        &self,
        user_id: Uuid,
        window: RecordWindow,
        trigger_tag: Option<&str>,
    ) -> AppResult<Vec<StressEvent>> {
        let mut rows: Vec<StressEvent> = self
            .stress_events
            .iter()
            .filter(|e| e.user_id == user_id && window.contains(e.timestamp))
            .filter(|e| trigger_tag.map_or(true, |t| e.trigger_tag.as_deref() == Some(t)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(take_limit(rows, window.limit))
    }

    async fn fetch_journal_entry_dates(&self, user_id: Uuid) -> AppResult<Vec<NaiveDate>> {
        let dates: BTreeSet<NaiveDate> = self
            .journal_entries
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, created_at)| created_at.date_naive())
            .collect();
        Ok(dates.into_iter().rev().collect())
    }

    async fn fetch_incomplete_self_care(
        &self,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> AppResult<Vec<SelfCareActivity>> {
        let mut rows: Vec<SelfCareActivity> = self
            .self_care
            .iter()
            .filter(|a| a.user_id == user_id && !a.is_completed)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(take_limit(rows, limit))
    }

    async fn ping(&self) -> AppResult<()> {
        if self.unreachable {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn stress_events_filter_by_tag_newest_first() {
        let user = Uuid::new_v4();
        let t = Utc.with_ymd_and_hms(2024, 4, 4, 12, 0, 0).unwrap();
        let store = MemoryStore::default()
            .with_stress(user, Some("Work"), 3, t - Duration::days(2))
            .with_stress(user, Some("Family"), 2, t)
            .with_stress(user, Some("Work"), 5, t);

        let events = store
            .fetch_stress_events(user, RecordWindow::default(), Some("Work"))
            .await
            .unwrap();

        let intensities: Vec<i32> = events.iter().map(|e| e.intensity).collect();
        assert_eq!(intensities, vec![5, 3]);
    }

    #[tokio::test]
    async fn journal_dates_are_distinct_and_descending() {
        let user = Uuid::new_v4();
        let day = Utc.with_ymd_and_hms(2024, 4, 4, 8, 0, 0).unwrap();
        let store = MemoryStore::default()
            .with_journal_entry(user, day - Duration::days(1))
            .with_journal_entry(user, day)
            .with_journal_entry(user, day + Duration::hours(10));

        let dates = store.fetch_journal_entry_dates(user).await.unwrap();

        assert_eq!(dates, vec![day.date_naive(), (day - Duration::days(1)).date_naive()]);
    }

    #[tokio::test]
    async fn unreachable_store_fails_ping() {
        assert!(MemoryStore::default().ping().await.is_ok());
        assert!(matches!(
            MemoryStore::default().unreachable().ping().await,
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        ));
    }

    #[tokio::test]
    async fn mood_limit_keeps_newest() {
        let user = Uuid::new_v4();
        let t = Utc.with_ymd_and_hms(2024, 4, 4, 8, 0, 0).unwrap();
        let store = MemoryStore::default()
            .with_mood(user, 1, t - Duration::hours(2))
            .with_mood(user, 5, t)
            .with_mood(user, 3, t - Duration::hours(1));

        let moods = store
            .fetch_mood_samples(user, RecordWindow::latest(2))
            .await
            .unwrap();

        let levels: Vec<i32> = moods.iter().map(|m| m.mood_level).collect();
        assert_eq!(levels, vec![5, 3]);
    }
}
