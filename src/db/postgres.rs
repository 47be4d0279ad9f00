use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::accessor::{RecordAccessor, RecordWindow};
use crate::error::AppResult;
use crate::models::mood::MoodSample;
use crate::models::self_care::SelfCareActivity;
use crate::models::stress::StressEvent;

/// Postgres-backed record accessor over the tables written by the CRUD service.
///
/// Optional filters are bound as NULL and short-circuited in SQL; `LIMIT NULL`
/// means no limit in Postgres.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordAccessor for PgStore {
    async fn fetch_mood_samples(
        &self,
        user_id: Uuid,
        window: RecordWindow,
    ) -> AppResult<Vec<MoodSample>> {
        let samples = sqlx::query_as::<_, MoodSample>(
            r#"
            SELECT id, user_id, mood_level, logged_at FROM mood_logs
            WHERE user_id = $1
              AND ($2::timestamptz IS NULL OR logged_at >= $2)
              AND ($3::timestamptz IS NULL OR logged_at <= $3)
            ORDER BY logged_at DESC
            LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(window.start)
        .bind(window.end)
        .bind(window.limit)
        .fetch_all(&self.db)
        .await?;

        Ok(samples)
    }

    async fn fetch_stress_events(
        &self,
        user_id: Uuid,
        window: RecordWindow,
        trigger_tag: Option<&str>,
    ) -> AppResult<Vec<StressEvent>> {
        let events = sqlx::query_as::<_, StressEvent>(
            r#"
            SELECT id, user_id, trigger_tag, intensity, timestamp FROM stress_events
            WHERE user_id = $1
              AND ($2::timestamptz IS NULL OR timestamp >= $2)
              AND ($3::timestamptz IS NULL OR timestamp <= $3)
              AND ($4::text IS NULL OR trigger_tag = $4)
            ORDER BY timestamp DESC
            LIMIT $5
            "#,
        )
        .bind(user_id)
        .bind(window.start)
        .bind(window.end)
        .bind(trigger_tag)
        .bind(window.limit)
        .fetch_all(&self.db)
        .await?;

        Ok(events)
    }

    async fn fetch_journal_entry_dates(&self, user_id: Uuid) -> AppResult<Vec<NaiveDate>> {
        let dates = sqlx::query_scalar::<_, NaiveDate>(
            r#"
            SELECT DISTINCT (created_at AT TIME ZONE 'UTC')::date AS entry_date
            FROM journal_entries
            WHERE user_id = $1
            ORDER BY entry_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(dates)
    }

    async fn fetch_incomplete_self_care(
        &self,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> AppResult<Vec<SelfCareActivity>> {
        let activities = sqlx::query_as::<_, SelfCareActivity>(
            r#"
            SELECT id, user_id, name, description, is_completed, created_at
            FROM self_care_activities
            WHERE user_id = $1 AND is_completed = false
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(activities)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await?;
        Ok(())
    }
}
