use std::sync::Arc;

use uuid::Uuid;

use super::clock::Clock;
use crate::analytics::{
    self, recommendations::INCOMPLETE_ACTIVITY_LIMIT, recommendations::RECENT_MOOD_SAMPLES,
    JournalingStreak, MoodTrendPoint, Period, Recommendations, StressPattern,
};
use crate::db::{RecordAccessor, RecordWindow};
use crate::error::AppResult;

/// Per-user analytics queries over a record store.
///
/// Holds no state of its own: every call re-reads the records it needs and
/// recomputes from scratch, so one instance is shared across all requests.
#[derive(Clone)]
pub struct AnalyticsService {
    store: Arc<dyn RecordAccessor>,
    clock: Arc<dyn Clock>,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn RecordAccessor>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &dyn RecordAccessor {
        self.store.as_ref()
    }

    pub async fn mood_trend(
        &self,
        user_id: Uuid,
        period: Period,
        days: i64,
    ) -> AppResult<Vec<MoodTrendPoint>> {
        let start = analytics::window_start(self.clock.now(), days);
        let samples = self
            .store
            .fetch_mood_samples(user_id, RecordWindow::since(start))
            .await?;

        let trend = analytics::mood_trend(&samples, period, start);
        tracing::debug!(
            user_id = %user_id,
            ?period,
            days,
            samples = samples.len(),
            buckets = trend.len(),
            "Computed mood trend"
        );
        Ok(trend)
    }

    pub async fn stress_patterns(&self, user_id: Uuid, days: i64) -> AppResult<Vec<StressPattern>> {
        let start = analytics::window_start(self.clock.now(), days);
        let events = self
            .store
            .fetch_stress_events(user_id, RecordWindow::since(start), None)
            .await?;

        let patterns = analytics::stress_patterns(&events, start);
        tracing::debug!(
            user_id = %user_id,
            days,
            events = events.len(),
            triggers = patterns.len(),
            "Computed stress patterns"
        );
        Ok(patterns)
    }

    pub async fn journaling_streak(&self, user_id: Uuid) -> AppResult<JournalingStreak> {
        let today = self.clock.now().date_naive();
        let dates = self.store.fetch_journal_entry_dates(user_id).await?;

        let streak = analytics::journaling_streak(&dates, today);
        tracing::debug!(
            user_id = %user_id,
            journal_days = dates.len(),
            current = streak.current_streak,
            longest = streak.longest_streak,
            "Computed journaling streak"
        );
        Ok(streak)
    }

    pub async fn recommendations(&self, user_id: Uuid) -> AppResult<Recommendations> {
        let moods = self
            .store
            .fetch_mood_samples(user_id, RecordWindow::latest(RECENT_MOOD_SAMPLES as i64))
            .await?;
        let activities = self
            .store
            .fetch_incomplete_self_care(user_id, Some(INCOMPLETE_ACTIVITY_LIMIT as i64))
            .await?;

        let recommendations = analytics::compose_recommendations(&moods, &activities);
        tracing::debug!(
            user_id = %user_id,
            avg_mood_level = recommendations.avg_mood_level,
            open_activities = activities.len(),
            "Composed recommendations"
        );
        Ok(recommendations)
    }
}
