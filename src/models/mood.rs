use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lowest and highest mood a user can log.
pub const MOOD_LEVEL_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodSample {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood_level: i32,
    pub logged_at: DateTime<Utc>,
}

impl MoodSample {
    pub fn has_valid_level(&self) -> bool {
        MOOD_LEVEL_RANGE.contains(&self.mood_level)
    }
}
