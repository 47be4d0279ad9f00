use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StressEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub trigger_tag: Option<String>,
    pub intensity: i32,
    pub timestamp: DateTime<Utc>,
}

impl StressEvent {
    /// The stored trigger tag, exactly as recorded. Blank tags count as
    /// untagged.
    pub fn tag(&self) -> Option<&str> {
        self.trigger_tag
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}
