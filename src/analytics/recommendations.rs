use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::mood::MoodSample;
use crate::models::self_care::SelfCareActivity;

/// How many of the latest mood samples feed the average.
pub const RECENT_MOOD_SAMPLES: usize = 7;
/// How many incomplete self-care activities are considered.
pub const INCOMPLETE_ACTIVITY_LIMIT: usize = 5;
const SUGGESTED_ACTIVITY_LIMIT: usize = 3;
const NEUTRAL_MOOD: f64 = 3.0;

const LOW_MOOD_THRESHOLD: f64 = 2.5;
const MODERATE_MOOD_THRESHOLD: f64 = 3.5;

const LOW_MOOD_MESSAGES: [&str; 3] = [
    "Your mood has been low lately. Consider scheduling time for activities you enjoy.",
    "Try to get some physical activity today, even a short walk can help.",
    "Consider reaching out to a friend or loved one for support.",
];

const MODERATE_MOOD_MESSAGES: [&str; 2] = [
    "Your mood has been moderate. Remember to take breaks during your day.",
    "Stay hydrated and maintain regular meals.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedActivity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub avg_mood_level: f64,
    pub recommendations: Vec<String>,
    pub suggested_activities: Vec<SuggestedActivity>,
}

/// Rule-based self-care suggestions from recent moods and open activities.
pub fn compose_recommendations(
    recent_moods: &[MoodSample],
    incomplete_activities: &[SelfCareActivity],
) -> Recommendations {
    let recent_average = recent_mood_average(recent_moods);

    // Without any samples there is nothing to base mood advice on.
    let mut recommendations: Vec<String> = match recent_average {
        Some(avg) if avg < LOW_MOOD_THRESHOLD => {
            LOW_MOOD_MESSAGES.iter().map(|m| m.to_string()).collect()
        }
        Some(avg) if avg < MODERATE_MOOD_THRESHOLD => {
            MODERATE_MOOD_MESSAGES.iter().map(|m| m.to_string()).collect()
        }
        _ => Vec::new(),
    };

    let mut open: Vec<&SelfCareActivity> = incomplete_activities
        .iter()
        .filter(|a| !a.is_completed)
        .collect();
    open.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    open.truncate(INCOMPLETE_ACTIVITY_LIMIT);

    if let Some(first) = open.first() {
        recommendations.push(format!(
            "You have {} incomplete self-care tasks. Try to complete at least one today.",
            open.len()
        ));
        recommendations.push(format!("Consider scheduling time for: {}", first.name));
    }

    let suggested_activities = open
        .iter()
        .take(SUGGESTED_ACTIVITY_LIMIT)
        .map(|a| SuggestedActivity {
            id: a.id,
            name: a.name.clone(),
            description: a.description.clone(),
        })
        .collect();

    Recommendations {
        avg_mood_level: recent_average.unwrap_or(NEUTRAL_MOOD),
        recommendations,
        suggested_activities,
    }
}

/// Mean of the newest samples, `None` when there are none.
fn recent_mood_average(samples: &[MoodSample]) -> Option<f64> {
    let mut valid: Vec<&MoodSample> = samples.iter().filter(|s| s.has_valid_level()).collect();
    valid.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
    valid.truncate(RECENT_MOOD_SAMPLES);

    if valid.is_empty() {
        return None;
    }
    let sum: i64 = valid.iter().map(|s| i64::from(s.mood_level)).sum();
    Some(sum as f64 / valid.len() as f64)
}
