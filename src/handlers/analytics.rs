use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};

use crate::analytics::{JournalingStreak, MoodTrendPoint, Recommendations, StressPattern};
use crate::auth::middleware::AuthUser;
use crate::dto::{MoodTrendQuery, StressPatternQuery};
use crate::error::AppResult;
use crate::AppState;

pub async fn get_mood_trend(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    query: Result<Query<MoodTrendQuery>, QueryRejection>,
) -> AppResult<Json<Vec<MoodTrendPoint>>> {
    let Query(query) = query?;
    let (period, days) = query.resolve()?;
    let trend = state.analytics.mood_trend(auth_user.id, period, days).await?;
    Ok(Json(trend))
}

pub async fn get_stress_patterns(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    query: Result<Query<StressPatternQuery>, QueryRejection>,
) -> AppResult<Json<Vec<StressPattern>>> {
    let Query(query) = query?;
    let days = query.resolve()?;
    let patterns = state.analytics.stress_patterns(auth_user.id, days).await?;
    Ok(Json(patterns))
}

pub async fn get_journaling_streak(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<JournalingStreak>> {
    let streak = state.analytics.journaling_streak(auth_user.id).await?;
    Ok(Json(streak))
}

/// Self-care suggestions based on recent moods and unfinished activities.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Recommendations>> {
    let recommendations = state.analytics.recommendations(auth_user.id).await?;
    Ok(Json(recommendations))
}
