use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ats::{self, handlers::AtsCheckResponse, store as score_store};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::ats_score::ScoreSource;
use crate::models::resume::{ResumePayload, ResumeRow};
use crate::resumes::store::{self, Page};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub count: usize,
    pub total: i64,
    pub page: i64,
    pub pages: i64,
    pub data: Vec<ResumeRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub resume_count: i64,
    pub ats_score_count: i64,
    pub average_ats_score: i64,
    pub latest_resume_date: Option<DateTime<Utc>>,
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ResumePayload>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    payload.resume.validate().map_err(AppError::Validation)?;

    let ats_score = ats::estimate(&payload.resume);
    let row = store::insert_resume(&state.db, user.id, &payload, ats_score).await?;
    info!("Created resume {} for user {} (estimate {})", row.id, user.id, ats_score);

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let page = Page::new(query.page, query.limit);
    let (data, total) = store::list_resumes(&state.db, user.id, page).await?;

    Ok(Json(ResumeListResponse {
        count: data.len(),
        total,
        page: page.page,
        pages: page.page_count(total),
        data,
    }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    store::view_resume(&state.db, user.id, id)
        .await?
        .map(Json)
        .ok_or_else(|| resume_not_found(id))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ResumePayload>,
) -> Result<Json<ResumeRow>, AppError> {
    payload.resume.validate().map_err(AppError::Validation)?;

    let ats_score = ats::estimate(&payload.resume);
    store::update_resume(&state.db, user.id, id, &payload, ats_score)
        .await?
        .map(Json)
        .ok_or_else(|| resume_not_found(id))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !store::delete_resume(&state.db, user.id, id).await? {
        return Err(resume_not_found(id));
    }
    info!("Deleted resume {id} for user {}", user.id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/ats
/// Runs the full text scorer over the flattened resume and records the result.
pub async fn handle_score_resume(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<AtsCheckResponse>, AppError> {
    let resume = store::get_resume(&state.db, user.id, id)
        .await?
        .ok_or_else(|| resume_not_found(id))?;

    let result = ats::score(&resume.data.to_resume_text());
    let row =
        score_store::insert_score(&state.db, user.id, &ScoreSource::Resume(id), &result).await?;
    info!("ATS check {} for resume {id}: score {}", row.id, result.score);

    Ok(Json(AtsCheckResponse { id: row.id, result }))
}

/// GET /api/v1/stats
pub async fn handle_stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = store::stats(&state.db, user.id).await?;
    Ok(Json(StatsResponse {
        resume_count: stats.resume_count,
        ats_score_count: stats.ats_score_count,
        average_ats_score: round_average(stats.average_ats_score),
        latest_resume_date: stats.latest_resume_date,
    }))
}

fn resume_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

/// Rounds half up; no scores yet reads as 0.
fn round_average(average: Option<f64>) -> i64 {
    average.map(|a| a.round() as i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_average() {
        assert_eq!(round_average(None), 0);
        assert_eq!(round_average(Some(72.5)), 73);
        assert_eq!(round_average(Some(72.49)), 72);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let value = serde_json::to_value(StatsResponse {
            resume_count: 2,
            ats_score_count: 3,
            average_ats_score: 71,
            latest_resume_date: None,
        })
        .unwrap();
        assert_eq!(value["resumeCount"], 2);
        assert_eq!(value["atsScoreCount"], 3);
        assert_eq!(value["averageAtsScore"], 71);
        assert!(value["latestResumeDate"].is_null());
    }
}
