use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::ats::AnalysisResult;

/// A persisted ATS check, either of an uploaded document or of a stored resume.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resume_id: Option<Uuid>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub score: i32,
    pub analysis: Json<AnalysisResult>,
    pub recommendations: Vec<String>,
    pub checked_at: DateTime<Utc>,
}

/// Where a scored text came from.
#[derive(Debug, Clone)]
pub enum ScoreSource {
    Upload {
        file_name: String,
        file_type: String,
        file_size: i64,
    },
    Resume(Uuid),
}
