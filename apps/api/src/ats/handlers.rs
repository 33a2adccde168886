use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::ats::{self, store, ScoreResult};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::{ensure_scorable, DocumentKind, ExtractError};
use crate::models::ats_score::{AtsScoreRow, ScoreSource};
use crate::models::resume::StructuredResume;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct AtsCheckResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub result: ScoreResult,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub score: u32,
}

struct Upload {
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

/// POST /api/v1/ats/check
pub async fn handle_ats_check(
    State(state): State<AppState>,
    user: AuthUser,
    multipart: Multipart,
) -> Result<Json<AtsCheckResponse>, AppError> {
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;

    if DocumentKind::from_mime(&upload.content_type).is_none() {
        return Err(ExtractError::UnsupportedFormat(upload.content_type).into());
    }

    let file_size = upload.bytes.len() as i64;
    let text = state
        .extractor
        .extract(upload.bytes, &upload.content_type)
        .await?;
    ensure_scorable(&text, state.config.min_extracted_chars)?;

    let result = ats::score(&text);
    let source = ScoreSource::Upload {
        file_name: upload.file_name,
        file_type: upload.content_type,
        file_size,
    };
    let row = store::insert_score(&state.db, user.id, &source, &result).await?;

    info!(
        "ATS check {} for user {}: score {} ({} bytes)",
        row.id, user.id, result.score, file_size
    );

    Ok(Json(AtsCheckResponse { id: row.id, result }))
}

/// POST /api/v1/ats/estimate
pub async fn handle_estimate(Json(resume): Json<StructuredResume>) -> Json<EstimateResponse> {
    Json(EstimateResponse {
        score: ats::estimate(&resume),
    })
}

/// GET /api/v1/ats/scores
pub async fn handle_list_scores(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<AtsScoreRow>>, AppError> {
    let scores = store::list_scores(&state.db, user.id).await?;
    Ok(Json(scores))
}

/// GET /api/v1/ats/scores/:id
pub async fn handle_get_score(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<AtsScoreRow>, AppError> {
    store::get_score(&state.db, user.id, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("ATS score {id} not found")))
}

/// Pulls the `resume` field out of the form, skipping any other fields.
async fn read_upload(mut multipart: Multipart, max_bytes: usize) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;

        if bytes.len() > max_bytes {
            return Err(too_large(max_bytes));
        }
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        return Ok(Upload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{UPLOAD_FIELD}'"
    )))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload exceeds the request size limit".to_string())
    } else {
        AppError::Validation(err.body_text())
    }
}

fn too_large(max_bytes: usize) -> AppError {
    AppError::PayloadTooLarge(format!(
        "File is too large; the maximum size is {} MB",
        max_bytes / (1024 * 1024)
    ))
}
