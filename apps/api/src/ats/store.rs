use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::ats::ScoreResult;
use crate::models::ats_score::{AtsScoreRow, ScoreSource};

/// Most recent checks returned by the history listing.
pub const HISTORY_LIMIT: i64 = 50;

/// Persists one scoring result for `user_id`.
pub async fn insert_score(
    pool: &PgPool,
    user_id: Uuid,
    source: &ScoreSource,
    result: &ScoreResult,
) -> Result<AtsScoreRow, sqlx::Error> {
    let (resume_id, file_name, file_type, file_size) = match source {
        ScoreSource::Upload {
            file_name,
            file_type,
            file_size,
        } => (
            None,
            Some(file_name.as_str()),
            Some(file_type.as_str()),
            Some(*file_size),
        ),
        ScoreSource::Resume(id) => (Some(*id), None, None, None),
    };

    sqlx::query_as::<_, AtsScoreRow>(
        r#"
        INSERT INTO ats_scores
            (id, user_id, resume_id, file_name, file_type, file_size,
             score, analysis, recommendations)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(resume_id)
    .bind(file_name)
    .bind(file_type)
    .bind(file_size)
    .bind(result.score as i32)
    .bind(Json(&result.analysis))
    .bind(&result.recommendations)
    .fetch_one(pool)
    .await
}

/// Latest checks for `user_id`, newest first.
pub async fn list_scores(pool: &PgPool, user_id: Uuid) -> Result<Vec<AtsScoreRow>, sqlx::Error> {
    sqlx::query_as::<_, AtsScoreRow>(
        "SELECT * FROM ats_scores WHERE user_id = $1 ORDER BY checked_at DESC LIMIT $2",
    )
    .bind(user_id)
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await
}

/// One check, only if `user_id` owns it.
pub async fn get_score(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<AtsScoreRow>, sqlx::Error> {
    sqlx::query_as::<_, AtsScoreRow>("SELECT * FROM ats_scores WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
