use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::resume::{ResumePayload, ResumeRow};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;
pub const MAX_PAGE: i64 = 1_000_000;

/// Normalised page window for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: i64,
    pub limit: i64,
}

impl Page {
    /// Clamps raw query values: page stays within 1..=1_000_000, limit within 1..=100.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Page {
            page: page.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Number of pages needed for `total` rows.
    pub fn page_count(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct StatsRow {
    pub resume_count: i64,
    pub ats_score_count: i64,
    pub average_ats_score: Option<f64>,
    pub latest_resume_date: Option<DateTime<Utc>>,
}

pub async fn insert_resume(
    pool: &PgPool,
    user_id: Uuid,
    payload: &ResumePayload,
    ats_score: u32,
) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, data, template, ats_score, is_public)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(Json(&payload.resume))
    .bind(payload.template.as_str())
    .bind(ats_score as i32)
    .bind(payload.is_public)
    .fetch_one(pool)
    .await
}

/// One page of the caller's resumes, most recently edited first, plus the
/// total count.
pub async fn list_resumes(
    pool: &PgPool,
    user_id: Uuid,
    page: Page,
) -> Result<(Vec<ResumeRow>, i64), sqlx::Error> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        r#"
        SELECT * FROM resumes
        WHERE user_id = $1
        ORDER BY updated_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(page.limit)
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resumes WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok((rows, total))
}

/// Fetches a resume and counts the view in the same statement.
pub async fn view_resume(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes SET view_count = view_count + 1
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Reads a resume without touching its view count.
pub async fn get_resume(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn update_resume(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    payload: &ResumePayload,
    ats_score: u32,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET data = $3, template = $4, ats_score = $5, is_public = $6, updated_at = now()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(Json(&payload.resume))
    .bind(payload.template.as_str())
    .bind(ats_score as i32)
    .bind(payload.is_public)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was deleted. Linked score records go with it
/// (`ON DELETE CASCADE`).
pub async fn delete_resume(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn stats(pool: &PgPool, user_id: Uuid) -> Result<StatsRow, sqlx::Error> {
    sqlx::query_as::<_, StatsRow>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM resumes WHERE user_id = $1) AS resume_count,
            (SELECT COUNT(*) FROM ats_scores WHERE user_id = $1) AS ats_score_count,
            (SELECT AVG(score)::float8 FROM ats_scores WHERE user_id = $1) AS average_ats_score,
            (SELECT MAX(updated_at) FROM resumes WHERE user_id = $1) AS latest_resume_date
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults() {
        assert_eq!(Page::new(None, None), Page { page: 1, limit: 10 });
    }

    #[test]
    fn test_page_clamps_out_of_range_values() {
        assert_eq!(Page::new(Some(0), Some(500)), Page { page: 1, limit: 100 });
        assert_eq!(Page::new(Some(-3), Some(0)), Page { page: 1, limit: 1 });
    }

    #[test]
    fn test_huge_page_is_clamped_before_offset() {
        let page = Page::new(Some(i64::MAX), Some(100));
        assert_eq!(page.page, MAX_PAGE);
        assert_eq!(page.offset(), (MAX_PAGE - 1) * 100);
    }

    #[test]
    fn test_offset_and_page_count() {
        let page = Page::new(Some(3), Some(10));
        assert_eq!(page.offset(), 20);
        assert_eq!(page.page_count(0), 0);
        assert_eq!(page.page_count(10), 1);
        assert_eq!(page.page_count(21), 3);
    }
}
