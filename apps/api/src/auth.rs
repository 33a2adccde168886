use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;

/// Header carrying the caller's identity, set by the upstream auth provider
/// after it has verified the session.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated owner of the request. Every resume and score query is
/// scoped to this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .ok_or(AppError::Unauthorized)?;
        Ok(AuthUser { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<AuthUser, AppError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(USER_ID_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AuthUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_header_yields_user() {
        let id = Uuid::new_v4();
        let user = extract(Some(&id.to_string())).await.unwrap();
        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        assert!(matches!(extract(None).await, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_malformed_header_is_unauthorized() {
        assert!(matches!(
            extract(Some("not-a-uuid")).await,
            Err(AppError::Unauthorized)
        ));
    }
}
