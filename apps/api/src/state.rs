use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::extract::DocumentExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable document-to-text converter. Default: LocalExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}
