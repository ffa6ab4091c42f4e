use sqlx::PgPool;

use crate::ai::AiClient;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub ai: AiClient,
    /// Compiled-in defaults for every settings key absent from the table.
    pub config: Config,
}
