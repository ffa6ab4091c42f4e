pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening;
use crate::settings;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route("/api/analyze", post(screening::handlers::handle_analyze))
        .route(
            "/api/candidates",
            get(screening::handlers::handle_list_candidates),
        )
        // Settings API
        .route(
            "/api/settings",
            get(settings::handlers::handle_get_settings)
                .post(settings::handlers::handle_save_settings),
        )
        // Resume uploads outgrow axum's 2 MB default body limit.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(state)
}
