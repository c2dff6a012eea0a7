pub mod score;
pub mod system;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", axum::routing::get(system::health))
        .route("/api/score-name", axum::routing::post(score::score_name))
        .route(
            "/api/compare-names",
            axum::routing::post(score::compare_names),
        )
}
