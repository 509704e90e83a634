use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use schedule_status_cell::router::schedule_status_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Schedule Status API is running!" }))
        .nest("/schedule-status", schedule_status_routes(state.clone()))
}
