// libs/schedule-status-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers::{self, ScheduleStatusState};
use crate::services::ClockSource;

pub fn schedule_status_routes(config: Arc<AppConfig>) -> Router {
    routes_with_state(Arc::new(ScheduleStatusState::new(config)))
}

/// Same routes with an explicit clock, for deterministic callers and tests.
pub fn schedule_status_routes_with_clock(
    config: Arc<AppConfig>,
    clock: Arc<dyn ClockSource>,
) -> Router {
    routes_with_state(Arc::new(ScheduleStatusState::with_clock(config, clock)))
}

fn routes_with_state(state: Arc<ScheduleStatusState>) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        // Doctor sessions and their slots
        .route("/sessions/summary", post(handlers::classify_session))
        .route("/sessions/summaries", post(handlers::classify_sessions))
        // Patient appointment lists
        .route("/appointments/status", post(handlers::classify_appointment))
        .route("/appointments/partition", post(handlers::partition_appointments))
        .with_state(state)
}
