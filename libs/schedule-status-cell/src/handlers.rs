// libs/schedule-status-cell/src/handlers.rs
use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::NaiveDateTime;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{
    AppointmentStatusRequest, PartitionAppointmentsRequest, SessionSummariesRequest,
    SessionSummaryRequest, SessionSummaryResult,
};
use crate::services::{
    AppointmentPartitionService, AppointmentStatusService, ClockSource, FixedClock,
    SlotClassifierService, SystemClock,
};

pub struct ScheduleStatusState {
    config: Arc<AppConfig>,
    clock: Arc<dyn ClockSource>,
    slot_classifier: SlotClassifierService,
    appointment_status: AppointmentStatusService,
    partitioner: AppointmentPartitionService,
}

impl ScheduleStatusState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let clock: Arc<dyn ClockSource> = match config.fixed_now {
            Some(instant) => Arc::new(FixedClock::new(instant)),
            None => Arc::new(SystemClock),
        };

        Self::with_clock(config, clock)
    }

    pub fn with_clock(config: Arc<AppConfig>, clock: Arc<dyn ClockSource>) -> Self {
        Self {
            config,
            clock,
            slot_classifier: SlotClassifierService::new(),
            appointment_status: AppointmentStatusService::new(),
            partitioner: AppointmentPartitionService::new(),
        }
    }

    /// The instant for one request: the caller's override or a single clock read.
    fn resolve_now(&self, requested: Option<NaiveDateTime>) -> NaiveDateTime {
        requested.unwrap_or_else(|| self.clock.now())
    }
}

#[instrument(skip_all)]
pub async fn get_health(State(state): State<Arc<ScheduleStatusState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "clock": if state.config.is_clock_pinned() { "fixed" } else { "system" },
        "now": state.clock.now(),
    }))
}

#[instrument(skip_all)]
pub async fn classify_session(
    State(state): State<Arc<ScheduleStatusState>>,
    Json(request): Json<SessionSummaryRequest>,
) -> Result<Json<Value>, AppError> {
    let now = state.resolve_now(request.now);
    debug!("Classifying session {} at {}", request.session.id, now);
    let summary = state.slot_classifier.classify(&request.session, now)?;

    Ok(Json(json!({
        "session_id": request.session.id,
        "now": now,
        "summary": summary,
    })))
}

#[instrument(skip_all)]
pub async fn classify_sessions(
    State(state): State<Arc<ScheduleStatusState>>,
    Json(request): Json<SessionSummariesRequest>,
) -> Result<Json<Value>, AppError> {
    let now = state.resolve_now(request.now);

    let results: Vec<SessionSummaryResult> = request
        .sessions
        .iter()
        .map(|session| match state.slot_classifier.classify(session, now) {
            Ok(summary) => SessionSummaryResult {
                session_id: session.id,
                summary: Some(summary),
                error: None,
            },
            Err(e) => {
                warn!("Could not classify session {}: {}", session.id, e);
                SessionSummaryResult {
                    session_id: session.id,
                    summary: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    let failed = results.iter().filter(|result| result.error.is_some()).count();
    info!("Classified {} sessions ({} failed)", results.len(), failed);

    Ok(Json(json!({
        "now": now,
        "results": results,
        "total": results.len(),
        "failed": failed,
    })))
}

#[instrument(skip_all)]
pub async fn classify_appointment(
    State(state): State<Arc<ScheduleStatusState>>,
    Json(request): Json<AppointmentStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let now = state.resolve_now(request.now);
    debug!("Classifying appointment {} at {}", request.appointment.id, now);
    let classification = state.appointment_status.classify(&request.appointment, now)?;

    Ok(Json(json!({
        "appointment_id": request.appointment.id,
        "now": now,
        "classification": classification,
    })))
}

#[instrument(skip_all)]
pub async fn partition_appointments(
    State(state): State<Arc<ScheduleStatusState>>,
    Json(request): Json<PartitionAppointmentsRequest>,
) -> Result<Json<Value>, AppError> {
    let now = state.resolve_now(request.now);
    let partitioned = state.partitioner.partition(&request.appointments, now);

    Ok(Json(json!({
        "now": now,
        "upcoming": partitioned.upcoming,
        "past": partitioned.past,
        "ongoing_ids": partitioned.ongoing_ids,
        "unclassified": partitioned.unclassified,
    })))
}
