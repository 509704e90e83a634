// libs/schedule-status-cell/src/services/appointment_status.rs
use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::{
    Appointment, AppointmentBucket, AppointmentClassification, ConsultationMode,
    ScheduleStatusError,
};
use crate::services::time::{combine, parse_date, parse_interval};

#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentStatusService;

impl AppointmentStatusService {
    pub fn new() -> Self {
        Self
    }

    /// Place an appointment in the upcoming/past bucket at `now` and flag it
    /// as ongoing when `now` falls inside its booked interval (both ends
    /// inclusive). Ongoing appointments stay in the upcoming bucket.
    pub fn classify(
        &self,
        appointment: &Appointment,
        now: NaiveDateTime,
    ) -> Result<AppointmentClassification, ScheduleStatusError> {
        let date = parse_date("date", &appointment.date)?;
        let (start_time, end_time) = parse_interval(&appointment.start_time, &appointment.end_time)?;

        let starts_at = combine(date, start_time);
        let ends_at = combine(date, end_time);

        let is_ongoing = now >= starts_at && now <= ends_at;
        let bucket = if now > ends_at {
            AppointmentBucket::Past
        } else {
            AppointmentBucket::Upcoming
        };

        debug!(
            "Appointment {} ({}): bucket={}, ongoing={}",
            appointment.id, appointment.status, bucket, is_ongoing
        );

        Ok(AppointmentClassification {
            bucket,
            is_ongoing,
            join_call_available: is_ongoing
                && appointment.consultation_mode == ConsultationMode::Video,
            starts_at,
            ends_at,
        })
    }
}
