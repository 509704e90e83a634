// libs/schedule-status-cell/src/models.rs
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use shared_models::error::AppError;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

// ==============================================================================
// SCHEDULE RECORDS (as supplied by the scheduling data source)
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Booked,
    Unavailable,
    // Stored status this service does not recognise
    #[serde(other)]
    Unknown,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotStatus::Available => write!(f, "available"),
            SlotStatus::Booked => write!(f, "booked"),
            SlotStatus::Unavailable => write!(f, "unavailable"),
            SlotStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
    pub status: SlotStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationMode {
    InPerson,
    Video,
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationMode::InPerson => write!(f, "in-person"),
            ConsultationMode::Video => write!(f, "video"),
        }
    }
}

/// A doctor's published block of time on one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub date: String,
    pub session_type: ConsultationMode,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

// ==============================================================================
// APPOINTMENT RECORDS (as supplied by the appointment data source)
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
    Rescheduled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::InProgress => write!(f, "in_progress"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "no_show"),
            AppointmentStatus::Rescheduled => write!(f, "rescheduled"),
        }
    }
}

/// A confirmed booking. The interval is copied from the originating slot at
/// booking time and never re-read from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: AppointmentStatus,
    pub consultation_mode: ConsultationMode,
    pub hospital_id: Option<Uuid>,
}

// ==============================================================================
// SLOT CLASSIFICATION OUTPUT
// ==============================================================================

/// Effective state of a slot at a given instant. `TimePassed` is never
/// written back to the stored status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    Available,
    Booked,
    TimePassed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingRecommendation {
    NoSlotsAvailable,
    BookAppointment,
    FullyBooked,
    TimePassed,
    NoAvailableSlots,
}

impl BookingRecommendation {
    pub fn label(&self) -> &'static str {
        match self {
            BookingRecommendation::NoSlotsAvailable => "No Slots Available",
            BookingRecommendation::BookAppointment => "Book Appointment",
            BookingRecommendation::FullyBooked => "Fully Booked",
            BookingRecommendation::TimePassed => "Time Passed",
            BookingRecommendation::NoAvailableSlots => "No Available Slots",
        }
    }

    pub fn allows_booking(&self) -> bool {
        matches!(self, BookingRecommendation::BookAppointment)
    }
}

impl fmt::Display for BookingRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotView {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub stored_status: SlotStatus,
    pub state: SlotState,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotSummary {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
    pub time_passed: usize,
    pub is_fully_booked: bool,
    pub is_all_time_passed: bool,
    pub has_available_slots: bool,
    pub recommendation: BookingRecommendation,
    pub recommendation_label: String,
    pub first_slot_start: Option<NaiveTime>,
    pub last_slot_end: Option<NaiveTime>,
    pub slots: Vec<SlotView>,
}

impl SlotSummary {
    pub fn empty() -> Self {
        let recommendation = BookingRecommendation::NoSlotsAvailable;
        Self {
            total: 0,
            available: 0,
            booked: 0,
            time_passed: 0,
            is_fully_booked: false,
            is_all_time_passed: false,
            has_available_slots: false,
            recommendation,
            recommendation_label: recommendation.label().to_string(),
            first_slot_start: None,
            last_slot_end: None,
            slots: Vec::new(),
        }
    }
}

// ==============================================================================
// APPOINTMENT CLASSIFICATION OUTPUT
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentBucket {
    Upcoming,
    Past,
}

impl fmt::Display for AppointmentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentBucket::Upcoming => write!(f, "upcoming"),
            AppointmentBucket::Past => write!(f, "past"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentClassification {
    pub bucket: AppointmentBucket,
    pub is_ongoing: bool,
    pub join_call_available: bool,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnclassifiedAppointment {
    pub id: Uuid,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartitionedAppointments {
    pub upcoming: Vec<Appointment>,
    pub past: Vec<Appointment>,
    pub ongoing_ids: HashSet<Uuid>,
    pub unclassified: Vec<UnclassifiedAppointment>,
}

impl PartitionedAppointments {
    pub fn classified_count(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummaryRequest {
    pub session: Session,
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummariesRequest {
    pub sessions: Vec<Session>,
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummaryResult {
    pub session_id: Uuid,
    pub summary: Option<SlotSummary>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentStatusRequest {
    pub appointment: Appointment,
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionAppointmentsRequest {
    pub appointments: Vec<Appointment>,
    pub now: Option<NaiveDateTime>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleStatusError {
    #[error("Malformed {field}: '{value}'")]
    MalformedTime { field: &'static str, value: String },

    #[error("Invalid interval: end {end} is not after start {start}")]
    InvalidInterval { start: NaiveTime, end: NaiveTime },
}

impl From<ScheduleStatusError> for AppError {
    fn from(err: ScheduleStatusError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
