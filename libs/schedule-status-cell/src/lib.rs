// =====================================================================================
// SCHEDULE STATUS CELL
// =====================================================================================
//
// Derives the current booking eligibility of a doctor's session slots and the
// current upcoming/ongoing/past standing of patient appointments from the
// stored schedule data and an injected "now". Nothing here writes back to the
// stored records.
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    Appointment, AppointmentBucket, AppointmentClassification, AppointmentStatus,
    BookingRecommendation, ConsultationMode, PartitionedAppointments, ScheduleStatusError,
    Session, SlotState, SlotStatus, SlotSummary, SlotView, TimeSlot, UnclassifiedAppointment,
};

pub use services::{
    AppointmentPartitionService, AppointmentStatusService, ClockSource, FixedClock,
    SlotClassifierService, SystemClock,
};

pub use router::{schedule_status_routes, schedule_status_routes_with_clock};
