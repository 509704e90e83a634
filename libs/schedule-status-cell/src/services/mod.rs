pub mod time;
pub mod clock;
pub mod slot_classifier;
pub mod appointment_status;
pub mod partitioner;

pub use clock::{ClockSource, FixedClock, SystemClock};
pub use slot_classifier::SlotClassifierService;
pub use appointment_status::AppointmentStatusService;
pub use partitioner::AppointmentPartitionService;
