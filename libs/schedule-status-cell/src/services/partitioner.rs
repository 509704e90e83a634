// libs/schedule-status-cell/src/services/partitioner.rs
use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::models::{
    Appointment, AppointmentBucket, PartitionedAppointments, UnclassifiedAppointment,
};
use crate::services::appointment_status::AppointmentStatusService;

#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentPartitionService {
    status_service: AppointmentStatusService,
}

impl AppointmentPartitionService {
    pub fn new() -> Self {
        Self {
            status_service: AppointmentStatusService::new(),
        }
    }

    /// Split appointments into upcoming and past lists, keeping input order
    /// within each list. A record that cannot be classified is reported in
    /// `unclassified` and left out of both lists.
    pub fn partition(
        &self,
        appointments: &[Appointment],
        now: NaiveDateTime,
    ) -> PartitionedAppointments {
        let mut partitioned = PartitionedAppointments::default();

        for appointment in appointments {
            match self.status_service.classify(appointment, now) {
                Ok(status) => {
                    if status.is_ongoing {
                        partitioned.ongoing_ids.insert(appointment.id);
                    }

                    match status.bucket {
                        AppointmentBucket::Upcoming => partitioned.upcoming.push(appointment.clone()),
                        AppointmentBucket::Past => partitioned.past.push(appointment.clone()),
                    }
                }
                Err(e) => {
                    warn!("Skipping appointment {}: {}", appointment.id, e);
                    partitioned.unclassified.push(UnclassifiedAppointment {
                        id: appointment.id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "Partitioned {} appointments: {} upcoming, {} past, {} ongoing, {} unclassified",
            appointments.len(),
            partitioned.upcoming.len(),
            partitioned.past.len(),
            partitioned.ongoing_ids.len(),
            partitioned.unclassified.len()
        );

        partitioned
    }
}
