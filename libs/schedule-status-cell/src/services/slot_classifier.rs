// libs/schedule-status-cell/src/services/slot_classifier.rs
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::models::{
    BookingRecommendation, ScheduleStatusError, Session, SlotState, SlotStatus, SlotSummary,
    SlotView, TimeSlot,
};
use crate::services::time::{combine, is_same_calendar_date, parse_date, parse_interval};

#[derive(Debug, Clone, Copy, Default)]
pub struct SlotClassifierService;

impl SlotClassifierService {
    pub fn new() -> Self {
        Self
    }

    /// Summarise the booking eligibility of a session's slots at `now`.
    pub fn classify(
        &self,
        session: &Session,
        now: NaiveDateTime,
    ) -> Result<SlotSummary, ScheduleStatusError> {
        if session.time_slots.is_empty() {
            debug!("Session {} has no time slots", session.id);
            return Ok(SlotSummary::empty());
        }

        let session_date = parse_date("date", &session.date)?;

        let slots = session
            .time_slots
            .iter()
            .map(|slot| self.classify_slot(session_date, slot, now))
            .collect::<Result<Vec<SlotView>, _>>()?;

        let total = slots.len();
        let available = count_state(&slots, SlotState::Available);
        let booked = count_state(&slots, SlotState::Booked);
        let time_passed = count_state(&slots, SlotState::TimePassed);

        let is_fully_booked = booked == total;
        let is_all_time_passed = time_passed == total && booked == 0;
        let has_available_slots = available > 0;

        let recommendation = recommend(has_available_slots, is_fully_booked, is_all_time_passed);

        debug!(
            "Session {} on {}: {} available, {} booked, {} time passed -> {}",
            session.id, session_date, available, booked, time_passed, recommendation
        );

        Ok(SlotSummary {
            total,
            available,
            booked,
            time_passed,
            is_fully_booked,
            is_all_time_passed,
            has_available_slots,
            recommendation,
            recommendation_label: recommendation.label().to_string(),
            first_slot_start: slots.first().map(|slot| slot.start_time),
            last_slot_end: slots.last().map(|slot| slot.end_time),
            slots,
        })
    }

    /// Effective state of one slot on `session_date` at `now`.
    pub fn classify_slot(
        &self,
        session_date: NaiveDate,
        slot: &TimeSlot,
        now: NaiveDateTime,
    ) -> Result<SlotView, ScheduleStatusError> {
        let (start_time, end_time) = parse_interval(&slot.start_time, &slot.end_time)?;

        let state = match slot.status {
            SlotStatus::Booked => SlotState::Booked,
            SlotStatus::Available => {
                // Only today's slots can have elapsed; other dates are taken as offered
                if is_same_calendar_date(session_date, now) && now > combine(session_date, start_time)
                {
                    SlotState::TimePassed
                } else {
                    SlotState::Available
                }
            }
            SlotStatus::Unavailable | SlotStatus::Unknown => SlotState::TimePassed,
        };

        Ok(SlotView {
            start_time,
            end_time,
            stored_status: slot.status,
            state,
        })
    }
}

fn count_state(slots: &[SlotView], state: SlotState) -> usize {
    slots.iter().filter(|slot| slot.state == state).count()
}

fn recommend(
    has_available_slots: bool,
    is_fully_booked: bool,
    is_all_time_passed: bool,
) -> BookingRecommendation {
    if has_available_slots {
        BookingRecommendation::BookAppointment
    } else if is_fully_booked {
        BookingRecommendation::FullyBooked
    } else if is_all_time_passed {
        BookingRecommendation::TimePassed
    } else {
        BookingRecommendation::NoAvailableSlots
    }
}
