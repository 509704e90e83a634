// libs/schedule-status-cell/tests/classifier_test.rs
//
// Slot and appointment classification across day and slot boundaries.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::json;
use uuid::Uuid;

use schedule_status_cell::{
    Appointment, AppointmentBucket, AppointmentPartitionService, AppointmentStatus,
    AppointmentStatusService, BookingRecommendation, ClockSource, ConsultationMode, FixedClock,
    Session, SlotClassifierService, SlotState, SlotStatus, TimeSlot,
};

// ==============================================================================
// TEST FIXTURES
// ==============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
}

fn today_at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    today().and_hms_opt(hour, minute, second).unwrap()
}

fn slot(start: &str, end: &str, status: SlotStatus) -> TimeSlot {
    TimeSlot {
        start_time: start.to_string(),
        end_time: end.to_string(),
        status,
    }
}

fn session(date: NaiveDate, time_slots: Vec<TimeSlot>) -> Session {
    Session {
        id: Uuid::new_v4(),
        doctor_id: Uuid::new_v4(),
        date: date.format("%Y-%m-%d").to_string(),
        session_type: ConsultationMode::InPerson,
        time_slots,
    }
}

fn appointment(date: NaiveDate, start: &str, end: &str) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        doctor_id: Uuid::new_v4(),
        date: date.format("%Y-%m-%d").to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        status: AppointmentStatus::Confirmed,
        consultation_mode: ConsultationMode::Video,
        hospital_id: None,
    }
}

// ==============================================================================
// SLOT CLASSIFIER
// ==============================================================================

#[test]
fn test_booking_scenario_mid_morning() {
    let classifier = SlotClassifierService::new();
    let clinic_day = session(
        today(),
        vec![
            slot("08:00", "08:30", SlotStatus::Available),
            slot("09:00", "09:30", SlotStatus::Booked),
            slot("10:00", "10:30", SlotStatus::Available),
        ],
    );

    let summary = classifier.classify(&clinic_day, today_at(9, 15, 0)).unwrap();

    assert_eq!(summary.available, 1);
    assert_eq!(summary.booked, 1);
    assert_eq!(summary.time_passed, 1);
    assert!(summary.has_available_slots);
    assert_eq!(summary.recommendation, BookingRecommendation::BookAppointment);
    assert_eq!(summary.recommendation_label, "Book Appointment");
    assert!(summary.recommendation.allows_booking());

    // Stored data is untouched
    assert_eq!(clinic_day.time_slots[0].status, SlotStatus::Available);
}

#[test]
fn test_booked_slots_never_count_as_available_or_passed() {
    let classifier = SlotClassifierService::new();
    let clinic_day = session(
        today(),
        vec![
            slot("08:00", "08:30", SlotStatus::Booked),
            slot("20:00", "20:30", SlotStatus::Booked),
        ],
    );

    for now in [today_at(0, 0, 0), today_at(12, 0, 0), today_at(23, 59, 59)] {
        let summary = classifier.classify(&clinic_day, now).unwrap();
        assert_eq!(summary.booked, 2);
        assert_eq!(summary.available, 0);
        assert_eq!(summary.time_passed, 0);
    }
}

#[test]
fn test_future_session_slots_stay_available() {
    let classifier = SlotClassifierService::new();
    let tomorrow = today() + Duration::days(1);
    let clinic_day = session(
        tomorrow,
        vec![
            slot("00:00", "00:30", SlotStatus::Available),
            slot("08:00", "08:30", SlotStatus::Available),
        ],
    );

    // Late in the evening: time of day is past both slots, date is not
    let summary = classifier.classify(&clinic_day, today_at(23, 0, 0)).unwrap();

    assert_eq!(summary.available, 2);
    assert_eq!(summary.time_passed, 0);
    assert!(summary.slots.iter().all(|view| view.state == SlotState::Available));
}

#[test]
fn test_past_dated_session_is_left_to_the_caller() {
    let classifier = SlotClassifierService::new();
    let yesterday = today() - Duration::days(1);
    let clinic_day = session(yesterday, vec![slot("08:00", "08:30", SlotStatus::Available)]);

    let summary = classifier.classify(&clinic_day, today_at(9, 0, 0)).unwrap();

    assert_eq!(summary.available, 1);
    assert_eq!(summary.time_passed, 0);
}

#[test]
fn test_day_boundary_midnight() {
    let classifier = SlotClassifierService::new();
    let clinic_day = session(today(), vec![slot("23:30", "23:59", SlotStatus::Available)]);

    let before = classifier.classify(&clinic_day, today_at(23, 29, 59)).unwrap();
    assert_eq!(before.available, 1);

    let after = classifier.classify(&clinic_day, today_at(23, 30, 1)).unwrap();
    assert_eq!(after.time_passed, 1);
    assert_eq!(after.recommendation_label, "Time Passed");

    // Once the date rolls over the session is no longer "today"
    let next_day = (today() + Duration::days(1)).and_hms_opt(0, 0, 1).unwrap();
    let rolled = classifier.classify(&clinic_day, next_day).unwrap();
    assert_eq!(rolled.available, 1);
}

#[test]
fn test_available_wins_over_booked() {
    let classifier = SlotClassifierService::new();
    let clinic_day = session(
        today(),
        vec![
            slot("10:00", "10:30", SlotStatus::Booked),
            slot("11:00", "11:30", SlotStatus::Booked),
            slot("12:00", "12:30", SlotStatus::Available),
        ],
    );

    let summary = classifier.classify(&clinic_day, today_at(9, 0, 0)).unwrap();

    assert_eq!(summary.available, 1);
    assert_eq!(summary.booked, 2);
    assert_eq!(summary.time_passed, 0);
    assert_eq!(summary.recommendation_label, "Book Appointment");
}

#[test]
fn test_fully_booked() {
    let classifier = SlotClassifierService::new();
    let clinic_day = session(
        today(),
        vec![
            slot("10:00", "10:30", SlotStatus::Booked),
            slot("11:00", "11:30", SlotStatus::Booked),
            slot("12:00", "12:30", SlotStatus::Booked),
        ],
    );

    let summary = classifier.classify(&clinic_day, today_at(9, 0, 0)).unwrap();

    assert_eq!(summary.total, 3);
    assert!(summary.is_fully_booked);
    assert_eq!(summary.recommendation, BookingRecommendation::FullyBooked);
    assert_eq!(summary.recommendation_label, "Fully Booked");
}

#[test]
fn test_all_time_passed() {
    let classifier = SlotClassifierService::new();
    let clinic_day = session(
        today(),
        vec![
            slot("08:00", "08:30", SlotStatus::Available),
            slot("09:00", "09:30", SlotStatus::Available),
        ],
    );

    let summary = classifier.classify(&clinic_day, today_at(17, 0, 0)).unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.booked, 0);
    assert_eq!(summary.time_passed, 2);
    assert!(summary.is_all_time_passed);
    assert_eq!(summary.recommendation_label, "Time Passed");
}

#[test]
fn test_empty_session_has_no_slots() {
    let classifier = SlotClassifierService::new();
    let summary = classifier
        .classify(&session(today(), vec![]), today_at(9, 0, 0))
        .unwrap();

    assert_eq!(summary.total, 0);
    assert!(!summary.has_available_slots);
    assert_eq!(summary.recommendation_label, "No Slots Available");
}

#[test]
fn test_session_from_data_source_json() {
    let classifier = SlotClassifierService::new();
    let payload = json!({
        "id": Uuid::new_v4(),
        "doctor_id": Uuid::new_v4(),
        "date": "2025-06-20T00:00:00.000Z",
        "session_type": "video",
        "time_slots": [
            { "start_time": "08:00:00", "end_time": "08:30:00", "status": "available" },
            { "start_time": "09:00:00", "end_time": "09:30:00", "status": "blocked_by_admin" },
            { "start_time": "10:00:00", "end_time": "10:30:00", "status": "available" }
        ]
    });

    let clinic_day: Session = serde_json::from_value(payload).unwrap();
    assert_eq!(clinic_day.session_type, ConsultationMode::Video);
    assert_eq!(clinic_day.time_slots[1].status, SlotStatus::Unknown);

    let summary = classifier.classify(&clinic_day, today_at(9, 15, 0)).unwrap();

    assert_eq!(summary.available, 1);
    assert_eq!(summary.time_passed, 2);
    assert_eq!(summary.booked, 0);
}

// ==============================================================================
// APPOINTMENT STATUS AND PARTITIONING
// ==============================================================================

#[test]
fn test_appointment_ongoing_at_exact_start() {
    let classifier = AppointmentStatusService::new();
    let consult = appointment(today(), "14:00", "14:30");

    let status = classifier.classify(&consult, today_at(14, 0, 0)).unwrap();

    assert!(status.is_ongoing);
    assert_eq!(status.bucket, AppointmentBucket::Upcoming);
}

#[test]
fn test_appointment_buckets_around_interval() {
    let classifier = AppointmentStatusService::new();
    let consult = appointment(today(), "14:00", "14:30");

    let before = classifier.classify(&consult, today_at(13, 0, 0)).unwrap();
    assert_eq!(before.bucket, AppointmentBucket::Upcoming);
    assert!(!before.is_ongoing);

    let during = classifier.classify(&consult, today_at(14, 15, 0)).unwrap();
    assert_eq!(during.bucket, AppointmentBucket::Upcoming);
    assert!(during.is_ongoing);

    let after = classifier.classify(&consult, today_at(15, 0, 0)).unwrap();
    assert_eq!(after.bucket, AppointmentBucket::Past);
    assert!(!after.is_ongoing);
}

#[test]
fn test_partition_sizes_sum_to_input() {
    let partitioner = AppointmentPartitionService::new();
    let clock = FixedClock::new(today_at(10, 15, 0));

    let appointments: Vec<Appointment> = (-3..=3)
        .map(|offset| appointment(today() + Duration::days(offset), "10:00", "10:30"))
        .collect();

    let partitioned = partitioner.partition(&appointments, clock.now());

    assert_eq!(partitioned.upcoming.len() + partitioned.past.len(), appointments.len());
    assert_eq!(partitioned.past.len(), 3);
    assert_eq!(partitioned.upcoming.len(), 4);
    assert_eq!(partitioned.ongoing_ids.len(), 1);

    for past in &partitioned.past {
        assert!(partitioned.upcoming.iter().all(|upcoming| upcoming.id != past.id));
    }
}

#[test]
fn test_one_clock_read_keeps_surfaces_consistent() {
    let slots = SlotClassifierService::new();
    let statuses = AppointmentStatusService::new();
    let clock = FixedClock::new(today_at(9, 0, 0));
    let now = clock.now();

    // The 09:00 slot and the 09:00 appointment booked from it agree at the boundary
    let clinic_day = session(today(), vec![slot("09:00", "09:30", SlotStatus::Available)]);
    let consult = appointment(today(), "09:00", "09:30");

    let summary = slots.classify(&clinic_day, now).unwrap();
    let status = statuses.classify(&consult, now).unwrap();

    assert_eq!(summary.slots[0].state, SlotState::Available);
    assert!(status.is_ongoing);
    assert_eq!(status.bucket, AppointmentBucket::Upcoming);
}
