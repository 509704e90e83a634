// libs/schedule-status-cell/src/services/time.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::ScheduleStatusError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parse a calendar date. Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp,
/// in which case the date as written in the timestamp is used.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ScheduleStatusError> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.naive_local().date())
        .map_err(|_| ScheduleStatusError::MalformedTime {
            field,
            value: value.to_string(),
        })
}

/// Parse a wall-clock time of day in 24-hour `HH:MM` or `HH:MM:SS` form.
pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ScheduleStatusError> {
    let trimmed = value.trim();

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ScheduleStatusError::MalformedTime {
            field,
            value: value.to_string(),
        })
}

/// Parse a start/end pair and require `start < end`.
pub fn parse_interval(
    start_value: &str,
    end_value: &str,
) -> Result<(NaiveTime, NaiveTime), ScheduleStatusError> {
    let start = parse_time("start_time", start_value)?;
    let end = parse_time("end_time", end_value)?;

    if end <= start {
        return Err(ScheduleStatusError::InvalidInterval { start, end });
    }

    Ok((start, end))
}

pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

pub fn is_same_calendar_date(date: NaiveDate, now: NaiveDateTime) -> bool {
    date == now.date()
}
