// libs/schedule-status-cell/src/services/clock.rs
use chrono::{Local, NaiveDateTime};

/// Source of the current wall-clock instant. Read once per classification
/// pass and passed down explicitly.
pub trait ClockSource: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Device local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}
