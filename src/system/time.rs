//! Time keeping module for PineTime
//!
//! The RTC only counts uptime, so wall-clock time is a reference timestamp
//! plus the time elapsed since that reference was taken.

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use embassy_time::Instant;

#[derive(Clone, Copy)]
pub struct TimeReference {
    /// Local clock time at `instant`
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Reference from a UTC timestamp and the local offset from UTC, taken
    /// at `instant`.
    pub fn from_timestamp(utc_secs: i64, offset_secs: i32, instant: Instant) -> Option<Self> {
        let time = DateTime::from_timestamp(utc_secs + i64::from(offset_secs), 0)?.naive_utc();
        Some(Self { time, instant })
    }
}

/// Source of local wall-clock time
#[derive(Clone, Copy)]
pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference) -> Self {
        Self { reference }
    }

    /// Get current local time
    pub fn get_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference.time + TimeDelta::microseconds(elapsed.as_micros() as i64)
    }
}
