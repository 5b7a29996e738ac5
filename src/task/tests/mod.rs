//! Unit tests for the task module.
//!
//! Tests are organised by concern: domain validation and completion
//! reconciliation, registration orchestration, bulk reconciliation
//! orchestration, and the persistence adapters. Date-sensitive tests
//! pin the clock to fixed instants rather than reading wall time.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

mod reconciler_tests;

/// Clock pinned to a fixed instant for deterministic assertions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a UTC instant from calendar parts.
pub fn utc_instant(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("unambiguous UTC instant")
}
