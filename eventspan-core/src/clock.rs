//! Injectable current-time source.
//!
//! Every today-relative rule in the selection logic (no start dates in the
//! past, no times earlier than now on a same-day selection) reads the wall
//! clock through the [`Clock`] trait, so tests can pin "now" to a known
//! moment instead of inheriting whatever the host machine says.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Supplies the current local wall-clock moment.
pub trait Clock {
    /// The current date and time in local wall-clock terms.
    fn now(&self) -> NaiveDateTime;

    /// The current calendar date, derived from [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the real local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a single known moment.
///
/// Used by tests to make same-day filtering and past-date rejection
/// deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
