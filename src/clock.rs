//! Time source abstraction.
//!
//! Overdue is a derived predicate, re-evaluated against the current instant
//! on every call. All time reads go through a [`Clock`] so that tests can
//! pin the instant instead of racing the wall clock.

use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock. What [`crate::TaskManager::new`] installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant. Inject via
/// [`crate::TaskManager::with_clock`] for deterministic overdue checks.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = Utc.with_ymd_and_hms(2026, 2, 11, 9, 30, 0).unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
