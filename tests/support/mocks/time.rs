// tests/support/mocks/time.rs
use attendance_audit::application::ports::time::Clock;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

/// Fixed timestamp shared by every test.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Starts at [`fixed_now`] and moves one second forward on every read, so
/// consecutive events get distinct server timestamps.
#[derive(Debug, Default)]
pub struct TickingClock {
    ticks: AtomicI64,
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}
