use crate::application::ports::time::Clock;
use chrono::{DateTime, SubsecRound, Utc};

/// Wall clock truncated to microseconds, the resolution Postgres keeps for
/// `TIMESTAMPTZ`, so in-memory and stored values compare equal.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}
