use chrono::{DateTime, Local};

/// wall-clock access for route option building. injected rather than read
/// ambiently so that rush-hour and arrival-time logic is deterministic
/// under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// the system wall clock.
#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// a clock pinned to a single instant. used in synchronous contexts like
/// scripting or testing.
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
