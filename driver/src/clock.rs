use std::sync::Arc;

use parking_lot::Mutex;
use time::OffsetDateTime;

use kernel::interface::clock::Clock;

/// Wall clock of the running system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock pinned to a preset instant, movable from the outside. Tests inject
/// this to make rental timestamps deterministic.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<OffsetDateTime>>,
}

impl FixedClock {
    pub fn new(now: impl Into<OffsetDateTime>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now.into())),
        }
    }

    pub fn set(&self, now: impl Into<OffsetDateTime>) {
        *self.now.lock() = now.into();
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock()
    }
}
