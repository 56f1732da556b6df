// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use kiosk_core::application::ports::time::Clock;
use std::sync::Mutex;

/// Clock that only moves when told to, one second per tick by default so
/// consecutive inserts get distinct timestamps.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap())
    }

    pub fn at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
            step: Duration::seconds(1),
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap();
        let current = *now;
        *now = current + self.step;
        current
    }
}
