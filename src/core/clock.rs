//! Wall-clock abstraction.
//!
//! All engine components read time through [`Clock`] so tests can pin or
//! step it. Elapsed time is always derived from `now_ms()` on each sample,
//! never accumulated, so a missed sample self-corrects on the next one.

use chrono::{Local, NaiveDate};

pub trait Clock {
    /// Current wall-clock time, Unix epoch milliseconds.
    fn now_ms(&self) -> i64;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed clock for tests; `advance` moves it forward.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now_ms: std::cell::Cell<i64>,
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(now_ms: i64, today: NaiveDate) -> Self {
        Self {
            now_ms: std::cell::Cell::new(now_ms),
            today,
        }
    }

    pub fn advance_ms(&self, delta: i64) {
        self.now_ms.set(self.now_ms.get() + delta);
    }

    pub fn set_ms(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
