//! Fixed-cadence sampling loop.
//!
//! The callback is invoked once per tick and must recompute everything it
//! needs from the current wall-clock time; the ticker never carries state
//! between ticks, so a late or missed tick self-corrects on the next one.

use std::time::Duration;

pub struct Ticker {
    interval: Duration,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Run `sample` until it returns `false`. Sleeps the interval between
    /// samples; the first sample fires immediately.
    pub fn run(&self, mut sample: impl FnMut() -> bool) {
        loop {
            if !sample() {
                return;
            }
            std::thread::sleep(self.interval);
        }
    }
}
