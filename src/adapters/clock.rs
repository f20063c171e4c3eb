//! System clock adapter.
//!
//! [`ClockPort`] via `std::thread::sleep` — a plain blocking pause. The
//! daemon is single-threaded and fully synchronous, so suspending the
//! thread is exactly the contract: a deterministic minimum delay that
//! fully elapses before control returns.

use std::time::Duration;

use crate::app::ports::ClockPort;

pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn pause(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}
