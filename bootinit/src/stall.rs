//! Terminal stall state.
//!
//! PID 1 must never exit: once the bootstrap sequence gives up, the process
//! parks here, waking at a coarse interval and doing nothing else. It does
//! not retry the failed step.

use crate::platform::Platform;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stall {
    interval: Duration,
}

impl Stall {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One wake cycle.
    pub fn wait_once<P: Platform + ?Sized>(&self, platform: &mut P) {
        platform.sleep(self.interval);
    }

    /// Sleep forever.
    pub fn park<P: Platform + ?Sized>(&self, platform: &mut P) -> ! {
        // The failure itself was already reported; this is context only.
        debug!(
            interval_ms = self.interval.as_millis() as u64,
            "Bootstrap stalled; process stays alive for inspection"
        );
        loop {
            self.wait_once(platform);
        }
    }
}
