//=========================================================================
// Session Clock
//=========================================================================
//
// Time source for cooldowns and message timestamps.
//
// `now()` is the elapsed time since the session started. The scene only
// compares timestamps taken from the same clock, so the origin is
// irrelevant as long as it never moves backwards.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

//=== Clock Trait =========================================================

/// Monotonic session time source.
pub trait Clock {
    fn now(&self) -> Duration;
}

//=== SystemClock =========================================================

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

//=== ManualClock =========================================================

/// Hand-advanced clock. Clones share the same time.
///
/// Used for deterministic replays and tests: keep one handle, give a
/// clone to the scene, and advance it between frames.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
