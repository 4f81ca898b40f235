//! Tick source for driving the engine from a host loop.
//!
//! The host calls [`Ticker::drive`] as often as it likes (every frame, every
//! input poll); the ticker decides when an engine step is due.

use std::cell::Cell;
use std::time::{Duration, Instant};

use log::debug;

use crate::game::{Engine, GameStatus};
use crate::snapshot::Snapshot;

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
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

/// Hand-advanced clock for deterministic runs.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Fixed-period tick source that can be stopped and restarted.
#[derive(Debug)]
pub struct Ticker<C: Clock> {
    clock: C,
    last_tick: Option<Duration>,
}

impl<C: Clock> Ticker<C> {
    /// Creates a stopped ticker.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_tick: None,
        }
    }

    /// Arms the ticker; the first tick is due one interval from now.
    pub fn start(&mut self) {
        self.last_tick = Some(self.clock.now());
    }

    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Returns true at most once per elapsed `interval`, re-arming from now.
    pub fn due(&mut self, interval: Duration) -> bool {
        let Some(last_tick) = self.last_tick else {
            return false;
        };

        let now = self.clock.now();
        if now.saturating_sub(last_tick) < interval {
            return false;
        }

        self.last_tick = Some(now);
        true
    }

    /// Steps `engine` when a tick is due at its current speed.
    ///
    /// Starts the ticker when the engine is running but the ticker is not,
    /// and stops it once the engine leaves [`GameStatus::Running`].
    pub fn drive(&mut self, engine: &mut Engine) -> Option<Snapshot> {
        if engine.status() != GameStatus::Running {
            if self.is_running() {
                debug!("ticker stopped");
                self.stop();
            }
            return None;
        }

        if !self.is_running() {
            debug!("ticker started at {:?}", engine.speed());
            self.start();
            return None;
        }

        if !self.due(engine.speed()) {
            return None;
        }

        let snapshot = engine.tick();
        if snapshot.status != GameStatus::Running {
            self.stop();
        }
        Some(snapshot)
    }
}
