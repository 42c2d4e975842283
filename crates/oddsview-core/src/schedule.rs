//! Clock sources and polled timers
//!
//! Nothing here blocks or spawns. The frame loop polls [`Ticker`] and
//! [`Delay`] against a [`Clock`], so swapping in a [`ManualClock`] makes
//! every timer deterministic.

use std::cell::Cell;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};

/// Source of monotonic and wall-clock time
pub trait Clock {
    /// Monotonic time since an arbitrary, fixed origin
    fn monotonic(&self) -> Duration;

    /// Local wall-clock time
    fn wall(&self) -> NaiveDateTime;
}

/// Real time: `Instant` for elapsed time, `chrono::Local` for display
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
    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }

    fn wall(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Virtual clock that only moves when told to
///
/// `advance` moves monotonic and wall time together.
#[derive(Debug, Clone)]
pub struct ManualClock {
    elapsed: Cell<Duration>,
    wall: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(wall: NaiveDateTime) -> Self {
        Self {
            elapsed: Cell::new(Duration::ZERO),
            wall: Cell::new(wall),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
        let wall = chrono::Duration::from_std(by)
            .ok()
            .and_then(|delta| self.wall.get().checked_add_signed(delta));
        if let Some(wall) = wall {
            self.wall.set(wall);
        }
    }
}

impl Clock for ManualClock {
    fn monotonic(&self) -> Duration {
        self.elapsed.get()
    }

    fn wall(&self) -> NaiveDateTime {
        self.wall.get()
    }
}

/// Repeating timer; fires on the first poll, then once per interval
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Duration>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Returns true when the ticker fired at `now`
    ///
    /// Missed intervals collapse into a single firing.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            Some(due) => {
                let mut next = due + self.interval;
                if next <= now {
                    next = now + self.interval;
                }
                self.next_due = Some(next);
                true
            }
            None => {
                self.next_due = Some(now + self.interval);
                true
            }
        }
    }

    /// Time left until the next firing
    pub fn remaining(&self, now: Duration) -> Duration {
        self.next_due
            .map(|due| due.saturating_sub(now))
            .unwrap_or(Duration::ZERO)
    }
}

/// One-shot deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    due: Duration,
}

impl Delay {
    pub fn starting_at(now: Duration, delay: Duration) -> Self {
        Self { due: now + delay }
    }

    #[inline]
    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.due
    }
}
