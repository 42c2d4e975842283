use std::time::Duration;

use super::easing::ease_out_cubic;
use super::timing::{lerp, progress};

/// One eased interpolation from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    /// Monotonic start time
    pub start: Duration,
    pub duration: Duration,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    #[inline]
    pub fn is_complete(&self, now: Duration) -> bool {
        progress(self.start, now, self.duration) >= 1.0
    }

    /// Interpolated value at `now`; exactly `to` once complete
    pub fn sample(&self, now: Duration) -> f64 {
        let t = progress(self.start, now, self.duration);
        if t >= 1.0 {
            return self.to;
        }
        let (low, high) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        lerp(self.from, self.to, ease_out_cubic(t)).clamp(low, high)
    }
}

/// Result of advancing the animator by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationStep {
    /// Intermediate value, animation still running
    Progress(f64),
    /// Final value; emitted exactly once per tween
    Finished(f64),
}

/// Runs at most one tween at a time
///
/// Call `start()` to begin, then `update()` every frame until it returns
/// `Finished`.
#[derive(Debug, Clone)]
pub struct Animator {
    tween: Option<Tween>,
    duration: Duration,
}

impl Animator {
    pub fn new(duration: Duration) -> Self {
        Self {
            tween: None,
            duration,
        }
    }

    /// Begin a tween at `now`
    ///
    /// Returns false and leaves the running tween untouched when one is
    /// already in progress.
    pub fn start(&mut self, from: f64, to: f64, now: Duration) -> bool {
        if self.tween.is_some() {
            return false;
        }
        self.tween = Some(Tween::new(from, to, now, self.duration));
        true
    }

    /// Advance to `now`
    pub fn update(&mut self, now: Duration) -> Option<AnimationStep> {
        let tween = self.tween?;
        if tween.is_complete(now) {
            self.tween = None;
            Some(AnimationStep::Finished(tween.to))
        } else {
            Some(AnimationStep::Progress(tween.sample(now)))
        }
    }
}
