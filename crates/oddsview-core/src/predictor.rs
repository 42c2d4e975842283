//! Prediction cycle controller
//!
//! Owns the current odds value and the trigger state. A cycle runs
//! `Idle -> Loading -> Animating -> Idle`; triggers outside `Idle` are
//! ignored, so at most one animation ever runs.

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::animation::{AnimationStep, Animator};
use crate::config::TimingConfig;
use crate::generator::Generator;
use crate::schedule::{Clock, Delay};

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    /// Waiting out the trigger delay
    Loading { ready: Delay },
    /// Animating toward `target`
    Animating { target: f64 },
}

/// Transition reported by [`Predictor::trigger`] and [`Predictor::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictorEvent {
    Triggered,
    TargetChosen { from: f64, target: f64 },
    Settled { value: f64 },
}

#[derive(Debug)]
pub struct Predictor<R = StdRng> {
    phase: Phase,
    current: f64,
    displayed: f64,
    generator: Generator<R>,
    animator: Animator,
    trigger_delay: Duration,
}

impl<R: Rng> Predictor<R> {
    /// Construct at widget mount with a freshly generated starting value
    pub fn mount(mut generator: Generator<R>, timing: &TimingConfig, clock: &impl Clock) -> Self {
        let initial = generator.next(&clock.wall());
        debug!(initial, policy = ?generator.policy(), "Predictor mounted");
        Self {
            phase: Phase::Idle,
            current: initial,
            displayed: initial,
            generator,
            animator: Animator::new(timing.animation_duration()),
            trigger_delay: timing.trigger_delay(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last settled value
    pub fn current_value(&self) -> f64 {
        self.current
    }

    /// Value to render this frame
    pub fn displayed_value(&self) -> f64 {
        self.displayed
    }

    #[inline]
    pub fn is_trigger_enabled(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Whether the loading indicator is visible
    #[inline]
    pub fn is_loading(&self) -> bool {
        !self.is_trigger_enabled()
    }

    /// Whether the frame loop should run at animation rate
    #[inline]
    pub fn needs_frames(&self) -> bool {
        self.is_loading()
    }

    /// Start a cycle; a no-op unless idle
    pub fn trigger(&mut self, clock: &impl Clock) -> Option<PredictorEvent> {
        if !self.is_trigger_enabled() {
            debug!(phase = ?self.phase, "Trigger ignored while cycle in progress");
            return None;
        }
        self.phase = Phase::Loading {
            ready: Delay::starting_at(clock.monotonic(), self.trigger_delay),
        };
        debug!("Prediction triggered");
        Some(PredictorEvent::Triggered)
    }

    /// Advance the cycle; call once per frame
    pub fn update(&mut self, clock: &impl Clock) -> Option<PredictorEvent> {
        let now = clock.monotonic();
        match self.phase {
            Phase::Idle => None,
            Phase::Loading { ready } => {
                if !ready.is_due(now) {
                    return None;
                }
                let target = self.generator.next(&clock.wall());
                // The delay may have expired well before this frame
                self.animator.start(self.current, target, now);
                self.phase = Phase::Animating { target };
                debug!(from = self.current, target, "Prediction target chosen");
                Some(PredictorEvent::TargetChosen {
                    from: self.current,
                    target,
                })
            }
            Phase::Animating { target } => match self.animator.update(now) {
                Some(AnimationStep::Progress(value)) => {
                    self.displayed = value;
                    None
                }
                Some(AnimationStep::Finished(_)) | None => {
                    self.displayed = target;
                    self.current = target;
                    self.phase = Phase::Idle;
                    debug!(value = target, "Prediction settled");
                    Some(PredictorEvent::Settled { value: target })
                }
            },
        }
    }
}
