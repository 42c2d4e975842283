//! Odds value animation
//!
//! - `easing` - ease-out cubic curve
//! - `timing` - progress and interpolation helpers
//! - `animator` - single-tween controller driven once per frame
//!
//! ```ignore
//! let mut animator = Animator::new(Duration::from_millis(1400));
//! animator.start(current, target, clock.monotonic());
//!
//! // each frame
//! match animator.update(clock.monotonic()) {
//!     Some(AnimationStep::Progress(v)) => render(v),
//!     Some(AnimationStep::Finished(v)) => settle(v),
//!     None => {}
//! }
//! ```

pub mod animator;
pub mod easing;
pub mod timing;

pub use animator::{AnimationStep, Animator, Tween};
pub use easing::ease_out_cubic;
