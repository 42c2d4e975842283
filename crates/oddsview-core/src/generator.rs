//! Odds value generation
//!
//! Two policies are available, selected by [`PredictionPolicy`]:
//!
//! - `WeightedRandom`: 90% of values land in `[30, 74.45]`, the rest in
//!   `[74.45, 500]`.
//! - `TimeDerived`: a pure function of the wall-clock seconds, milliseconds
//!   and minutes, mapped into `[30.23, 503.35]`.
//!
//! Both round to whole cents so values render with exactly two decimals.

use std::f64::consts::TAU;

use chrono::Timelike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::PredictionPolicy;

/// Probability of drawing from the low band
pub const LOW_BAND_WEIGHT: f64 = 0.9;
pub const LOW_BAND: (f64, f64) = (30.0, 74.45);
pub const HIGH_BAND: (f64, f64) = (74.45, 500.0);
pub const TIME_DERIVED_RANGE: (f64, f64) = (30.23, 503.35);

/// Round to two decimals via integer cents
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render an odds value with two decimals and the multiplier suffix
pub fn format_odds(value: f64) -> String {
    format!("{:.2}x", value)
}

#[inline]
fn map_into(fraction: f64, (low, high): (f64, f64)) -> f64 {
    low + fraction * (high - low)
}

/// Draw a value with the weighted-random policy
pub fn weighted_random<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let band = if rng.random::<f64>() < LOW_BAND_WEIGHT {
        LOW_BAND
    } else {
        HIGH_BAND
    };
    round_cents(map_into(rng.random::<f64>(), band))
}

/// Blend fraction for the time-derived policy, in `[0, 1)`
pub fn time_fraction<T: Timelike>(time: &T) -> f64 {
    // nanosecond() exceeds 1e9 during a leap second
    let millis = (time.nanosecond() / 1_000_000) % 1000;
    let sub_minute = (time.second() * 1000 + millis) % 10_000;
    let fast = sub_minute as f64 / 10_000.0;
    let slow = ((time.minute() as f64 / 60.0 * TAU).sin() + 1.0) / 2.0;
    (0.6 * fast + 0.4 * slow).rem_euclid(1.0)
}

/// Compute a value with the time-derived policy
pub fn time_derived<T: Timelike>(time: &T) -> f64 {
    let (low, high) = TIME_DERIVED_RANGE;
    round_cents(map_into(time_fraction(time), TIME_DERIVED_RANGE)).clamp(low, high)
}

/// Produces new target values for the predictor
#[derive(Debug, Clone)]
pub struct Generator<R = StdRng> {
    policy: PredictionPolicy,
    rng: R,
}

impl Generator<StdRng> {
    /// Create a generator seeded from `seed`, or from OS entropy when `None`
    pub fn from_seed(policy: PredictionPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(policy, rng)
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(policy: PredictionPolicy, rng: R) -> Self {
        Self { policy, rng }
    }

    pub fn policy(&self) -> PredictionPolicy {
        self.policy
    }

    /// Next odds value; `time` is only read by the time-derived policy
    pub fn next<T: Timelike>(&mut self, time: &T) -> f64 {
        match self.policy {
            PredictionPolicy::WeightedRandom => weighted_random(&mut self.rng),
            PredictionPolicy::TimeDerived => time_derived(time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn timestamp(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    fn has_at_most_two_decimals(value: f64) -> bool {
        let cents = value * 100.0;
        (cents - cents.round()).abs() < 1e-6
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(42.126), 42.13);
        assert_eq!(round_cents(42.124), 42.12);
        assert_eq!(round_cents(30.0), 30.0);
    }

    #[test]
    fn test_format_odds() {
        assert_eq!(format_odds(42.1), "42.10x");
        assert_eq!(format_odds(500.0), "500.00x");
        assert_eq!(format_odds(0.0), "0.00x");
    }

    #[test]
    fn test_weighted_random_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples = 20_000;
        let mut low = 0;

        for _ in 0..samples {
            let value = weighted_random(&mut rng);
            assert!((LOW_BAND.0..=HIGH_BAND.1).contains(&value), "{} out of range", value);
            assert!(has_at_most_two_decimals(value), "{} has extra decimals", value);
            if value < LOW_BAND.1 {
                low += 1;
            }
        }

        let low_share = low as f64 / samples as f64;
        assert!((0.88..=0.92).contains(&low_share), "low share was {}", low_share);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Generator::from_seed(PredictionPolicy::WeightedRandom, Some(99));
        let mut b = Generator::from_seed(PredictionPolicy::WeightedRandom, Some(99));
        let now = timestamp(10, 0, 0, 0);
        for _ in 0..10 {
            assert_eq!(a.next(&now), b.next(&now));
        }
    }

    #[test]
    fn test_time_derived_known_value() {
        // minute 0: slow = 0.5; 12.5s: fast = 0.25; f = 0.15 + 0.2 = 0.35
        let value = time_derived(&timestamp(9, 0, 12, 500));
        let expected = round_cents(30.23 + 0.35 * (503.35 - 30.23));
        assert_eq!(value, expected);
    }

    #[test]
    fn test_time_derived_ignores_rng() {
        let now = timestamp(18, 44, 3, 250);
        let mut a = Generator::from_seed(PredictionPolicy::TimeDerived, Some(1));
        let mut b = Generator::from_seed(PredictionPolicy::TimeDerived, Some(2));
        assert_eq!(a.next(&now), b.next(&now));
    }

    proptest! {
        #[test]
        fn prop_time_derived_in_range(h in 0u32..24, m in 0u32..60, s in 0u32..60, ms in 0u32..1000) {
            let value = time_derived(&timestamp(h, m, s, ms));
            prop_assert!(value >= TIME_DERIVED_RANGE.0 && value <= TIME_DERIVED_RANGE.1);
            prop_assert!(has_at_most_two_decimals(value));
        }

        #[test]
        fn prop_time_derived_is_deterministic(h in 0u32..24, m in 0u32..60, s in 0u32..60, ms in 0u32..1000) {
            let ts = timestamp(h, m, s, ms);
            prop_assert_eq!(time_derived(&ts), time_derived(&ts));
        }

        #[test]
        fn prop_time_fraction_is_unit(m in 0u32..60, s in 0u32..60, ms in 0u32..1000) {
            let f = time_fraction(&timestamp(12, m, s, ms));
            prop_assert!((0.0..1.0).contains(&f));
        }
    }
}
