use anyhow::Result;
use tracing::debug;

use oddsview_core::generator::{format_odds, Generator};
use oddsview_core::{AppConfig, Clock, PredictionPolicy, SystemClock};

pub fn run(
    config: &AppConfig,
    count: usize,
    policy: Option<PredictionPolicy>,
    seed: Option<u64>,
) -> Result<()> {
    let policy = policy.unwrap_or(config.predictor.policy);
    let seed = seed.or(config.predictor.seed);
    debug!(?policy, ?seed, count, "Sampling odds");

    let mut generator = Generator::from_seed(policy, seed);
    let clock = SystemClock::new();

    for _ in 0..count {
        println!("{}", format_odds(generator.next(&clock.wall())));
    }

    Ok(())
}
