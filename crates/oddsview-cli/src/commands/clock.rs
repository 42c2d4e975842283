use anyhow::Result;

use oddsview_core::clock::{format_clock, predicted_time};
use oddsview_core::{AppConfig, Clock, SystemClock};

pub fn run(config: &AppConfig) -> Result<()> {
    let now = SystemClock::new().wall();

    println!("Time:       {}", format_clock(&now));
    println!(
        "Next round: {}",
        format_clock(&predicted_time(now, config.predict_offset()))
    );

    Ok(())
}
