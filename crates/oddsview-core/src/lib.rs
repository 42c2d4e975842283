pub mod animation;
pub mod clock;
pub mod config;
pub mod error;
pub mod generator;
pub mod predictor;
pub mod schedule;

pub use config::{AppConfig, PredictionPolicy, TimingConfig};
pub use error::{Error, Result};
pub use predictor::{Phase, Predictor, PredictorEvent};
pub use schedule::{Clock, ManualClock, SystemClock};
