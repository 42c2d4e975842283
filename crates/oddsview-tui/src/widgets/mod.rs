mod predictor_card;
pub mod spinner;
mod status_bar;

pub use predictor_card::PredictorCardWidget;
pub use status_bar::StatusBarWidget;
