pub mod clock;
pub mod config;
pub mod run;
pub mod sample;
