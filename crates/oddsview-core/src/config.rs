use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub predictor: PredictorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level, used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file written while the TUI owns the terminal
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

/// Timing constants for the clock and the prediction cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Interval between clock text refreshes
    #[serde(default = "default_clock_tick")]
    pub clock_tick_ms: u64,
    /// Delay between the trigger and computing a new value
    #[serde(default = "default_trigger_delay")]
    pub trigger_delay_ms: u64,
    /// Duration of the odds animation
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Frame rate while animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            clock_tick_ms: default_clock_tick(),
            trigger_delay_ms: default_trigger_delay(),
            animation_duration_ms: default_animation_duration(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl TimingConfig {
    #[inline]
    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }

    #[inline]
    pub fn trigger_delay(&self) -> Duration {
        Duration::from_millis(self.trigger_delay_ms)
    }

    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Frame interval for the configured FPS, never shorter than 1ms
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }
}

/// How a new odds value is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionPolicy {
    /// 90% of draws in the low band, 10% in the high band
    #[default]
    WeightedRandom,
    /// Deterministic blend of the current seconds, milliseconds and minutes
    TimeDerived,
}

impl std::str::FromStr for PredictionPolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "weighted_random" | "random" => Ok(Self::WeightedRandom),
            "time_derived" | "time" => Ok(Self::TimeDerived),
            other => Err(crate::Error::Config(format!(
                "unknown prediction policy '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    #[serde(default)]
    pub policy: PredictionPolicy,
    /// Minutes added to the wall clock for the predicted-time readout
    #[serde(default = "default_predict_offset")]
    pub predict_offset_minutes: i64,
    #[serde(default = "default_true")]
    pub show_predicted_time: bool,
    /// Fixed RNG seed; entropy from the OS when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            policy: PredictionPolicy::default(),
            predict_offset_minutes: default_predict_offset(),
            show_predicted_time: default_true(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme name (e.g., "gruvbox-dark", "nord", "dracula")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Optional hex override for the accent color
    #[serde(default)]
    pub accent: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: default_theme_name(),
            accent: None,
        }
    }
}

/// Highest accepted `timing.animation_fps`
pub const MAX_ANIMATION_FPS: u32 = 1000;

/// Largest accepted `predictor.predict_offset_minutes` in either direction (one day)
pub const MAX_PREDICT_OFFSET_MINUTES: i64 = 24 * 60;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_clock_tick() -> u64 {
    1000
}

fn default_trigger_delay() -> u64 {
    700
}

fn default_animation_duration() -> u64 {
    1400
}

fn default_animation_fps() -> u32 {
    60
}

fn default_predict_offset() -> i64 {
    5
}

fn default_tick_rate() -> u64 {
    100
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults when missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Reject values that would stall the clock or the frame loop
    pub fn validate(&self) -> crate::Result<()> {
        if self.timing.clock_tick_ms == 0 {
            return Err(crate::Error::Config(
                "timing.clock_tick_ms must be greater than 0".to_string(),
            ));
        }
        if self.timing.animation_fps == 0 {
            return Err(crate::Error::Config(
                "timing.animation_fps must be greater than 0".to_string(),
            ));
        }
        if self.timing.animation_fps > MAX_ANIMATION_FPS {
            return Err(crate::Error::Config(format!(
                "timing.animation_fps must be at most {}",
                MAX_ANIMATION_FPS
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(crate::Error::Config(
                "ui.tick_rate_ms must be greater than 0".to_string(),
            ));
        }
        if self.predictor.predict_offset_minutes.unsigned_abs() > MAX_PREDICT_OFFSET_MINUTES as u64 {
            return Err(crate::Error::Config(format!(
                "predictor.predict_offset_minutes must be within ±{}",
                MAX_PREDICT_OFFSET_MINUTES
            )));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/oddsview/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("oddsview")
            .join("config.toml")
    }

    /// Get the log file path (with tilde expansion)
    pub fn log_file(&self) -> Option<PathBuf> {
        self.general.log_file.as_deref().map(expand_tilde)
    }

    /// Predicted-time offset as a chrono duration
    ///
    /// Unvalidated values too large for chrono map to zero.
    pub fn predict_offset(&self) -> chrono::Duration {
        chrono::Duration::try_minutes(self.predictor.predict_offset_minutes)
            .unwrap_or_else(chrono::Duration::zero)
    }
}
