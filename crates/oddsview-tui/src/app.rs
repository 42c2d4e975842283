use std::sync::Arc;
use std::time::Duration;

use oddsview_core::clock::{format_clock, predicted_time};
use oddsview_core::generator::Generator;
use oddsview_core::schedule::Ticker;
use oddsview_core::{AppConfig, Clock, Predictor, PredictorEvent, SystemClock};
use tracing::{debug, info};

use crate::input::Action;
use crate::theme::Theme;
use crate::widgets::spinner;

/// Interval between spinner frames
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App<C: Clock = SystemClock> {
    /// Time source shared by the clock readout and the predictor
    pub clock: C,
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// Prediction cycle controller
    pub predictor: Predictor,
    /// Formatted wall clock
    pub time_text: String,
    /// Formatted predicted time, when enabled
    pub predicted_text: Option<String>,
    /// Current spinner frame index
    pub spinner_frame: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    clock_ticker: Ticker,
    spinner_ticker: Ticker,
}

impl<C: Clock> App<C> {
    /// Mount the widget: builds the predictor and renders the first clock text
    pub fn new(config: Arc<AppConfig>, theme: Theme, clock: C) -> Self {
        let generator = Generator::from_seed(config.predictor.policy, config.predictor.seed);
        let predictor = Predictor::mount(generator, &config.timing, &clock);
        let clock_ticker = Ticker::new(config.timing.clock_tick());

        let mut app = Self {
            clock,
            config,
            theme,
            predictor,
            time_text: String::new(),
            predicted_text: None,
            spinner_frame: 0,
            status_message: None,
            should_quit: false,
            clock_ticker,
            spinner_ticker: Ticker::new(SPINNER_INTERVAL),
        };
        app.update();
        app
    }

    /// Advance timers and the predictor; call once per loop iteration
    pub fn update(&mut self) {
        let now = self.clock.monotonic();

        if self.clock_ticker.poll(now) {
            self.refresh_clock();
        }

        if let Some(event) = self.predictor.update(&self.clock) {
            self.on_predictor_event(event);
        }

        if self.predictor.is_loading() && self.spinner_ticker.poll(now) {
            self.tick_spinner();
        }
    }

    /// Apply an input action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            Action::Trigger => {
                if let Some(event) = self.predictor.trigger(&self.clock) {
                    self.spinner_frame = 0;
                    self.spinner_ticker = Ticker::new(SPINNER_INTERVAL);
                    self.on_predictor_event(event);
                }
            }
            Action::None => {}
        }
    }

    /// Whether the loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.predictor.needs_frames()
    }

    /// Time until the clock readout is next due, for the idle poll timeout
    pub fn idle_timeout(&self) -> Duration {
        self.clock_ticker.remaining(self.clock.monotonic())
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % spinner::SPINNER_FRAMES.len();
    }

    fn refresh_clock(&mut self) {
        let wall = self.clock.wall();
        self.time_text = format_clock(&wall);
        self.predicted_text = self
            .config
            .predictor
            .show_predicted_time
            .then(|| format_clock(&predicted_time(wall, self.config.predict_offset())));
    }

    fn on_predictor_event(&mut self, event: PredictorEvent) {
        match event {
            PredictorEvent::Triggered => {
                self.status_message = Some("Calculating next round...".to_string());
            }
            PredictorEvent::TargetChosen { .. } => {}
            PredictorEvent::Settled { value } => {
                debug!(value, "Odds updated");
                self.status_message = None;
            }
        }
    }
}
