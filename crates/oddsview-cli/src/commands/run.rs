use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info, warn};

use oddsview_core::{AppConfig, SystemClock};
use oddsview_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    layout::bind_regions,
    load_theme, ui,
};

type Backend = CrosstermBackend<io::Stdout>;

/// Holds raw mode and the alternate screen; both are released on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on, an early return drops the guard and restores the terminal
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, SetTitle("Oddsview"))?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            warn!("Failed to leave alternate screen: {}", e);
        }
    }
}

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // A display that cannot hold every region is unusable
    let (width, height) = terminal::size()?;
    bind_regions(Rect::new(0, 0, width, height))?;

    let theme = load_theme(&config.ui);
    let event_handler = EventHandler::new(
        std::time::Duration::from_millis(config.ui.tick_rate_ms),
        config.timing.frame_interval(),
    );
    let mut app = App::new(config, theme, SystemClock::new());

    // Setup terminal
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    info!(policy = ?app.config.predictor.policy, "Oddsview started");

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even when the loop failed
    drop(guard);

    info!("Oddsview stopped");
    result
}

fn main_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        app.update();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll at frame rate while a cycle is running
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next_within(app.idle_timeout())?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.handle_action(handle_key_event(key)),
                AppEvent::Resize(w, h) => debug!(width = w, height = h, "Terminal resized"),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
