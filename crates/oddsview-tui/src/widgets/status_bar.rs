use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use oddsview_core::{Clock, Phase};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
        let theme = &app.theme;
        let phase_str = match app.predictor.phase() {
            Phase::Idle => "READY",
            Phase::Loading { .. } => "LOADING",
            Phase::Animating { .. } => "ANIMATING",
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {} | {}", phase_str, msg),
            None => format!(" {}", phase_str),
        };

        let help_hint = " enter:next game q:quit ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Shown in place of the card when the terminal shrinks below the minimum
    pub fn render_too_small<C: Clock>(frame: &mut Frame, app: &App<C>, missing: &str) {
        let area = frame.area();
        let text = format!("Terminal too small ({} hidden)", missing);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(app.theme.error),
        )));
        frame.render_widget(paragraph, area);
    }
}
