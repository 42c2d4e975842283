use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use oddsview_core::generator::{format_odds, HIGH_BAND};
use oddsview_core::Clock;

use crate::app::App;
use crate::layout::Regions;
use crate::widgets::spinner::spinner_char;

pub struct PredictorCardWidget;

impl PredictorCardWidget {
    pub fn render<C: Clock>(frame: &mut Frame, regions: &Regions, app: &App<C>) {
        let theme = &app.theme;

        frame.render_widget(Clear, regions.card);
        let block = Block::default()
            .title(" Odds Predictor ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        frame.render_widget(block, regions.card);

        let label = Style::default().fg(theme.grey1);
        let strong = Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD);

        let time = Line::from(vec![
            Span::styled("Time ", label),
            Span::styled(app.time_text.as_str(), strong),
        ]);
        frame.render_widget(Paragraph::new(time).alignment(Alignment::Center), regions.time);

        if let Some(ref predicted) = app.predicted_text {
            let line = Line::from(vec![
                Span::styled("Next round ", label),
                Span::styled(predicted.as_str(), strong),
            ]);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), regions.predicted);
        }

        let value = app.predictor.displayed_value();
        let value_color = if value >= HIGH_BAND.0 {
            theme.value_high
        } else {
            theme.value
        };
        let odds = Line::from(Span::styled(
            format_odds(value),
            Style::default().fg(value_color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(odds).alignment(Alignment::Center), regions.value);

        if app.predictor.is_loading() {
            let loading = Line::from(Span::styled(
                format!("{} Calculating", spinner_char(app.spinner_frame)),
                Style::default().fg(theme.loading),
            ));
            frame.render_widget(Paragraph::new(loading).alignment(Alignment::Center), regions.loading);
        }

        // Disabled trigger is drawn dimmed
        let trigger_style = if app.predictor.is_trigger_enabled() {
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.grey0)
                .bg(theme.bg2)
                .add_modifier(Modifier::DIM)
        };
        let trigger = Line::from(Span::styled(" Next game ", trigger_style));
        frame.render_widget(Paragraph::new(trigger).alignment(Alignment::Center), regions.trigger);
    }
}
