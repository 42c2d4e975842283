use oddsview_core::{Clock, Error};
use ratatui::Frame;

use crate::app::App;
use crate::layout::bind_regions;
use crate::widgets::{PredictorCardWidget, StatusBarWidget};

/// Draw one frame of the application
pub fn draw<C: Clock>(frame: &mut Frame, app: &App<C>) {
    match bind_regions(frame.area()) {
        Ok(regions) => {
            PredictorCardWidget::render(frame, &regions, app);
            StatusBarWidget::render(frame, regions.status, app);
        }
        Err(Error::MissingRegion(name)) => StatusBarWidget::render_too_small(frame, app, name),
        Err(_) => {}
    }
}
