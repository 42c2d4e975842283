//! Binds the display regions of the predictor card to screen areas

use oddsview_core::{Error, Result};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Card size including its border
pub const CARD_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 9;

/// Rows inside the card border, top to bottom; `None` is a spacer
const ROWS: [Option<&str>; 7] = [
    Some("time"),
    Some("predicted time"),
    None,
    Some("odds value"),
    Some("loading indicator"),
    None,
    Some("trigger"),
];

/// Screen areas for every display region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub card: Rect,
    pub time: Rect,
    pub predicted: Rect,
    pub value: Rect,
    pub loading: Rect,
    pub trigger: Rect,
    pub status: Rect,
}

/// Lay out the card centered in `area` with a status line at the bottom
///
/// Fails with [`Error::MissingRegion`] naming the first region that does
/// not fit.
pub fn bind_regions(area: Rect) -> Result<Regions> {
    if area.width < CARD_WIDTH {
        return Err(Error::MissingRegion("odds value"));
    }
    // Inner rows plus top and bottom border, plus the status line
    let available_rows = area.height.saturating_sub(3) as usize;
    if let Some(name) = ROWS.iter().skip(available_rows).flatten().copied().next() {
        return Err(Error::MissingRegion(name));
    }

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(CARD_HEIGHT), Constraint::Length(1)])
        .split(area);
    let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, outer[0]);
    let inner = Rect {
        x: card.x + 1,
        y: card.y + 1,
        width: card.width.saturating_sub(2),
        height: card.height.saturating_sub(2),
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(ROWS.map(|_| Constraint::Length(1)))
        .split(inner);

    Ok(Regions {
        card,
        time: rows[0],
        predicted: rows[1],
        value: rows[3],
        loading: rows[4],
        trigger: rows[6],
        status: outer[1],
    })
}

/// Rectangle of the given size centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_fit_in_card() {
        let regions = bind_regions(Rect::new(0, 0, 80, 24)).unwrap();
        assert_eq!(regions.card.width, CARD_WIDTH);
        assert_eq!(regions.card.height, CARD_HEIGHT);
        for region in [regions.time, regions.predicted, regions.value, regions.loading, regions.trigger] {
            assert_eq!(region.height, 1);
            assert!(region.y > regions.card.y && region.y < regions.card.bottom());
        }
        assert!(regions.time.y < regions.value.y && regions.value.y < regions.trigger.y);
        assert_eq!(regions.status.y, 23);
    }

    #[test]
    fn test_minimum_size_binds() {
        assert!(bind_regions(Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT + 1)).is_ok());
    }

    #[test]
    fn test_too_narrow_is_missing_value() {
        let err = bind_regions(Rect::new(0, 0, 20, 24)).unwrap_err();
        assert!(matches!(err, Error::MissingRegion("odds value")));
    }

    #[test]
    fn test_too_short_names_first_missing_region() {
        let err = bind_regions(Rect::new(0, 0, 80, 7)).unwrap_err();
        assert!(matches!(err, Error::MissingRegion("loading indicator")));
    }
}
