use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    /// Odds value in the common band
    pub value: Color,
    /// Odds value in the rare high band
    pub value_high: Color,
    /// Loading indicator
    pub loading: Color,
    /// Trigger button and card border
    pub accent: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox_dark()
    }
}
