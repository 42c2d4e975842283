//! Theme registry and loader

mod dracula;
mod gruvbox;
mod nord;

use oddsview_core::config::UiConfig;
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

pub use gruvbox::dark as gruvbox_dark;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load the configured theme, applying the accent override if valid
pub fn load_theme(config: &UiConfig) -> Theme {
    let mut theme = match config.theme.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        other => {
            warn!(
                "Unknown theme '{}', falling back to gruvbox-dark (available: {})",
                other,
                available_themes().join(", ")
            );
            gruvbox::dark()
        }
    };

    if let Some(ref hex) = config.accent {
        match parse_hex_color(hex) {
            Some(color) => theme.accent = color,
            None => warn!("Invalid accent color '{}', keeping theme accent", hex),
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "gruvbox-light", "nord", "dracula"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
    }

    #[test]
    fn test_parse_hex_color_non_ascii() {
        assert!(parse_hex_color("é1").is_none());
        assert!(parse_hex_color("#ééé").is_none());
        assert!(parse_hex_color("ff5é").is_none());
    }

    #[test]
    fn test_load_theme_default_and_fallback() {
        assert_eq!(load_theme(&UiConfig::default()), gruvbox::dark());

        let config = UiConfig {
            theme: "no-such-theme".to_string(),
            ..Default::default()
        };
        assert_eq!(load_theme(&config), gruvbox::dark());
    }

    #[test]
    fn test_every_listed_theme_loads() {
        for name in available_themes() {
            let config = UiConfig {
                theme: name.to_string(),
                ..Default::default()
            };
            // Only gruvbox-dark itself may equal the fallback
            let theme = load_theme(&config);
            assert!(name == "gruvbox-dark" || theme != gruvbox::dark(), "{}", name);
        }
    }

    #[test]
    fn test_accent_override() {
        let config = UiConfig {
            theme: "nord".to_string(),
            accent: Some("#ff0000".to_string()),
            ..Default::default()
        };
        assert!(matches!(load_theme(&config).accent, Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_non_ascii_accent_keeps_theme_accent() {
        let config = UiConfig {
            theme: "nord".to_string(),
            accent: Some("é1".to_string()),
            ..Default::default()
        };
        assert_eq!(load_theme(&config).accent, nord::default().accent);
    }
}
