//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36),
        bg1: Color::Rgb(0x34, 0x37, 0x46),
        bg2: Color::Rgb(0x44, 0x47, 0x5a),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        grey0: Color::Rgb(0x62, 0x72, 0xa4),
        grey1: Color::Rgb(0xbd, 0x93, 0xf9),
        value: Color::Rgb(0x50, 0xfa, 0x7b),
        value_high: Color::Rgb(0xff, 0x79, 0xc6),
        loading: Color::Rgb(0xf1, 0xfa, 0x8c),
        accent: Color::Rgb(0xff, 0xb8, 0x6c),
        error: Color::Rgb(0xff, 0x55, 0x55),
    }
}
