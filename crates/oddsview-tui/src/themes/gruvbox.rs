//! Gruvbox themes
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        bg2: Color::Rgb(0x45, 0x40, 0x3d),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        grey0: Color::Rgb(0x7c, 0x6f, 0x64),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        value: Color::Rgb(0xa9, 0xb6, 0x65),
        value_high: Color::Rgb(0xd3, 0x86, 0x9b),
        loading: Color::Rgb(0xd8, 0xa6, 0x57),
        accent: Color::Rgb(0xe7, 0x8a, 0x4e),
        error: Color::Rgb(0xea, 0x69, 0x62),
    }
}

pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xf4, 0xe8, 0xbe),
        bg2: Color::Rgb(0xeb, 0xdb, 0xb2),
        fg0: Color::Rgb(0x65, 0x47, 0x35),
        grey0: Color::Rgb(0xa8, 0x99, 0x84),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        value: Color::Rgb(0x6c, 0x78, 0x2e),
        value_high: Color::Rgb(0x94, 0x5e, 0x80),
        loading: Color::Rgb(0xb4, 0x71, 0x09),
        accent: Color::Rgb(0xc3, 0x52, 0x00),
        error: Color::Rgb(0xc1, 0x4a, 0x4a),
    }
}
