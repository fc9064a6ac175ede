use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const CARD_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const DOT_INACTIVE: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_PAUSED: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
