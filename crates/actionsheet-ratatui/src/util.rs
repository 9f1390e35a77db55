use actionsheet::style::Color as SheetColor;
use ratatui::style::Color;

/// Convert a sheet color into a terminal color.
///
/// Fully transparent colors map to [Color::Reset], leaving the terminal default in place.
pub(crate) fn term_color(color: SheetColor) -> Color {
    if color.is_clear() {
        return Color::Reset;
    }

    Color::Rgb(color.r, color.g, color.b)
}

/// Best-effort RGB value for a terminal color.
///
/// `fallback` is used for [Color::Reset], whose real value depends on the terminal theme.
pub(crate) fn rgb_of(color: Color, fallback: SheetColor) -> SheetColor {
    match color {
        Color::Reset => fallback,
        Color::Black => SheetColor::rgb(0, 0, 0),
        Color::Red => SheetColor::rgb(128, 0, 0),
        Color::Green => SheetColor::rgb(0, 128, 0),
        Color::Yellow => SheetColor::rgb(128, 128, 0),
        Color::Blue => SheetColor::rgb(0, 0, 128),
        Color::Magenta => SheetColor::rgb(128, 0, 128),
        Color::Cyan => SheetColor::rgb(0, 128, 128),
        Color::Gray => SheetColor::rgb(192, 192, 192),
        Color::DarkGray => SheetColor::rgb(128, 128, 128),
        Color::LightRed => SheetColor::rgb(255, 0, 0),
        Color::LightGreen => SheetColor::rgb(0, 255, 0),
        Color::LightYellow => SheetColor::rgb(255, 255, 0),
        Color::LightBlue => SheetColor::rgb(0, 0, 255),
        Color::LightMagenta => SheetColor::rgb(255, 0, 255),
        Color::LightCyan => SheetColor::rgb(0, 255, 255),
        Color::White => SheetColor::rgb(255, 255, 255),
        Color::Rgb(r, g, b) => SheetColor::rgb(r, g, b),
        Color::Indexed(i) => indexed_rgb(i),
    }
}

/// RGB value of an entry in the xterm 256-color palette.
fn indexed_rgb(i: u8) -> SheetColor {
    const BASIC: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Gray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];

    match i {
        0..=15 => rgb_of(BASIC[i as usize], SheetColor::BLACK),
        16..=231 => {
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            let i = i - 16;

            SheetColor::rgb(level(i / 36), level((i / 6) % 6), level(i % 6))
        },
        232..=255 => {
            let v = 8 + (i - 232) * 10;

            SheetColor::rgb(v, v, v)
        },
    }
}
