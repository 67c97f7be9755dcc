//! Pure frame formatting: tile text and the tile color table.
//!
//! No I/O here so everything is unit-testable; `TerminalUi` does the
//! actual drawing.

use crossterm::style::Color;

use crate::types::ColorMode;

/// Board margins in terminal cells.
pub const MARGIN_LEFT: usize = 4;
pub const MARGIN_TOP: usize = 4;
pub const MARGIN_BOTTOM: usize = 4;

/// Text shown for one cell.
///
/// Numeric mode right-aligns to three columns and contracts 1024/2048 to
/// `1k`/`2k`. Alphabetic mode maps each exponent below the goal to a
/// letter (2 -> a, 4 -> b, ...) and shows `?` for anything else, so every
/// cell stays a single character wide.
pub fn cell_text(value: u32, azmode: bool, goal: u32) -> String {
    if value == 0 {
        return if azmode { ".".into() } else { "  .".into() };
    }

    if azmode {
        if !value.is_power_of_two() {
            return "?".into();
        }
        let exponent = value.trailing_zeros();
        return if (1..goal_exponent(goal).min(27)).contains(&exponent) {
            char::from(b'a' + (exponent - 1) as u8).to_string()
        } else {
            "?".into()
        };
    }

    match value {
        1024 => " 1k".into(),
        2048 => " 2k".into(),
        _ => format!("{:3}", value),
    }
}

fn goal_exponent(goal: u32) -> u32 {
    // The goal is a trusted positive power of two.
    31 - goal.leading_zeros()
}

/// Foreground color for a tile value, adjusted for the terminal mode.
///
/// Dark mode trades blue away for white, light mode trades yellow away
/// for black; the base table itself uses neither white nor black.
pub fn tile_color(value: u32, mode: ColorMode) -> Color {
    let base = match value {
        2 => Color::Green,
        4 => Color::Blue,
        8 => Color::Cyan,
        16 => Color::Red,
        32 => Color::Magenta,
        64 => Color::Cyan,
        128 => Color::Blue,
        256 => Color::Magenta,
        512 => Color::Green,
        1024 => Color::Red,
        2048 => Color::Yellow,
        // Higher goals still get a color.
        4096 => Color::Red,
        8192 => Color::Cyan,
        _ => Color::Reset,
    };

    match (mode, base) {
        (ColorMode::Dark, Color::Blue) => Color::White,
        (ColorMode::Light, Color::Yellow) => Color::Black,
        _ => base,
    }
}
