//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board edge length (the grid is size x size)
pub const DEFAULT_SIZE: usize = 4;

/// Default winning tile value
pub const DEFAULT_GOAL: u32 = 2048;

/// Tile values a spawn draws from: nine 2s and one 4, picked uniformly.
/// A flat weighted list keeps the draw a single `next_range` call, so a
/// seeded RNG reproduces the same spawn sequence.
pub const SPAWN_CHOICES: [u32; 10] = [2, 2, 2, 2, 2, 2, 2, 2, 2, 4];

/// A move request from the player.
///
/// `Pause` travels through the same channel as the four directions; the
/// board treats it as a no-op and the game loop as a save-and-exit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Up,
    Down,
    Left,
    Right,
    Pause,
}

/// One logical input delivered by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key bound to a move or pause.
    Action(GameAction),
    /// A key with no binding; the loop re-renders and reads again.
    Unmapped,
    /// Cancellation (Ctrl-C under raw mode).
    Interrupt,
}

/// Color adjustment applied to the tile color table.
///
/// The default table avoids white and black so it stays readable on either
/// kind of terminal background; dark and light modes trade the risky colors
/// away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Default,
    Dark,
    Light,
}

impl ColorMode {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(ColorMode::Default),
            "dark" => Some(ColorMode::Dark),
            "light" => Some(ColorMode::Light),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Default => "default",
            ColorMode::Dark => "dark",
            ColorMode::Light => "light",
        }
    }
}
