//! Terminal rendering module.
//!
//! `game_view` is pure formatting (tile text and colors, unit-testable);
//! `renderer` owns the real terminal and draws frames through it.

pub mod game_view;
pub mod renderer;

pub use game_view::{cell_text, tile_color};
pub use renderer::TerminalUi;
