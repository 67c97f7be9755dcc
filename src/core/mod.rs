//! Core module - pure game logic
//!
//! Game rules, scoring, and session persistence. No terminal dependencies:
//! input and output reach the loop through the collaborator traits in
//! [`game`].

pub mod board;
pub mod game;
pub mod rng;

// Re-export commonly used types
pub use board::{Board, MoveResult};
pub use game::{Game, GameRenderer, LoopOutcome, MoveSource};
