//! Terminal 2048.
//!
//! The `core` module owns the rules, scoring, and persistence; `input` and
//! `term` adapt the real terminal to the collaborator traits the game loop
//! consumes, so the core never touches key decoding or escape sequences.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
