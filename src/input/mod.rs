//! Terminal input module.
//!
//! Maps `crossterm` key events into logical game inputs and provides the
//! blocking [`MoveSource`](crate::core::MoveSource) the interactive loop
//! reads from. The core never sees raw key codes.

pub mod map;

pub use map::{map_key, TerminalInput};
