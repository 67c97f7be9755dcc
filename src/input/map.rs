//! Key mapping from terminal events to game inputs.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::game::MoveSource;
use crate::types::{GameAction, InputEvent};

/// Map one key event to a logical input.
///
/// Arrows and their vim aliases (h/j/k/l) move, space pauses, Ctrl-C
/// cancels. Raw mode swallows SIGINT, so Ctrl-C arrives here as an
/// ordinary key event. Unbound keys are reported as `Unmapped` so the loop
/// can ignore them.
pub fn map_key(key: KeyEvent) -> InputEvent {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputEvent::Interrupt;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            InputEvent::Action(GameAction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            InputEvent::Action(GameAction::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            InputEvent::Action(GameAction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            InputEvent::Action(GameAction::Right)
        }
        KeyCode::Char(' ') => InputEvent::Action(GameAction::Pause),
        _ => InputEvent::Unmapped,
    }
}

/// Blocking keyboard reader for the interactive loop.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl MoveSource for TerminalInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Only presses count; repeats and releases would double moves.
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key));
                }
            }
        }
    }
}
