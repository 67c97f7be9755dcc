//! TerminalUi: owns the terminal and draws frames.
//!
//! The drawing API is intentionally small: one full frame per loop
//! iteration plus one-line messages. No alternate screen, so the last
//! frame and the outcome line stay visible after the process exits.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::game::{Game, GameRenderer};
use crate::term::game_view::{cell_text, tile_color, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_TOP};
use crate::types::ColorMode;

pub struct TerminalUi {
    stdout: io::Stdout,
    clear_screen: bool,
    azmode: bool,
    mode: ColorMode,
}

impl TerminalUi {
    pub fn new(clear_screen: bool, azmode: bool, mode: ColorMode) -> Self {
        Self {
            stdout: io::stdout(),
            clear_screen,
            azmode,
            mode,
        }
    }

    /// Put the terminal into raw mode; the cursor is only hidden when the
    /// screen is cleared between frames.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        if self.clear_screen {
            self.stdout.queue(cursor::Hide)?;
            self.stdout.flush()?;
        }
        Ok(())
    }

    /// Restore the terminal. Called on every exit path, including errors.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn margin(&mut self) -> io::Result<()> {
        self.stdout.queue(Print(" ".repeat(MARGIN_LEFT)))?;
        Ok(())
    }
}

impl GameRenderer for TerminalUi {
    fn draw(&mut self, game: &Game) -> io::Result<()> {
        if self.clear_screen {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            self.stdout.queue(cursor::MoveTo(0, 0))?;
        } else {
            self.stdout.queue(Print("\r\n"))?;
        }

        for _ in 0..MARGIN_TOP {
            self.stdout.queue(Print("\r\n"))?;
        }

        let board = game.board();
        for y in 0..board.size() {
            self.margin()?;
            for (x, &value) in board.row(y).iter().enumerate() {
                if x > 0 {
                    self.stdout.queue(Print(" "))?;
                }
                self.stdout
                    .queue(SetForegroundColor(tile_color(value, self.mode)))?;
                self.stdout
                    .queue(Print(cell_text(value, self.azmode, board.goal())))?;
                self.stdout.queue(ResetColor)?;
            }
            if y == 0 {
                self.stdout.queue(Print(format!(
                    " \tScore: {:5}  Best: {:5}",
                    game.score(),
                    game.best_score()
                )))?;
            }
            self.stdout.queue(Print("\r\n"))?;
        }

        for _ in 0..MARGIN_BOTTOM {
            self.stdout.queue(Print("\r\n"))?;
        }
        self.stdout.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        self.margin()?;
        self.stdout.queue(Print(text))?;
        self.stdout.queue(Print("\r\n"))?;
        self.stdout.flush()
    }
}
