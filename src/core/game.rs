//! Game module - one interactive 2048 session
//!
//! Owns the board plus score accounting and persistence. Every
//! file-touching operation reports success as a bool and leaves in-memory
//! state alone on failure; the interactive loop decides which failures end
//! the session. The best score and the stored session live in two separate
//! files so neither write can clobber the other.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::board::Board;
use crate::types::{GameAction, InputEvent};

/// Blocking source of player input: terminal keys in production, a
/// scripted sequence in tests.
pub trait MoveSource {
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

/// Output sink for frames and one-line notices.
pub trait GameRenderer {
    /// Draw the whole board plus the score line.
    fn draw(&mut self, game: &Game) -> io::Result<()>;
    /// Print a line below the board.
    fn message(&mut self, text: &str) -> io::Result<()>;
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// A merge reached the goal tile.
    Won(u32),
    /// The board is full and nothing can merge.
    Lost(u32),
    /// Paused and stored for a later resume.
    Saved(u32),
    /// Pause requested but the session could not be written.
    SaveFailed,
    /// Cancelled; no score is reported.
    Interrupted,
}

/// A 2048 session: board, score, best score, and the two state files.
pub struct Game {
    board: Board,
    score: u32,
    best_score: u32,
    score_file: PathBuf,
    store_file: PathBuf,
}

impl Game {
    /// Create a session around `board`. The best score is loaded eagerly;
    /// a missing or unreadable score file silently means 0.
    pub fn new(
        board: Board,
        score_file: impl Into<PathBuf>,
        store_file: impl Into<PathBuf>,
    ) -> Self {
        let mut game = Self {
            board,
            score: 0,
            best_score: 0,
            score_file: score_file.into(),
            store_file: store_file.into(),
        };
        game.load_best_score();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Read the best score from the first line of the score file.
    /// Failure leaves the current value in place.
    pub fn load_best_score(&mut self) -> bool {
        match read_first_u32(&self.score_file) {
            Some(best) => {
                self.best_score = best;
                true
            }
            None => false,
        }
    }

    /// Persist the best score, folding in the current score first.
    pub fn save_best_score(&mut self) -> bool {
        if self.score > self.best_score {
            self.best_score = self.score;
        }
        fs::write(&self.score_file, self.best_score.to_string()).is_ok()
    }

    /// Add merge points to the session score, tracking the best score.
    pub fn inc_score(&mut self, points: u32) {
        self.score += points;
        if self.score > self.best_score {
            self.best_score = self.score;
        }
    }

    /// Write the session to the store file: the grid row-major on one
    /// line, the score on the next.
    pub fn store(&self) -> bool {
        let grid = self
            .board
            .cells()
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        fs::write(&self.store_file, format!("{}\n{}\n", grid, self.score)).is_ok()
    }

    /// Load a stored session. All-or-nothing: the grid and score are
    /// parsed completely before either is applied, so a corrupt file can
    /// never leave a half-restored board behind.
    pub fn restore(&mut self) -> bool {
        let Ok(text) = fs::read_to_string(&self.store_file) else {
            return false;
        };

        let mut lines = text.lines();
        let (Some(grid_line), Some(score_line)) = (lines.next(), lines.next()) else {
            return false;
        };

        let Ok(values) = grid_line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()
        else {
            return false;
        };
        if values.len() != self.board.size() * self.board.size() {
            return false;
        }
        let Ok(score) = score_line.trim().parse() else {
            return false;
        };

        self.board.set_cells(&values);
        self.score = score;
        true
    }

    /// Drive the session: render, check for an ending, read one input,
    /// apply it. Every way out saves the best score exactly once.
    pub fn run(
        &mut self,
        input: &mut dyn MoveSource,
        view: &mut dyn GameRenderer,
    ) -> io::Result<LoopOutcome> {
        loop {
            view.draw(self)?;

            if self.board.won() || !self.board.can_move() {
                self.save_best_score();
                return if self.board.won() {
                    view.message("You won!")?;
                    Ok(LoopOutcome::Won(self.score))
                } else {
                    view.message("Game over")?;
                    Ok(LoopOutcome::Lost(self.score))
                };
            }

            match input.next_event()? {
                InputEvent::Unmapped => {}
                InputEvent::Interrupt => {
                    self.save_best_score();
                    return Ok(LoopOutcome::Interrupted);
                }
                InputEvent::Action(GameAction::Pause) => {
                    self.save_best_score();
                    return if self.store() {
                        view.message("Game saved. Resume it with `term2048 --resume`.")?;
                        Ok(LoopOutcome::Saved(self.score))
                    } else {
                        view.message("An error occurred while saving your game.")?;
                        Ok(LoopOutcome::SaveFailed)
                    };
                }
                InputEvent::Action(action) => {
                    let points = self.board.apply_move(action);
                    self.inc_score(points);
                }
            }
        }
    }
}

fn read_first_u32(path: &Path) -> Option<u32> {
    let text = fs::read_to_string(path).ok()?;
    text.lines().next()?.trim().parse().ok()
}
