//! Terminal 2048 runner (default binary).
//!
//! Parses the CLI, owns the terminal guard, and maps the loop outcome to
//! the process exit. The interactive loop itself lives in `core::Game`.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use clap::Parser;

use term2048::core::{Board, Game, LoopOutcome};
use term2048::input::TerminalInput;
use term2048::term::TerminalUi;
use term2048::types::{ColorMode, DEFAULT_GOAL, DEFAULT_SIZE};

const SCORE_FILE: &str = ".term2048.score";
const STORE_FILE: &str = ".term2048.store";

const RULES: &str = "Join the numbers and get to the 2048 tile!\n\n\
Use the arrow keys (or h/j/k/l) to slide every tile in one direction.\n\
Equal neighbors merge into their sum, and every move that changes the\n\
board spawns a fresh 2 (or sometimes a 4). Reach 2048 to win; run out\n\
of moves and the game is over. Press space to save the game and quit.";

#[derive(Debug, Parser)]
#[command(name = "term2048", version, about = "2048 in your terminal")]
struct Cli {
    /// Resume the previously saved game
    #[arg(short, long)]
    resume: bool,

    /// Show tiles as letters instead of numbers
    #[arg(long)]
    azmode: bool,

    /// Adjust colors for a dark or light terminal background
    #[arg(short, long, value_parser = ["dark", "light"])]
    mode: Option<String>,

    /// Keep previous frames instead of clearing the screen
    #[arg(long)]
    no_clear: bool,

    /// Print the rules and exit
    #[arg(long)]
    rules: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.rules {
        println!("{}", RULES);
        return Ok(());
    }

    let mode = cli
        .mode
        .as_deref()
        .and_then(ColorMode::from_str)
        .unwrap_or_default();

    let board = Board::new(DEFAULT_SIZE, DEFAULT_GOAL, time_seed());
    let mut game = Game::new(board, state_file(SCORE_FILE), state_file(STORE_FILE));
    if cli.resume {
        // A missing or corrupt store silently starts a fresh game.
        game.restore();
    }

    let mut input = TerminalInput;
    let mut ui = TerminalUi::new(!cli.no_clear, cli.azmode, mode);
    ui.enter()?;

    let result = game.run(&mut input, &mut ui);

    // Always try to restore terminal state.
    let _ = ui.exit();

    match result? {
        LoopOutcome::Won(_) | LoopOutcome::Lost(_) | LoopOutcome::Saved(_) => Ok(()),
        LoopOutcome::Interrupted => Ok(()),
        LoopOutcome::SaveFailed => bail!("could not save the game"),
    }
}

fn state_file(name: &str) -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(name)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos() ^ elapsed.as_secs() as u32)
        .unwrap_or(1)
}
