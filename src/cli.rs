//! Command-line interface for noughts.

use clap::{Args, Parser, Subcommand};
use noughts_engine::BoardSize;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(
    about = "Play tic-tac-toe against a friend, a random AI or a generative AI",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if it is missing)
    #[arg(short, long, default_value = "noughts.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Two players sharing the keyboard
    Pvp {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Play against an AI choosing random empty cells
    Random {
        /// Seed for a reproducible opponent
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        board: BoardArgs,
    },

    /// Play against a generative model
    Ai {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// List the available game modes
    Modes,
}

/// Board options shared by every game command.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct BoardArgs {
    /// Board dimension N (3 to 9), overriding the configuration
    #[arg(long, value_parser = parse_board_size)]
    pub board_size: Option<BoardSize>,
}

fn parse_board_size(s: &str) -> Result<BoardSize, String> {
    let n: usize = s.parse().map_err(|e| format!("{}", e))?;
    BoardSize::new(n).map_err(|e| e.to_string())
}
