//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use noughts::tui::{self, App};
use noughts::{
    GameConfig, GameMode, GameState, GenerativeOpponent, LlmClient, Opponent, RandomOpponent,
    Session,
};
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Modes => {
            list_modes();
            Ok(())
        }
        Command::Pvp { board } => play(&cli.config, board, GameMode::HumanVsHuman, None).await,
        Command::Random { seed, board } => {
            play(&cli.config, board, GameMode::HumanVsRandom, seed).await
        }
        Command::Ai { board } => play(&cli.config, board, GameMode::HumanVsGenerative, None).await,
    }
}

fn list_modes() {
    for mode in GameMode::iter() {
        println!("{:<8} {}", mode.command(), mode.name());
    }
}

async fn play(
    config_path: &std::path::Path,
    board: BoardArgs,
    mode: GameMode,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)?;
    if let Some(size) = board.board_size {
        config = config.with_board_size(size);
    }

    tui::init_file_logging(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;
    info!(%mode, board_size = config.board_size().get(), "Starting game");

    let template = GameState::initial(*config.board_size());
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let session = if mode.has_ai() {
        let opponent = build_opponent(&config, mode, seed)?;
        Session::against(mode, opponent, template, event_tx)
    } else {
        Session::human_vs_human(template, event_tx)
    };

    tui::run_tui(App::new(session, event_rx)).await
}

fn build_opponent(
    config: &GameConfig,
    mode: GameMode,
    seed: Option<u64>,
) -> Result<Box<dyn Opponent>> {
    let opponent: Box<dyn Opponent> = match mode {
        GameMode::HumanVsRandom => {
            let ai = match seed {
                Some(seed) => RandomOpponent::seeded("Random AI", seed),
                None => RandomOpponent::new("Random AI"),
            };
            Box::new(ai.with_delay(config.ai_move_delay()))
        }
        GameMode::HumanVsGenerative => {
            let llm_config = config.create_llm_config()?;
            let name = format!("{} ({})", llm_config.provider(), llm_config.model());
            Box::new(GenerativeOpponent::new(name, LlmClient::new(llm_config)))
        }
        GameMode::HumanVsHuman => anyhow::bail!("{} has no computer opponent", mode),
    };
    Ok(opponent)
}
