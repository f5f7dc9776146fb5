//! Noughts - tic-tac-toe against a friend, a random AI or a generative AI.
//!
//! The rules live in [`noughts_engine`], a pure state machine; this crate adds
//! the computer opponents, a session that decides whose turn it is, and a
//! terminal front-end.
//!
//! # Architecture
//!
//! - **Opponents**: random and generative move providers behind [`Opponent`]
//! - **Session**: owns the game state and emits [`GameEvent`]s
//! - **TUI**: draws the board and reads the keyboard
//!
//! # Example
//!
//! ```
//! use noughts::{GameState, Marker, Phase, Session};
//!
//! let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut session = Session::human_vs_human(GameState::default(), tx);
//! session.human_move(4);
//! assert_eq!(session.phase(), Phase::HumanTurn(Marker::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod llm_client;
mod mode;
mod opponents;
mod session;
mod turn;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - LLM client
pub use llm_client::{CompletionBackend, LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Opponents
pub use opponents::{
    GenerativeOpponent, Opponent, OpponentError, RandomOpponent, SYSTEM_INSTRUCTION,
    board_message, parse_cell_index, system_instruction,
};

// Crate-level exports - Session
pub use mode::GameMode;
pub use session::{GameEvent, Phase, Session};
pub use turn::{NoOpCause, TurnOutcome};

// Crate-level exports - Engine types
pub use noughts_engine::{Board, BoardSize, GameState, Marker, Rejection, Square, Transition};
