//! Computer opponents.
//!
//! Opponents consume the engine only through [`GameState::apply_move`]:
//! each one picks a cell, applies it, and reports what happened.

mod generative;
mod random;

pub use generative::{
    GenerativeOpponent, SYSTEM_INSTRUCTION, board_message, parse_cell_index, system_instruction,
};
pub use random::RandomOpponent;

use crate::llm_client::LlmError;
use derive_more::{Display, Error, From};
use noughts_engine::{GameState, Marker};

pub use crate::turn::{NoOpCause, TurnOutcome};

/// Failure to obtain a move at all (as opposed to a rejected move).
#[derive(Debug, Clone, Display, Error, From)]
pub enum OpponentError {
    /// The remote text-generation service failed.
    #[display("{}", _0)]
    Llm(LlmError),
}

/// A computer-controlled player.
#[async_trait::async_trait]
pub trait Opponent: Send {
    /// Plays one turn for [`Opponent::marker`] on `state`.
    async fn take_turn(&mut self, state: &GameState) -> Result<TurnOutcome, OpponentError>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;

    /// The marker this opponent plays.
    fn marker(&self) -> Marker {
        Marker::O
    }
}
