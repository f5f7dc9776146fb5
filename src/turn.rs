//! Outcome of a single turn request.

use derive_more::Display;
use noughts_engine::{GameState, Rejection, Transition};

/// Why a turn left the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum NoOpCause {
    /// The engine rejected the chosen index.
    #[display("{}", _0)]
    Rejected(Rejection),
    /// There was no empty cell to choose from.
    #[display("No empty cell left")]
    NoEmptyCell,
    /// The reply did not start with a number.
    #[display("Could not read a cell index from {:?}", _0)]
    UnparseableReply(String),
    /// A human tried to move while the computer holds the turn.
    #[display("Wait for the AI to move")]
    NotHumanTurn,
    /// The computer was asked to move while it does not hold the turn.
    #[display("It is not the AI's turn")]
    NotAiTurn,
}

/// Result of a turn request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A move was made; this is the new state.
    Moved(GameState),
    /// No move was made; the previous state stands.
    NoOp(NoOpCause),
}

impl TurnOutcome {
    /// Returns true if a move was made.
    pub fn is_move(&self) -> bool {
        matches!(self, TurnOutcome::Moved(_))
    }

    /// Returns the new state, or `previous` unchanged on a no-op.
    pub fn resolve(self, previous: GameState) -> GameState {
        match self {
            TurnOutcome::Moved(next) => next,
            TurnOutcome::NoOp(_) => previous,
        }
    }
}

impl From<Transition> for TurnOutcome {
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::Applied(next) => TurnOutcome::Moved(next),
            Transition::Unchanged(reason) => TurnOutcome::NoOp(NoOpCause::Rejected(reason)),
        }
    }
}
