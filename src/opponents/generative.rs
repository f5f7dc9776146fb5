//! Opponent backed by a remote text-generation service.
//!
//! The board is sent as a flattened JSON array together with a fixed system
//! instruction; the reply is read the way a lenient integer parser would
//! (leading whitespace, optional sign, then digits) and handed straight to
//! the engine. Illegal or unreadable replies become no-ops, never errors.

use super::{NoOpCause, Opponent, OpponentError, TurnOutcome};
use crate::llm_client::CompletionBackend;
use noughts_engine::{Board, GameState, Marker};
use tracing::{info, instrument, warn};

/// System instruction sent with every request.
///
/// `{last}` and `{size}` are filled in per board.
pub const SYSTEM_INSTRUCTION: &str = "We are now playing tic-tac-toe game. \
The board is {size} by {size} and its cells are numbered from 0 to {last}, \
left to right and top to bottom. For example: top-left is 0, the cell to its \
right is 1, and so on. You are playing as 'O' and I am playing as 'X'. \
I will give you the board state array. The array index represents the cell \
number and null marks an empty cell. Please respond with the index of the \
cell where you want to place your 'O'. You can only choose an empty cell. \
You have to respond with only the index number. You have to play to win.";

/// Builds the system instruction for `board`.
pub fn system_instruction(board: &Board) -> String {
    SYSTEM_INSTRUCTION
        .replace("{size}", &board.size().get().to_string())
        .replace("{last}", &(board.cell_count() - 1).to_string())
}

/// Builds the user message describing `board`.
pub fn board_message(board: &Board) -> String {
    let cells = serde_json::to_string(&board.to_cells()).unwrap_or_else(|_| "[]".to_string());
    format!(
        "The current board state is {}. Where do you want to place your {}?",
        cells,
        Marker::O
    )
}

/// Reads a cell index from the start of `reply`.
///
/// Mirrors a lenient integer parse: whitespace is skipped, a sign is
/// accepted, digits are read until the first non-digit. Returns `None` when
/// no digits follow, or the number is negative or does not fit.
pub fn parse_cell_index(reply: &str) -> Option<usize> {
    let trimmed = reply.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }

    let value: usize = digits.parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// Generative AI.
pub struct GenerativeOpponent<B> {
    name: String,
    backend: B,
}

impl<B: CompletionBackend> GenerativeOpponent<B> {
    /// Creates a generative opponent talking to `backend`.
    pub fn new(name: impl Into<String>, backend: B) -> Self {
        Self {
            name: name.into(),
            backend,
        }
    }
}

#[async_trait::async_trait]
impl<B: CompletionBackend> Opponent for GenerativeOpponent<B> {
    #[instrument(skip(self, state), fields(ai = %self.name))]
    async fn take_turn(&mut self, state: &GameState) -> Result<TurnOutcome, OpponentError> {
        let board = state.board();
        let reply = self
            .backend
            .generate(&system_instruction(board), &board_message(board))
            .await?;

        let Some(index) = parse_cell_index(&reply) else {
            warn!(reply = %reply, "Reply has no cell index");
            return Ok(TurnOutcome::NoOp(NoOpCause::UnparseableReply(reply)));
        };

        info!(position = index, "AI chose cell index");
        let outcome = TurnOutcome::from(state.apply_move(index));
        if let TurnOutcome::NoOp(cause) = &outcome {
            warn!(position = index, %cause, "AI move rejected");
        }
        Ok(outcome)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
