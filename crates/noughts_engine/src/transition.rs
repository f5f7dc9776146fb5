//! State transitions: move application and reset.
//!
//! Transitions never mutate their input. A legal move produces a brand-new
//! [`GameState`]; an illegal one produces [`Transition::Unchanged`], the
//! documented no-op sentinel, and the caller keeps the state it already has.

use crate::rules::{check_winner, is_full};
use crate::types::GameState;
use derive_more::Display;
use tracing::{debug, info, instrument};

/// Why a move request left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Rejection {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(usize),

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    /// The move was accepted; this is the new state.
    Applied(GameState),
    /// The move was rejected; the previous state stands.
    Unchanged(Rejection),
}

impl Transition {
    /// Returns true if the move was accepted.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Transition::Applied(_) => None,
            Transition::Unchanged(reason) => Some(*reason),
        }
    }

    /// Returns the new state, or `previous` unchanged on a no-op.
    pub fn resolve(self, previous: GameState) -> GameState {
        match self {
            Transition::Applied(next) => next,
            Transition::Unchanged(_) => previous,
        }
    }
}

impl GameState {
    /// Places the current player's marker at `index`.
    ///
    /// Rejections are checked in order: inactive game, out-of-range index,
    /// occupied cell. On an accepted move the win check runs first, then
    /// the draw check; only if neither ends the game does the turn pass to
    /// the other marker.
    #[instrument(skip(self), fields(player = %self.current_player, active = self.is_game_active))]
    pub fn apply_move(&self, index: usize) -> Transition {
        if !self.is_game_active {
            debug!("Move rejected: game over");
            return Transition::Unchanged(Rejection::GameOver);
        }

        match self.board.get(index) {
            None => {
                debug!("Move rejected: out of range");
                return Transition::Unchanged(Rejection::OutOfRange(index));
            }
            Some(square) if square.marker().is_some() => {
                debug!("Move rejected: occupied");
                return Transition::Unchanged(Rejection::CellOccupied(index));
            }
            Some(_) => {}
        }

        let mut next = self.clone();
        next.board.place(index, self.current_player);

        // Check for winner
        if let Some((winner, line)) = check_winner(&next.board) {
            info!(%winner, line = ?line.cells(), "Game won");
            next.is_game_active = false;
            next.winner = Some(winner);
            next.winning_combination = Some(line);
            return Transition::Applied(next);
        }

        // Check for draw
        if is_full(&next.board) {
            info!("Game drawn");
            next.is_game_active = false;
            next.winner = None;
            return Transition::Applied(next);
        }

        // Switch player
        next.current_player = self.current_player.opponent();
        Transition::Applied(next)
    }
}

/// Applies a move to `state`; see [`GameState::apply_move`].
pub fn apply_move(index: usize, state: &GameState) -> Transition {
    state.apply_move(index)
}

/// Produces a fresh state from `template`.
///
/// The returned value owns its own board, so nothing done to it can reach
/// the template, which stays reusable as the seed for every later reset.
#[instrument(skip(template))]
pub fn reset_game(template: &GameState) -> GameState {
    debug!("Resetting game from template");
    template.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Marker};

    fn play(moves: &[usize]) -> GameState {
        moves.iter().fold(GameState::default(), |state, &index| {
            state.apply_move(index).resolve(state.clone())
        })
    }

    #[test]
    fn test_first_move_places_x_and_flips() {
        let state = GameState::default();
        let Transition::Applied(next) = state.apply_move(4) else {
            panic!("Center should be legal");
        };
        assert_eq!(next.board().get(4).and_then(|s| s.marker()), Some(Marker::X));
        assert_eq!(next.current_player(), Marker::O);
        assert!(next.is_game_active());
        // Input untouched
        assert!(state.board().is_empty(4));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let state = play(&[4]);
        assert_eq!(
            state.apply_move(4),
            Transition::Unchanged(Rejection::CellOccupied(4))
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let state = GameState::default();
        assert_eq!(
            state.apply_move(9),
            Transition::Unchanged(Rejection::OutOfRange(9))
        );
        assert_eq!(
            state.apply_move(usize::MAX),
            Transition::Unchanged(Rejection::OutOfRange(usize::MAX))
        );
    }

    #[test]
    fn test_game_over_checked_before_range() {
        let state = play(&[0, 4, 1, 5, 2]);
        assert_eq!(state.apply_move(42).rejection(), Some(Rejection::GameOver));
    }

    #[test]
    fn test_resolve_keeps_previous_on_noop() {
        let state = play(&[0]);
        let resolved = state.apply_move(0).resolve(state.clone());
        assert_eq!(resolved, state);
    }

    #[test]
    fn test_winner_keeps_current_player() {
        let state = play(&[0, 4, 1, 5, 2]);
        assert_eq!(state.winner(), Some(Marker::X));
        assert_eq!(state.current_player(), Marker::X);
    }

    #[test]
    fn test_reset_is_independent_copy() {
        let template = GameState::initial(BoardSize::CLASSIC);
        let fresh = reset_game(&template);
        let played = fresh.apply_move(0).resolve(fresh.clone());
        assert!(template.board().is_empty(0));
        assert!(!played.board().is_empty(0));
        assert_eq!(reset_game(&template), template);
    }
}
