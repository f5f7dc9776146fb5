//! Pure tic-tac-toe game-state engine.
//!
//! The engine operates on an immutable [`GameState`] value. Moves are
//! applied with [`GameState::apply_move`] (or the free [`apply_move`]),
//! which returns a [`Transition`]: either a brand-new state or
//! [`Transition::Unchanged`] with the [`Rejection`] that caused the no-op.
//! [`reset_game`] produces a fresh copy of an initial template.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{BoardSize, GameState, Marker, Transition};
//!
//! let state = GameState::initial(BoardSize::CLASSIC);
//! let Transition::Applied(state) = state.apply_move(4) else {
//!     unreachable!("center is free on an empty board");
//! };
//! assert_eq!(state.current_player(), Marker::O);
//! assert!(!state.apply_move(4).is_applied());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod rules;
mod transition;
mod types;

pub use error::EngineError;
pub use transition::{Rejection, Transition, apply_move, reset_game};
pub use types::{Board, BoardSize, GameState, Marker, Square, WinningLine};
