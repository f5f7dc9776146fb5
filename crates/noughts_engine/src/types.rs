//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Marker placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the occupying marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }
}

/// Board dimension N (the board has N×N cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported dimension.
    pub const MIN: usize = 3;
    /// Largest supported dimension.
    pub const MAX: usize = 9;
    /// The classic 3×3 board.
    pub const CLASSIC: BoardSize = BoardSize(3);

    /// Validates a board dimension.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] when `n` lies outside
    /// [`BoardSize::MIN`]..=[`BoardSize::MAX`].
    #[instrument]
    pub fn new(n: usize) -> Result<Self, EngineError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(EngineError::InvalidBoardSize(n))
        }
    }

    /// Returns the dimension N.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the number of cells (N²).
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = EngineError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// N×N board in row-major order.
///
/// Index `i` maps to row `i / N`, column `i % N`. The storage is owned, so
/// cloning a board yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cell_count()],
        }
    }

    /// Returns the board dimension.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the number of cells (always N²).
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index, `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Indices of every empty cell, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Converts `(row, column)` into an index.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size.get() + col
    }

    /// Flattens the board into one optional marker per cell.
    pub fn to_cells(&self) -> Vec<Option<Marker>> {
        self.squares.iter().map(|square| square.marker()).collect()
    }

    /// Places a marker. Callers must have checked the index.
    pub(crate) fn place(&mut self, index: usize, marker: Marker) {
        self.squares[index] = Square::Occupied(marker);
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let n = self.size.get();
        let width = self.cell_count().to_string().len();
        let mut result = String::new();
        for row in 0..n {
            let cells: Vec<String> = (0..n)
                .map(|col| {
                    let index = self.index_of(row, col);
                    match self.squares[index] {
                        Square::Empty => format!("{:>width$}", index + 1),
                        Square::Occupied(marker) => format!("{:>width$}", marker),
                    }
                })
                .collect();
            result.push_str(&cells.join("|"));
            if row + 1 < n {
                result.push('\n');
                result.push_str(&vec!["-".repeat(width); n].join("+"));
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::CLASSIC)
    }
}

/// A completed line of N cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine(Vec<usize>);

impl WinningLine {
    pub(crate) fn new(cells: Vec<usize>) -> Self {
        Self(cells)
    }

    /// Cell indices of the line, in line order.
    pub fn cells(&self) -> &[usize] {
        &self.0
    }

    /// Whether `index` belongs to the line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Complete game state.
///
/// A `GameState` is never mutated after construction; every accepted move
/// yields a new value (see [`GameState::apply_move`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Marker to move next. Only meaningful while the game is active.
    pub(crate) current_player: Marker,
    /// False once a win or draw has been reached.
    pub(crate) is_game_active: bool,
    /// Winning marker; `None` on a finished game means a draw.
    pub(crate) winner: Option<Marker>,
    /// The completed line, present only on a win.
    pub(crate) winning_combination: Option<WinningLine>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, active.
    #[instrument]
    pub fn initial(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Marker::X,
            is_game_active: true,
            winner: None,
            winning_combination: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker to move.
    pub fn current_player(&self) -> Marker {
        self.current_player
    }

    /// Returns true while moves can still be made.
    pub fn is_game_active(&self) -> bool {
        self.is_game_active
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Marker> {
        self.winner
    }

    /// Returns the winning line, if the game was won.
    pub fn winning_combination(&self) -> Option<&WinningLine> {
        self.winning_combination.as_ref()
    }

    /// Returns true if the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        !self.is_game_active && self.winner.is_none()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(BoardSize::CLASSIC)
    }
}
