//! Win detection logic.

use crate::types::{Board, BoardSize, Marker, Square, WinningLine};
use tracing::instrument;

/// Returns the fixed set of 2N+2 winning lines.
///
/// Order is rows (top to bottom), columns (left to right), the main
/// diagonal, then the anti-diagonal. For the classic board this is
/// `[0,1,2] [3,4,5] [6,7,8] [0,3,6] [1,4,7] [2,5,8] [0,4,8] [2,4,6]`.
#[instrument]
pub fn winning_lines(size: BoardSize) -> Vec<WinningLine> {
    let n = size.get();
    let mut lines = Vec::with_capacity(2 * n + 2);

    // Rows
    for row in 0..n {
        lines.push(WinningLine::new((0..n).map(|col| row * n + col).collect()));
    }

    // Columns
    for col in 0..n {
        lines.push(WinningLine::new((0..n).map(|row| row * n + col).collect()));
    }

    // Diagonals
    lines.push(WinningLine::new((0..n).map(|i| i * n + i).collect()));
    lines.push(WinningLine::new((0..n).map(|i| i * n + (n - 1 - i)).collect()));

    lines
}

/// Checks if there is a winner on the board.
///
/// Returns the marker and the first completed line in
/// [`winning_lines`] order, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Marker, WinningLine)> {
    for line in winning_lines(board.size()) {
        let mut cells = line.cells().iter().map(|&i| board.get(i));
        let Some(Some(Square::Occupied(first))) = cells.next() else {
            continue;
        };
        if cells.all(|sq| sq == Some(Square::Occupied(first))) {
            return Some((first, line));
        }
    }

    None
}
