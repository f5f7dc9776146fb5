//! Draw detection logic.

use super::win::check_winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Marker;

    fn fill(pattern: &str) -> Board {
        let mut board = Board::default();
        for (index, c) in pattern.chars().enumerate() {
            match c {
                'X' => board.place(index, Marker::X),
                'O' => board.place(index, Marker::O),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::default()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&fill("....X....")));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&fill("XXXXXXXXX")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        assert!(is_draw(&fill("XOXOXXOXO")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        assert!(!is_draw(&fill("XXXOOXOXO")));
    }

    #[test]
    fn test_not_draw_if_not_full() {
        assert!(!is_draw(&fill("XOXOX....")));
    }
}
