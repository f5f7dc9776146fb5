//! Keyboard navigation over an N×N board.

use crossterm::event::KeyCode;

/// Moves the cursor one cell in the arrow's direction, stopping at the edges.
pub fn move_cursor(cursor: usize, size: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / size, cursor % size);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(size - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(size - 1)),
        _ => (row, col),
    };

    row * size + col
}

/// Maps digit keys `1`-`9` to cell indices on the classic 3×3 board.
///
/// Larger boards have more cells than digits, so they are cursor-only.
pub fn digit_index(c: char, size: usize) -> Option<usize> {
    if size != 3 {
        return None;
    }
    match c.to_digit(10)? {
        0 => None,
        d => Some(d as usize - 1),
    }
}
