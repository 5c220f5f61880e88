//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// Moves the cursor one cell for an arrow key; stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps the digit keys 1-9 to board indices 0-8.
pub fn digit_index(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
