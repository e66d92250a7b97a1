//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use pixel_chess_board::SquareId;

/// Moves the board cursor one square in the direction of an arrow key.
///
/// The cursor stops at the board edge; other keys leave it unchanged.
pub fn move_cursor(cursor: SquareId, key: KeyCode) -> SquareId {
    let (file_delta, rank_delta) = match key {
        KeyCode::Left => (-1, 0),
        KeyCode::Right => (1, 0),
        KeyCode::Up => (0, 1),
        KeyCode::Down => (0, -1),
        _ => return cursor,
    };
    cursor.offset(file_delta, rank_delta).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> SquareId {
        label.parse().unwrap()
    }

    #[test]
    fn test_arrows_move_one_square() {
        assert_eq!(move_cursor(sq("e4"), KeyCode::Up), sq("e5"));
        assert_eq!(move_cursor(sq("e4"), KeyCode::Down), sq("e3"));
        assert_eq!(move_cursor(sq("e4"), KeyCode::Left), sq("d4"));
        assert_eq!(move_cursor(sq("e4"), KeyCode::Right), sq("f4"));
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        assert_eq!(move_cursor(sq("a1"), KeyCode::Left), sq("a1"));
        assert_eq!(move_cursor(sq("a1"), KeyCode::Down), sq("a1"));
        assert_eq!(move_cursor(sq("h8"), KeyCode::Right), sq("h8"));
        assert_eq!(move_cursor(sq("h8"), KeyCode::Up), sq("h8"));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(sq("c3"), KeyCode::Enter), sq("c3"));
        assert_eq!(move_cursor(sq("c3"), KeyCode::Char('x')), sq("c3"));
    }
}
