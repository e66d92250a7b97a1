//! The 8x8 board.

use crate::square::SquareId;
use crate::types::{Side, Token};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 8x8 board of optional tokens.
///
/// Stored as a fixed array indexed by [`SquareId::index`]; `None` marks an
/// empty square. Serializes as a sparse map from square label to token, so
/// only occupied squares appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<SquareId, Token>",
    from = "BTreeMap<SquareId, Token>"
)]
pub struct Board {
    squares: [Option<Token>; 64],
}

impl Board {
    /// Rank index holding White's tokens at the start (rank 2).
    pub const WHITE_HOME_RANK: u8 = 1;
    /// Rank index holding Black's tokens at the start (rank 7).
    pub const BLACK_HOME_RANK: u8 = 6;

    /// Creates a board with no tokens.
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Creates the starting board: a full rank of White tokens on rank 2 and
    /// a full rank of Black tokens on rank 7.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for square in SquareId::ALL {
            if square.rank() == Self::WHITE_HOME_RANK {
                board.place(square, Token::WHITE);
            } else if square.rank() == Self::BLACK_HOME_RANK {
                board.place(square, Token::BLACK);
            }
        }
        board
    }

    /// Returns the token on a square, if any.
    pub fn get(&self, square: SquareId) -> Option<Token> {
        self.squares[square.index()]
    }

    /// Checks if a square holds a token.
    pub fn is_occupied(&self, square: SquareId) -> bool {
        self.get(square).is_some()
    }

    /// Puts a token on a square, returning whatever was there before.
    pub fn place(&mut self, square: SquareId, token: Token) -> Option<Token> {
        self.squares[square.index()].replace(token)
    }

    /// Clears a square, returning the token that was on it.
    pub fn remove(&mut self, square: SquareId) -> Option<Token> {
        self.squares[square.index()].take()
    }

    /// Iterates over occupied squares in display order.
    pub fn occupied(&self) -> impl Iterator<Item = (SquareId, Token)> + '_ {
        SquareId::ALL
            .into_iter()
            .filter_map(|square| self.get(square).map(|token| (square, token)))
    }

    /// Counts the tokens belonging to one side.
    pub fn count(&self, side: Side) -> usize {
        self.occupied()
            .filter(|(_, token)| token.side() == side)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl From<Board> for BTreeMap<SquareId, Token> {
    fn from(board: Board) -> Self {
        board.occupied().collect()
    }
}

impl From<BTreeMap<SquareId, Token>> for Board {
    fn from(map: BTreeMap<SquareId, Token>) -> Self {
        let mut board = Board::empty();
        for (square, token) in map {
            board.place(square, token);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> SquareId {
        label.parse().unwrap()
    }

    #[test]
    fn test_starting_board_has_two_full_ranks() {
        let board = Board::starting();
        assert_eq!(board.count(Side::White), 8);
        assert_eq!(board.count(Side::Black), 8);
        assert_eq!(board.occupied().count(), 16);

        for square in SquareId::ALL {
            match square.rank() {
                1 => assert_eq!(board.get(square), Some(Token::WHITE), "{square}"),
                6 => assert_eq!(board.get(square), Some(Token::BLACK), "{square}"),
                _ => assert_eq!(board.get(square), None, "{square}"),
            }
        }
    }

    #[test]
    fn test_place_returns_displaced_token() {
        let mut board = Board::empty();
        assert_eq!(board.place(sq("d4"), Token::WHITE), None);
        assert_eq!(board.place(sq("d4"), Token::BLACK), Some(Token::WHITE));
        assert_eq!(board.get(sq("d4")), Some(Token::BLACK));
    }

    #[test]
    fn test_remove_clears_square() {
        let mut board = Board::starting();
        assert_eq!(board.remove(sq("a2")), Some(Token::WHITE));
        assert!(!board.is_occupied(sq("a2")));
        assert_eq!(board.remove(sq("a2")), None);
    }

    #[test]
    fn test_serializes_sparse() {
        let mut board = Board::empty();
        board.place(sq("e4"), Token::WHITE);
        board.place(sq("d5"), Token::BLACK);

        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"d5":"Black","e4":"White"}"#);

        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
