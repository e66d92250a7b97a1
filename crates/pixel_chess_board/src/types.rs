//! Core domain types: sides and tokens.

use serde::{Deserialize, Serialize};

/// One of the two sides of the board.
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
pub enum Side {
    /// Side A (moves first, starts on rank 2).
    White,
    /// Side B (starts on rank 7).
    Black,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// A token placed on the board.
///
/// Tokens carry nothing but the side they belong to; there are no piece
/// types. Ownership checks compare sides directly, never glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token {
    side: Side,
}

impl Token {
    /// White token.
    pub const WHITE: Token = Token { side: Side::White };
    /// Black token.
    pub const BLACK: Token = Token { side: Side::Black };

    /// Creates a token for the given side.
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    /// Returns the side this token belongs to.
    pub fn side(self) -> Side {
        self.side
    }

    /// Returns the glyph used to draw this token.
    pub fn glyph(self) -> char {
        match self.side {
            Side::White => '♙',
            Side::Black => '♟',
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
        assert_eq!(Side::White.opponent().opponent(), Side::White);
    }

    #[test]
    fn test_tokens_have_distinct_glyphs() {
        assert_ne!(Token::WHITE.glyph(), Token::BLACK.glyph());
        assert_eq!(Token::new(Side::Black), Token::BLACK);
    }

    #[test]
    fn test_token_serializes_as_side() {
        let json = serde_json::to_string(&Token::WHITE).unwrap();
        assert_eq!(json, "\"White\"");
    }
}
