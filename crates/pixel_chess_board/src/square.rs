//! Square identifiers: a file in a..h and a rank in 1..8.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// File letters in board order.
pub const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rank digits in board order.
pub const RANKS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// A square on the 8x8 board, e.g. `e4`.
///
/// Holds zero-based file and rank indices, so a malformed square cannot be
/// constructed. Serializes as its two-character label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SquareId {
    file: u8,
    rank: u8,
}

impl SquareId {
    /// All 64 squares in display order: rank 8 down to rank 1, file a to h.
    pub const ALL: [SquareId; 64] = {
        let mut squares = [SquareId { file: 0, rank: 0 }; 64];
        let mut i = 0;
        while i < 64 {
            squares[i] = SquareId {
                file: (i % 8) as u8,
                rank: 7 - (i / 8) as u8,
            };
            i += 1;
        }
        squares
    };

    /// Creates a square from zero-based file and rank indices.
    ///
    /// Returns `None` if either index is outside `0..8`.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then_some(Self { file, rank })
    }

    /// Zero-based file index (a = 0).
    pub fn file(self) -> u8 {
        self.file
    }

    /// Zero-based rank index (rank 1 = 0).
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Storage index (0-63), a1 = 0, h8 = 63.
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Inverse of [`SquareId::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 64).then(|| Self {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        })
    }

    /// Returns the square shifted by the given file and rank deltas, if it
    /// stays on the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = (self.file as i8).checked_add(file_delta)?;
        let rank = (self.rank as i8).checked_add(rank_delta)?;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Whether the square is drawn with the light colour (a8 and h1 are light).
    pub fn is_light(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }
}

impl std::fmt::Display for SquareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            FILES[self.file as usize], RANKS[self.rank as usize]
        )
    }
}

/// Error parsing a square label.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SquareParseError {
    /// The label is not exactly two characters.
    #[display("Square label must be two characters, got {:?}", _0)]
    Length(String),

    /// The first character is not a file letter.
    #[display("File {:?} is not in a..h", _0)]
    File(char),

    /// The second character is not a rank digit.
    #[display("Rank {:?} is not in 1..8", _0)]
    Rank(char),
}

impl std::error::Error for SquareParseError {}

impl FromStr for SquareId {
    type Err = SquareParseError;

    #[instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::Length(s.to_string()));
        };

        let file_index = FILES
            .iter()
            .position(|&c| c == file)
            .ok_or(SquareParseError::File(file))?;
        let rank_index = RANKS
            .iter()
            .position(|&c| c == rank)
            .ok_or(SquareParseError::Rank(rank))?;

        Ok(Self {
            file: file_index as u8,
            rank: rank_index as u8,
        })
    }
}

impl TryFrom<String> for SquareId {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SquareId> for String {
    fn from(square: SquareId) -> Self {
        square.to_string()
    }
}
