//! Move validation.
//!
//! A move is valid when the destination is one of the up to eight squares
//! touching the origin. Direction, occupancy and side are not considered.

use crate::square::SquareId;
use tracing::{instrument, trace};

/// Checks whether `to` is adjacent to `from` (orthogonally or diagonally).
///
/// A square is never adjacent to itself.
pub fn is_valid_move(from: SquareId, to: SquareId) -> bool {
    let file_delta = from.file().abs_diff(to.file());
    let rank_delta = from.rank().abs_diff(to.rank());
    file_delta <= 1 && rank_delta <= 1 && file_delta + rank_delta > 0
}

/// Label-based variant of [`is_valid_move`] for untrusted input.
///
/// Returns `false` if either label is not a well-formed square.
#[instrument]
pub fn is_valid_move_labels(from: &str, to: &str) -> bool {
    match (from.parse::<SquareId>(), to.parse::<SquareId>()) {
        (Ok(from), Ok(to)) => is_valid_move(from, to),
        (from, to) => {
            trace!(?from, ?to, "Malformed square label");
            false
        }
    }
}

/// Iterates over the squares a token on `square` may move to.
pub fn neighbours(square: SquareId) -> impl Iterator<Item = SquareId> {
    const DELTAS: [(i8, i8); 8] = [
        (-1, 1),
        (0, 1),
        (1, 1),
        (-1, 0),
        (1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];

    DELTAS
        .into_iter()
        .filter_map(move |(df, dr)| square.offset(df, dr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> SquareId {
        label.parse().unwrap()
    }

    #[test]
    fn test_adjacent_squares() {
        assert!(is_valid_move(sq("e4"), sq("e5")));
        assert!(is_valid_move(sq("e4"), sq("f5")));
        assert!(is_valid_move(sq("e4"), sq("d3")));
        assert!(is_valid_move(sq("e4"), sq("d4")));
    }

    #[test]
    fn test_distant_or_same_squares() {
        assert!(!is_valid_move(sq("e4"), sq("e6")));
        assert!(!is_valid_move(sq("e4"), sq("e4")));
        assert!(!is_valid_move(sq("e4"), sq("g4")));
        assert!(!is_valid_move(sq("a1"), sq("h8")));
    }

    #[test]
    fn test_labels_with_bad_input_are_invalid() {
        assert!(is_valid_move_labels("e4", "e5"));
        assert!(!is_valid_move_labels("e4", "e9"));
        assert!(!is_valid_move_labels("", "e5"));
        assert!(!is_valid_move_labels("x4", "x5"));
        assert!(!is_valid_move_labels("e44", "e5"));
    }

    #[test]
    fn test_neighbour_counts() {
        assert_eq!(neighbours(sq("e4")).count(), 8);
        assert_eq!(neighbours(sq("a1")).count(), 3);
        assert_eq!(neighbours(sq("a4")).count(), 5);
        assert_eq!(neighbours(sq("h8")).count(), 3);
    }

    #[test]
    fn test_neighbours_agree_with_validator() {
        for from in SquareId::ALL {
            let listed: Vec<SquareId> = neighbours(from).collect();
            for to in SquareId::ALL {
                assert_eq!(listed.contains(&to), is_valid_move(from, to), "{from} -> {to}");
            }
        }
    }
}
