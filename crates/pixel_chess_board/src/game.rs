//! Select/move state machine.
//!
//! A game is either idle or holding a selected square. Activating a square
//! while idle selects it if it holds a token of the side to move. Activating
//! a square while a selection exists attempts the move and always clears the
//! selection; the turn flips only when the move is applied.

use crate::board::Board;
use crate::rules::is_valid_move;
use crate::square::SquareId;
use crate::types::{Side, Token};
use serde::Serialize;
use tracing::{debug, instrument};

/// Which square, if any, is chosen as the origin of the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    Idle,
    /// A token on this square is selected.
    Selected(SquareId),
}

impl Selection {
    /// Returns the selected square, if any.
    pub fn square(self) -> Option<SquareId> {
        match self {
            Selection::Idle => None,
            Selection::Selected(square) => Some(square),
        }
    }

    /// Checks whether `square` is the selected square.
    pub fn is(self, square: SquareId) -> bool {
        self.square() == Some(square)
    }
}

/// What a single activation did.
///
/// Returned for logging and status display. It never signals an error:
/// rejected activations are reported as [`Activation::Ignored`] or
/// [`Activation::Deselected`] and leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The square became the selection.
    Selected(SquareId),
    /// Nothing changed (empty square, opponent token, or malformed label).
    Ignored,
    /// The selected token moved; `captured` is whatever it overwrote.
    Moved {
        /// Origin square.
        from: SquareId,
        /// Destination square.
        to: SquareId,
        /// Token previously on the destination, if any.
        captured: Option<Token>,
    },
    /// The move was not valid; the selection was cleared.
    Deselected {
        /// Square that was selected.
        from: SquareId,
        /// Square that was activated.
        to: SquareId,
    },
}

/// Board, side to move and current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    turn: Side,
    selection: Selection,
}

impl Game {
    /// Creates a game in the starting position with White to move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Side::White)
    }

    /// Creates an idle game from an arbitrary board and side to move.
    pub fn from_board(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            selection: Selection::Idle,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Returns the current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Handles the user activating `square`.
    #[instrument(skip(self), fields(square = %square, turn = %self.turn, selection = ?self.selection))]
    pub fn activate(&mut self, square: SquareId) -> Activation {
        let activation = match self.selection {
            Selection::Idle => match self.board.get(square) {
                Some(token) if token.side() == self.turn => {
                    self.selection = Selection::Selected(square);
                    Activation::Selected(square)
                }
                _ => Activation::Ignored,
            },
            Selection::Selected(origin) => {
                self.selection = Selection::Idle;
                match self.board.get(origin) {
                    Some(token) if is_valid_move(origin, square) => {
                        self.board.remove(origin);
                        let captured = self.board.place(square, token);
                        self.turn = self.turn.opponent();
                        Activation::Moved {
                            from: origin,
                            to: square,
                            captured,
                        }
                    }
                    _ => Activation::Deselected {
                        from: origin,
                        to: square,
                    },
                }
            }
        };

        debug!(?activation, "Square activated");
        activation
    }

    /// Activates a square given by label. Malformed labels are ignored.
    #[instrument(skip(self))]
    pub fn activate_label(&mut self, label: &str) -> Activation {
        match label.parse::<SquareId>() {
            Ok(square) => self.activate(square),
            Err(e) => {
                debug!(error = %e, "Ignoring malformed square label");
                Activation::Ignored
            }
        }
    }

    /// Restores the starting position.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> SquareId {
        label.parse().unwrap()
    }

    #[test]
    fn test_new_game_is_idle_white_to_move() {
        let game = Game::new();
        assert_eq!(game.turn(), Side::White);
        assert_eq!(game.selection(), Selection::Idle);
        assert_eq!(game.board(), &Board::starting());
    }

    #[test]
    fn test_select_then_move() {
        let mut game = Game::new();
        assert_eq!(game.activate(sq("b2")), Activation::Selected(sq("b2")));
        assert!(game.selection().is(sq("b2")));

        let moved = game.activate(sq("b3"));
        assert_eq!(
            moved,
            Activation::Moved {
                from: sq("b2"),
                to: sq("b3"),
                captured: None
            }
        );
        assert_eq!(game.board().get(sq("b2")), None);
        assert_eq!(game.board().get(sq("b3")), Some(Token::WHITE));
        assert_eq!(game.turn(), Side::Black);
        assert_eq!(game.selection(), Selection::Idle);
    }

    #[test]
    fn test_reselecting_same_square_clears_selection() {
        let mut game = Game::new();
        game.activate(sq("e2"));
        assert_eq!(
            game.activate(sq("e2")),
            Activation::Deselected {
                from: sq("e2"),
                to: sq("e2")
            }
        );
        assert_eq!(game.selection(), Selection::Idle);
        assert_eq!(game.turn(), Side::White);
    }

    #[test]
    fn test_own_token_is_overwritten() {
        let mut game = Game::new();
        game.activate(sq("c2"));
        let moved = game.activate(sq("d2"));
        assert_eq!(
            moved,
            Activation::Moved {
                from: sq("c2"),
                to: sq("d2"),
                captured: Some(Token::WHITE)
            }
        );
        assert_eq!(game.board().count(Side::White), 7);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut game = Game::new();
        game.activate(sq("a2"));
        game.activate(sq("a3"));
        game.activate(sq("h7"));
        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_activate_label_ignores_garbage() {
        let mut game = Game::new();
        assert_eq!(game.activate_label("zz"), Activation::Ignored);
        assert_eq!(game.activate_label("a2"), Activation::Selected(sq("a2")));
        assert_eq!(game.activate_label("a9"), Activation::Ignored);
        assert!(game.selection().is(sq("a2")));
    }
}
