//! Pure board logic for pixel chess.
//!
//! An 8x8 board with one rank of tokens per side. Players select one of
//! their tokens and move it to any adjacent square, overwriting whatever is
//! there. There are no piece types, no check and no win detection.
//!
//! # Example
//!
//! ```
//! use pixel_chess_board::{Activation, Game, Side};
//!
//! let mut game = Game::new();
//! game.activate_label("e2");
//! let moved = game.activate_label("f3");
//! assert!(matches!(moved, Activation::Moved { .. }));
//! assert_eq!(game.turn(), Side::Black);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
pub mod render;
mod rules;
mod square;
mod types;

pub use board::Board;
pub use game::{Activation, Game, Selection};
pub use render::render_text;
pub use rules::{is_valid_move, is_valid_move_labels, neighbours};
pub use square::{FILES, RANKS, SquareId, SquareParseError};
pub use types::{Side, Token};
