//! Plain-text projection of a game.

use crate::game::Game;
use crate::square::{FILES, SquareId};

/// Formats the board as text, with the selected square in brackets and the
/// side to move on the last line.
///
/// ```text
///     a  b  c  d  e  f  g  h
///  8  .  .  .  .  .  .  .  .  8
///  7  ♟  ♟  ♟  ♟  ♟  ♟  ♟  ♟  7
///  ...
///  2  ♙ [♙] ♙  ♙  ♙  ♙  ♙  ♙  2
///  1  .  .  .  .  .  .  .  .  1
///     a  b  c  d  e  f  g  h
/// Turn: White
/// ```
pub fn render_text(game: &Game) -> String {
    let mut files = String::from("   ");
    for file in FILES {
        files.push_str(&format!(" {file} "));
    }
    files.push('\n');

    let mut result = files.clone();
    for row in SquareId::ALL.chunks(8) {
        let rank = row[0].rank() + 1;
        result.push_str(&format!(" {rank} "));
        for &square in row {
            let symbol = game
                .board()
                .get(square)
                .map_or('.', |token| token.glyph());
            if game.selection().is(square) {
                result.push_str(&format!("[{symbol}]"));
            } else {
                result.push_str(&format!(" {symbol} "));
            }
        }
        result.push_str(&format!(" {rank}\n"));
    }
    result.push_str(&files);
    result.push_str(&format!("Turn: {}\n", game.turn()));
    result
}
