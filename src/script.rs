//! Headless replay of square activations.

use pixel_chess_board::{Activation, Game, SquareId};
use tracing::{debug, info, instrument, warn};

/// Starts a fresh game and activates each label in order.
///
/// Malformed labels are logged and skipped, just as a click outside the
/// board would be.
#[instrument(skip(labels))]
pub fn run_script<I, S>(labels: I) -> Game
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut game = Game::new();
    let mut count = 0usize;

    for label in labels {
        let label = label.as_ref();
        count += 1;
        match game.activate_label(label) {
            Activation::Moved { from, to, captured } => {
                info!(%from, %to, captured = ?captured, turn = %game.turn(), "Move");
            }
            Activation::Ignored if label.parse::<SquareId>().is_err() => {
                warn!(label, "Not a square label");
            }
            activation => debug!(label, ?activation, "Activation"),
        }
    }

    info!(activations = count, turn = %game.turn(), "Script finished");
    game
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_chess_board::Side;

    #[test]
    fn test_empty_script_is_starting_position() {
        assert_eq!(run_script(Vec::<String>::new()), Game::new());
    }

    #[test]
    fn test_script_moves_and_flips_turn() {
        let game = run_script(["e2", "e3"]);
        let e3: SquareId = "e3".parse().unwrap();
        assert_eq!(game.board().get(e3).map(|t| t.side()), Some(Side::White));
        assert_eq!(game.turn(), Side::Black);
    }

    #[test]
    fn test_script_skips_garbage() {
        let game = run_script(["zz", "e2", "e9", "e3"]);
        assert_eq!(game.turn(), Side::Black);
    }
}
