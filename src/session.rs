//! Session state shared by all tabs: the game, display settings and the
//! status line.

use derive_getters::Getters;
use pixel_chess_board::{Activation, Game, SquareId};
use tracing::{debug, info, instrument};

use crate::DisplaySettings;

/// Everything the tabs read or mutate.
///
/// Owned by the [`TabsController`](crate::TabsController); every mutation
/// happens on the event loop, one event at a time.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    game: Game,
    settings: DisplaySettings,
    status: String,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new(settings: DisplaySettings) -> Self {
        info!("Creating session");
        let game = Game::new();
        let status = turn_prompt(&game);
        Self {
            game,
            settings,
            status,
        }
    }

    /// Activates a square on the board and updates the status line.
    #[instrument(skip(self), fields(square = %square))]
    pub fn activate(&mut self, square: SquareId) -> Activation {
        let activation = self.game.activate(square);
        self.status = match activation {
            Activation::Selected(square) => format!("Selected {square}"),
            Activation::Moved { from, to, captured } => {
                let prompt = turn_prompt(&self.game);
                match captured {
                    Some(token) => format!("{from} took {token} on {to}. {prompt}"),
                    None => format!("{from} to {to}. {prompt}"),
                }
            }
            Activation::Deselected { .. } | Activation::Ignored => turn_prompt(&self.game),
        };
        debug!(?activation, status = %self.status, "Session updated");
        activation
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.game.reset();
        self.status = format!("New game. {}", turn_prompt(&self.game));
    }

    /// Mutable access to the display settings.
    pub fn settings_mut(&mut self) -> &mut DisplaySettings {
        &mut self.settings
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

fn turn_prompt(game: &Game) -> String {
    format!("{} to move", game.turn())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_chess_board::Side;

    fn sq(label: &str) -> SquareId {
        label.parse().unwrap()
    }

    #[test]
    fn test_new_session_starts_fresh() {
        let session = Session::new(DisplaySettings::default());
        assert_eq!(session.game(), &Game::new());
        assert_eq!(session.status(), "White to move");
    }

    #[test]
    fn test_status_follows_activations() {
        let mut session = Session::new(DisplaySettings::default());
        assert_eq!(session.status(), "White to move");

        session.activate(sq("e2"));
        assert_eq!(session.status(), "Selected e2");

        session.activate(sq("e3"));
        assert_eq!(session.status(), "e2 to e3. Black to move");
        assert_eq!(session.game().turn(), Side::Black);
    }

    #[test]
    fn test_new_game_resets_board() {
        let mut session = Session::new(DisplaySettings::default());
        session.activate(sq("a2"));
        session.activate(sq("b3"));
        session.new_game();
        assert_eq!(session.game(), &Game::new());
        assert!(session.status().starts_with("New game"));
    }
}
