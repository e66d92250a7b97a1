//! Tab trait and transition type for the tab controller.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::Session;

/// The five tabs, in tab-bar order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum TabKind {
    /// The board and game controls.
    #[default]
    Game,
    /// Player profile placeholders.
    Profile,
    /// Rules text.
    Rules,
    /// Main menu.
    Menu,
    /// Display settings.
    Settings,
}

impl TabKind {
    /// Position of this tab in the tab bar.
    pub fn index(self) -> usize {
        Self::iter().position(|tab| tab == self).unwrap_or(0)
    }

    /// Tab at the given tab-bar position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// The tab to the right, wrapping around.
    #[instrument]
    pub fn next(self) -> Self {
        let count = Self::iter().count();
        Self::from_index((self.index() + 1) % count).unwrap_or_default()
    }

    /// The tab to the left, wrapping around.
    #[instrument]
    pub fn previous(self) -> Self {
        let count = Self::iter().count();
        Self::from_index((self.index() + count - 1) % count).unwrap_or_default()
    }
}

/// The result of handling a key on a tab.
///
/// Tabs return this from [`TabScreen::handle_key`] to drive the
/// [`TabsController`](crate::TabsController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabTransition {
    /// Stay on the current tab.
    Stay,
    /// Switch to another tab.
    Switch(TabKind),
    /// Reset the game and show the board.
    NewGame,
    /// Exit the application.
    Quit,
}

/// Implemented by each tab panel.
///
/// Tabs render into the body area below the tab bar and handle the keys the
/// controller does not consume globally.
pub trait TabScreen {
    /// Renders the tab into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session);

    /// Handles a key event and returns the resulting [`TabTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> TabTransition;

    /// One-line key help shown in the footer.
    fn help(&self) -> &'static str;
}
