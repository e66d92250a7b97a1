//! Menu tab: main-menu entries. Only "New game" does anything.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tracing::{debug, info, instrument};

use crate::Session;
use crate::tabs::tab::{TabScreen, TabTransition};

/// Menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Reset the board.
    NewGame,
    /// Load a saved game (not available).
    LoadGame,
    /// Play against a remote opponent (not available).
    Multiplayer,
    /// Play against the computer (not available).
    VersusAi,
}

impl MenuOption {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New game",
            Self::LoadGame => "Load game",
            Self::Multiplayer => "Multiplayer",
            Self::VersusAi => "Versus AI",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::NewGame => "▶",
            Self::LoadGame => "⇪",
            Self::Multiplayer => "☺",
            Self::VersusAi => "⚙",
        }
    }

    /// All options in menu order.
    pub fn all() -> &'static [MenuOption] {
        &[
            Self::NewGame,
            Self::LoadGame,
            Self::Multiplayer,
            Self::VersusAi,
        ]
    }
}

/// State for the menu tab.
#[derive(Debug)]
pub struct MenuScreen {
    list_state: ListState,
}

impl MenuScreen {
    /// Creates the menu with the first entry selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MenuScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    /// Moves selection up.
    #[instrument(skip(self))]
    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    #[instrument(skip(self))]
    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected option.
    pub fn selected_option(&self) -> MenuOption {
        let options = MenuOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TabScreen for MenuScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, area: Rect, _session: &Session) {
        let items: Vec<ListItem> = MenuOption::all()
            .iter()
            .map(|opt| ListItem::new(format!("{} {}", opt.icon(), opt.label())))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Main menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, area, &mut list_state);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> TabTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                TabTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                TabTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::NewGame => TabTransition::NewGame,
                    other => {
                        session.set_status(format!("{} is not available", other.label()));
                        TabTransition::Stay
                    }
                }
            }
            _ => TabTransition::Stay,
        }
    }

    fn help(&self) -> &'static str {
        "↑↓: Navigate | Enter: Select"
    }
}
