//! Settings tab: graphics and sound toggles.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::Session;
use crate::tabs::settings::{SettingKind, on_off};
use crate::tabs::tab::{TabScreen, TabTransition};

/// State for the settings tab.
#[derive(Debug)]
pub struct SettingsScreen {
    list_state: ListState,
}

impl SettingsScreen {
    /// Creates the settings tab with the first toggle selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SettingsScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    /// Returns the toggle under the selection.
    pub fn selected_setting(&self) -> SettingKind {
        let idx = self.list_state.selected().unwrap_or(0);
        SettingKind::iter()
            .nth(idx)
            .unwrap_or(SettingKind::Animations)
    }

    fn move_selection(&mut self, forward: bool) {
        let count = SettingKind::iter().count();
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.list_state.select(Some(next));
    }

    /// Toggles the selected setting.
    #[instrument(skip(self, session))]
    fn toggle_selected(&mut self, session: &mut Session) {
        let kind = self.selected_setting();
        let value = session.settings_mut().toggle(kind);
        info!(setting = kind.label(), value, "Toggled setting");
        session.set_status(format!("{}: {}", kind.label(), on_off(value)));
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TabScreen for SettingsScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let settings = session.settings();
        let items: Vec<ListItem> = SettingKind::iter()
            .map(|kind| {
                ListItem::new(format!(
                    "{:<9} {:<14} [ {:>3} ]",
                    kind.group(),
                    kind.label(),
                    on_off(settings.get(kind))
                ))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Settings"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> TabTransition {
        match key.code {
            KeyCode::Up => {
                self.move_selection(false);
                TabTransition::Stay
            }
            KeyCode::Down => {
                self.move_selection(true);
                TabTransition::Stay
            }
            KeyCode::Enter | KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.toggle_selected(session);
                TabTransition::Stay
            }
            KeyCode::Esc => TabTransition::Switch(crate::TabKind::Game),
            _ => TabTransition::Stay,
        }
    }

    fn help(&self) -> &'static str {
        "↑↓: Navigate | ←→/Enter: Toggle | Esc: Back to game"
    }
}
