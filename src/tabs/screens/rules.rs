//! Rules tab.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::instrument;

use crate::Session;
use crate::tabs::tab::{TabScreen, TabTransition};
use crate::tui::ui::center_rect;

/// Basic rules, one per line.
pub const BASIC_RULES: [&str; 4] = [
    "Select one of your pawns",
    "Select an adjacent square to move there",
    "Goal: capture all of the opponent's pawns",
    "White moves first",
];

/// Pawn movement rules, one per line.
pub const PAWN_RULES: [&str; 4] = [
    "♙ White pawns move one square in any direction",
    "♟ Black pawns move one square in any direction",
    "🎯 Moving onto an occupied square captures what is there",
    "⚡ Pawns may move diagonally, forward, backward or sideways",
];

/// Plain-text rules for printing outside the terminal UI.
pub fn rules_text() -> String {
    let mut text = String::from("Basic rules:\n");
    for rule in BASIC_RULES {
        text.push_str(&format!("  - {rule}\n"));
    }
    text.push_str("\nPawn rules:\n");
    for rule in PAWN_RULES {
        text.push_str(&format!("  {rule}\n"));
    }
    text
}

/// Rules tab. Stateless.
#[derive(Debug, Default)]
pub struct RulesScreen;

impl TabScreen for RulesScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, area: Rect, _session: &Session) {
        let heading = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled("Basic rules:", heading))];
        lines.extend(BASIC_RULES.iter().map(|rule| Line::from(format!("  • {rule}"))));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Pawn rules:", heading)));
        lines.extend(PAWN_RULES.iter().map(|rule| Line::from(format!("  {rule}"))));

        let height = lines.len() as u16 + 2;
        let card = center_rect(area, area.width.min(70), area.height.min(height));
        let rules = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Game rules"));
        frame.render_widget(rules, card);
    }

    fn handle_key(&mut self, _key: KeyEvent, _session: &mut Session) -> TabTransition {
        TabTransition::Stay
    }

    fn help(&self) -> &'static str {
        "Read the rules, then press 1 to play"
    }
}
