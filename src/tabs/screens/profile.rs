//! Profile tab: placeholder statistics and achievement badges.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::Session;
use crate::tabs::tab::{TabScreen, TabTransition};

/// An achievement badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    /// Badge icon.
    pub icon: &'static str,
    /// Badge name.
    pub name: &'static str,
    /// Whether the badge is shown as earned.
    pub earned: bool,
}

/// Badges shown on the profile. Nothing awards them; the first is shown as
/// earned from the start.
pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        icon: "🏆",
        name: "Novice",
        earned: true,
    },
    Achievement {
        icon: "🎯",
        name: "Sniper",
        earned: false,
    },
    Achievement {
        icon: "⚡",
        name: "Lightning",
        earned: false,
    },
    Achievement {
        icon: "🧠",
        name: "Strategist",
        earned: false,
    },
];

/// Profile tab. Stateless.
#[derive(Debug, Default)]
pub struct ProfileScreen;

impl ProfileScreen {
    fn statistics() -> Paragraph<'static> {
        let row = |label: &'static str, color: Color| {
            Line::from(vec![
                Span::raw(format!("{label:<14}")),
                Span::styled(" 0 ", Style::default().fg(Color::Black).bg(color)),
            ])
        };

        Paragraph::new(vec![
            row("Games played:", Color::Gray),
            row("Wins:", Color::Green),
            row("Losses:", Color::Red),
        ])
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
    }

    fn achievements() -> Paragraph<'static> {
        let lines: Vec<Line> = ACHIEVEMENTS
            .iter()
            .map(|badge| {
                let style = if badge.earned {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(Span::styled(format!("{} {}", badge.icon, badge.name), style))
            })
            .collect();

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Achievements"))
    }
}

impl TabScreen for ProfileScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, area: Rect, _session: &Session) {
        let block = Block::default().borders(Borders::ALL).title("Player profile");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        frame.render_widget(Self::statistics(), columns[0]);
        frame.render_widget(Self::achievements(), columns[1]);
    }

    fn handle_key(&mut self, _key: KeyEvent, _session: &mut Session) -> TabTransition {
        TabTransition::Stay
    }

    fn help(&self) -> &'static str {
        "Profile data is not tracked"
    }
}
