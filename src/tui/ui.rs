//! Frame chrome: header, tab bar and footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

use crate::{Session, TabKind};

/// Version badge shown next to the title.
const VERSION_BADGE: &str = " v1.0 ";

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title and turn indicator.
    pub header: Rect,
    /// Tab bar.
    pub tabs: Rect,
    /// Active tab panel.
    pub body: Rect,
    /// Status line and key help.
    pub footer: Rect,
}

impl AppLayout {
    /// Splits the frame area.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Tabs
                Constraint::Min(10),   // Body
                Constraint::Length(4), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            tabs: chunks[1],
            body: chunks[2],
            footer: chunks[3],
        }
    }
}

/// Draws the title, version badge and the side to move.
pub fn draw_header(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            "PIXEL CHESS ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            VERSION_BADGE,
            Style::default().fg(Color::Black).bg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), halves[0]);

    let turn = Paragraph::new(format!("Turn: {}", session.game().turn()))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Right);
    frame.render_widget(turn, halves[1]);
}

/// Draws the tab bar with `active` highlighted.
pub fn draw_tab_bar(frame: &mut Frame, area: Rect, active: TabKind) {
    let titles: Vec<Line> = TabKind::iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}

/// Draws the status line above the key help for the active tab.
pub fn draw_footer(frame: &mut Frame, area: Rect, session: &Session, help: &str) {
    let lines = vec![
        Line::from(Span::styled(
            session.status().as_str(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            format!("{help} | Tab/1-5: Switch tab | n: New game | q: Quit"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let footer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(footer, area);
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_sections() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.tabs.y, 3);
        assert_eq!(layout.body.y, 6);
        assert_eq!(layout.body.height, 30);
        assert_eq!(layout.footer.y, 36);
    }

    #[test]
    fn test_center_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = center_rect(area, 40, 10);
        assert_eq!(centered.width, 40);
        assert_eq!(centered.height, 10);
        assert_eq!(centered.x, 20);
        assert_eq!(centered.y, 7);
    }
}
