//! Game tab: the board plus statistics and control cards.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use pixel_chess_board::SquareId;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::Session;
use crate::tabs::tab::{TabScreen, TabTransition};
use crate::tui::board::{BoardGeometry, BoardView, render_board};
use crate::tui::input::move_cursor;

/// Placeholder values on the statistics card. Moves and time are not tracked.
const MOVES_MADE: &str = "0";
const GAME_TIME: &str = "00:00";

/// State for the game tab.
#[derive(Debug, Getters)]
pub struct GameScreen {
    cursor: SquareId,
}

impl GameScreen {
    /// Creates the game tab with the cursor on e2.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameScreen");
        Self {
            cursor: SquareId::new(4, 1).unwrap_or(SquareId::ALL[0]),
        }
    }

    /// Splits the body into the board panel and the side panel.
    fn split(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn board_block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title("Board")
            .style(Style::default().bg(Color::Black))
    }

    /// Board geometry for a given tab body area.
    pub fn board_geometry(body: Rect) -> Option<BoardGeometry> {
        let (board_panel, _) = Self::split(body);
        BoardGeometry::fit(Self::board_block().inner(board_panel))
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(5)])
            .split(area);

        let stats = Paragraph::new(vec![
            stat_line("Moves made", MOVES_MADE),
            stat_line("Game time", GAME_TIME),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Game statistics"),
        );
        frame.render_widget(stats, chunks[0]);

        let inert = Style::default().fg(Color::DarkGray);
        let controls = Paragraph::new(vec![
            Line::from(Span::styled("u  Undo move", inert)),
            Line::from(Span::styled("s  Save game", inert)),
            Line::from(Span::styled(
                "n  New game",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Controls"));
        frame.render_widget(controls, chunks[1]);
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn stat_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label}: ")),
        Span::styled(
            value.to_string(),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
    ])
}

impl TabScreen for GameScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let (board_panel, side_panel) = Self::split(area);

        let block = Self::board_block();
        let inner = block.inner(board_panel);
        frame.render_widget(block, board_panel);
        render_board(
            frame,
            inner,
            BoardView::new(session.game(), *session.settings(), Some(self.cursor)),
        );

        self.render_side_panel(frame, side_panel);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> TabTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                debug!(cursor = %self.cursor, "Cursor moved");
                TabTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                session.activate(self.cursor);
                TabTransition::Stay
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                info!("Undo requested but not available");
                session.set_status("Undo is not available");
                TabTransition::Stay
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                info!("Save requested but not available");
                session.set_status("Saving is not available");
                TabTransition::Stay
            }
            _ => TabTransition::Stay,
        }
    }

    fn help(&self) -> &'static str {
        "Arrows: Move cursor | Enter/Space/Click: Select or move"
    }
}
