//! Board widget: geometry, hit-testing and rendering.

use derive_new::new;
use pixel_chess_board::{FILES, Game, Side, SquareId, neighbours};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
};

use crate::DisplaySettings;

/// Columns reserved left of the grid for rank labels.
const LABEL_WIDTH: u16 = 2;
/// Rows reserved below the grid for file labels.
const LABEL_HEIGHT: u16 = 1;
/// Tallest cell we draw.
const MAX_CELL_HEIGHT: u16 = 3;

/// Where the 8x8 grid sits inside an area.
///
/// Pure function of the area, so the renderer and mouse hit-testing always
/// agree on which cell is where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    x: u16,
    y: u16,
    cell_width: u16,
    cell_height: u16,
}

impl BoardGeometry {
    /// Fits the largest grid (with labels) into `area`.
    ///
    /// Returns `None` if the area cannot hold a readable board.
    pub fn fit(area: Rect) -> Option<Self> {
        let avail_w = area.width.saturating_sub(LABEL_WIDTH);
        let avail_h = area.height.saturating_sub(LABEL_HEIGHT);

        let cell_height = (avail_h / 8).min(MAX_CELL_HEIGHT);
        let cell_width = (avail_w / 8).min(cell_height * 2 + 1);
        if cell_height == 0 || cell_width < 3 {
            return None;
        }

        Some(Self {
            x: area.x + LABEL_WIDTH + (avail_w - cell_width * 8) / 2,
            y: area.y + (avail_h - cell_height * 8) / 2,
            cell_width,
            cell_height,
        })
    }

    /// Screen rectangle of one square.
    pub fn square_rect(&self, square: SquareId) -> Rect {
        let column = square.file() as u16;
        let row = 7 - square.rank() as u16;
        Rect::new(
            self.x + column * self.cell_width,
            self.y + row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// The square under a terminal cell, if any.
    pub fn square_at(&self, column: u16, row: u16) -> Option<SquareId> {
        if column < self.x || row < self.y {
            return None;
        }
        let file = (column - self.x) / self.cell_width;
        let row_index = (row - self.y) / self.cell_height;
        if file >= 8 || row_index >= 8 {
            return None;
        }
        SquareId::new(file as u8, 7 - row_index as u8)
    }
}

/// Everything the board widget draws.
#[derive(Debug, Clone, Copy, new)]
pub struct BoardView<'a> {
    game: &'a Game,
    settings: DisplaySettings,
    cursor: Option<SquareId>,
}

/// Renders the board into `area`, or a hint if the area is too small.
pub fn render_board(frame: &mut Frame, area: Rect, view: BoardView<'_>) {
    let Some(geometry) = BoardGeometry::fit(area) else {
        let hint = Paragraph::new("Terminal too small for the board")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    };

    let selected = view.game.selection().square();
    let hinted: Vec<SquareId> = match selected {
        Some(origin) if view.settings.effects => neighbours(origin).collect(),
        _ => Vec::new(),
    };

    for square in SquareId::ALL {
        let rect = geometry.square_rect(square);
        let style = square_style(square, &view, selected, &hinted);
        frame.render_widget(Block::default().style(style), rect);

        if let Some(token) = view.game.board().get(square) {
            let glyph_style = match token.side() {
                Side::White => style.fg(Color::Blue).add_modifier(Modifier::BOLD),
                Side::Black => style.fg(Color::Red).add_modifier(Modifier::BOLD),
            };
            let glyph_area = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1);
            let glyph = Paragraph::new(Span::styled(token.glyph().to_string(), glyph_style))
                .alignment(Alignment::Center);
            frame.render_widget(glyph, glyph_area);
        }
    }

    render_labels(frame, &geometry);
}

fn square_style(
    square: SquareId,
    view: &BoardView<'_>,
    selected: Option<SquareId>,
    hinted: &[SquareId],
) -> Style {
    if selected == Some(square) {
        let style = Style::default().bg(Color::DarkGray);
        if view.settings.animations {
            return style.add_modifier(Modifier::SLOW_BLINK);
        }
        return style;
    }
    if view.cursor == Some(square) {
        return Style::default().bg(Color::Yellow);
    }
    if hinted.contains(&square) {
        return Style::default().bg(Color::LightGreen);
    }
    if square.is_light() {
        Style::default().bg(Color::White)
    } else {
        Style::default().bg(Color::Gray)
    }
}

fn render_labels(frame: &mut Frame, geometry: &BoardGeometry) {
    let label_style = Style::default().fg(Color::DarkGray);

    for rank in 0..8u8 {
        let Some(square) = SquareId::new(0, rank) else {
            continue;
        };
        let rect = geometry.square_rect(square);
        let label_area = Rect::new(
            rect.x - LABEL_WIDTH,
            rect.y + rect.height / 2,
            LABEL_WIDTH,
            1,
        );
        frame.render_widget(
            Paragraph::new(format!("{}", rank + 1)).style(label_style),
            label_area,
        );
    }

    for (file, letter) in FILES.iter().enumerate() {
        let Some(square) = SquareId::new(file as u8, 0) else {
            continue;
        };
        let rect = geometry.square_rect(square);
        let label_area = Rect::new(rect.x, rect.y + rect.height, rect.width, LABEL_HEIGHT);
        frame.render_widget(
            Paragraph::new(letter.to_string())
                .style(label_style)
                .alignment(Alignment::Center),
            label_area,
        );
    }
}
