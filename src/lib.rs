//! Pixel Chess - a two-player pawn-only board game in the terminal
//!
//! Each side starts with a row of eight pawns. A pawn moves one square in
//! any direction and captures whatever stands on the destination.
//!
//! # Architecture
//!
//! - **Board**: pure game rules, in the `pixel_chess_board` crate
//! - **Session**: the game plus display settings and the status line
//! - **Tabs**: game, profile, rules, menu and settings panels
//! - **TUI**: ratatui rendering and the crossterm event loop
//!
//! # Example
//!
//! ```
//! use pixel_chess::{Side, run_script};
//!
//! let game = run_script(["e2", "e3"]);
//! assert_eq!(game.turn(), Side::Black);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod script;
mod session;
mod tabs;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Headless replay
pub use script::run_script;

// Crate-level exports - Session state
pub use session::Session;

// Crate-level exports - Tabs
pub use tabs::{
    ACHIEVEMENTS, Achievement, BASIC_RULES, DisplaySettings, GameScreen, MenuOption, MenuScreen,
    PAWN_RULES, ProfileScreen, RulesScreen, SettingKind, SettingsScreen, TabKind, TabScreen,
    TabTransition, TabsController, on_off, rules_text,
};

// Crate-level exports - Terminal UI
pub use tui::{
    AppLayout, BoardGeometry, BoardView, center_rect, move_cursor, render_board, run_tui,
};

// Crate-level exports - Game types
pub use pixel_chess_board::{
    Activation, Board, FILES, Game, RANKS, Selection, Side, SquareId, SquareParseError, Token,
    is_valid_move, is_valid_move_labels, neighbours, render_text,
};
