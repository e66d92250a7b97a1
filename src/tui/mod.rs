//! Terminal UI for Pixel Chess

pub(crate) mod board;
pub(crate) mod input;
pub(crate) mod ui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::{AppConfig, TabsController};

pub use board::{BoardGeometry, BoardView, render_board};
pub use input::move_cursor;
pub use ui::{AppLayout, center_rect};

/// Run the terminal UI until the user quits.
#[instrument(skip(config))]
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(log_file = %config.log_file().display(), "Starting Pixel Chess TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_terminal, restore_terminal)?;

    let mut controller = TabsController::new(*config.display(), *config.start_tab());
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    info!("Pixel Chess TUI exited");
    res
}

/// Switches to the alternate screen with mouse capture.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort undo of raw mode and [`enter_terminal`].
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

/// Runs `setup`; if it fails, runs `restore` before returning the setup error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed, restoring");
        if let Err(restore_err) = restore() {
            error!(error = %restore_err, "Terminal restore failed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let res: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no tty")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_skips_restore() {
        let restored = Cell::new(false);
        let res = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(res.unwrap(), 7);
        assert!(!restored.get());
    }

    #[test]
    fn test_restore_failure_keeps_setup_error() {
        let res: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no tty")),
            || Err(io::Error::other("still raw")),
        );
        assert_eq!(res.unwrap_err().to_string(), "no tty");
    }
}
