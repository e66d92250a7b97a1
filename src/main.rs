//! Pixel Chess - command-line entry point
//!
//! Runs the terminal UI by default, or replays moves headlessly.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use pixel_chess::{AppConfig, render_text, rules_text, run_script, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Play {
        no_animations: false,
        no_effects: false,
    }) {
        Command::Play {
            no_animations,
            no_effects,
        } => run_play(config, no_animations, no_effects).await,
        Command::Script { squares, json } => run_script_command(squares, json),
        Command::Rules => {
            init_stderr_tracing();
            info!("Printing rules");
            print!("{}", rules_text());
            Ok(())
        }
    }
}

/// Run the terminal UI, applying command-line overrides to the config.
async fn run_play(config: AppConfig, no_animations: bool, no_effects: bool) -> Result<()> {
    let mut display = *config.display();
    if no_animations {
        display = display.with_animations(false);
    }
    if no_effects {
        display = display.with_effects(false);
    }
    run_tui(config.with_display(display)).await
}

/// Replay activations and print the resulting game.
#[instrument(skip(squares))]
fn run_script_command(squares: Vec<String>, json: bool) -> Result<()> {
    init_stderr_tracing();

    info!(activations = squares.len(), "Running script");
    let game = run_script(&squares);

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
    } else {
        print!("{}", render_text(&game));
    }
    Ok(())
}

/// Headless commands log to stderr so stdout carries only the result.
fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
