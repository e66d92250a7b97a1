//! Command-line interface for pixel_chess.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pixel_chess::DEFAULT_CONFIG_FILE;

/// Pixel Chess - pawns only, one square at a time
#[derive(Parser, Debug)]
#[command(name = "pixel_chess")]
#[command(about = "A two-player pawn game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Turn off the blinking selection
        #[arg(long)]
        no_animations: bool,

        /// Turn off move highlighting
        #[arg(long)]
        no_effects: bool,
    },

    /// Replay square activations from a fresh game and print the result
    Script {
        /// Square labels to activate in order, e.g. e2 e3
        squares: Vec<String>,

        /// Print the game state as JSON instead of a text board
        #[arg(long)]
        json: bool,
    },

    /// Print the rules
    Rules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["pixel_chess"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_script_arguments() {
        let cli = Cli::try_parse_from(["pixel_chess", "script", "e2", "e3", "--json"]).unwrap();
        match cli.command {
            Some(Command::Script { squares, json }) => {
                assert_eq!(squares, vec!["e2", "e3"]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "pixel_chess",
            "--config",
            "other.toml",
            "play",
            "--no-effects",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(
            cli.command,
            Some(Command::Play {
                no_animations: false,
                no_effects: true
            })
        ));
    }
}
