//! Command-line interface for tictactoe_ai.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe engine with an exhaustive minimax AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Evaluate tic-tac-toe boards and pick the AI's move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the AI's best move for a board
    BestMove {
        /// Board as nine cells in row-major order, e.g. "XX.OO...."
        #[arg(short, long)]
        board: String,

        /// Mark played by the AI (x or o)
        #[arg(short, long, default_value = "o")]
        ai: String,
    },

    /// Classify a board as in progress, won or drawn
    Status {
        /// Board as nine cells in row-major order, e.g. "XOXOXOOXO"
        #[arg(short, long)]
        board: String,

        /// Path to a settings TOML file for outcome messages
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
}
