//! tictactoe_ai command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_ai::{Board, GameSettings, GameStatus, Player, best_move, check_winner};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::BestMove { board, ai } => run_best_move(&board, &ai),
        Command::Status { board, settings } => run_status(&board, settings),
    }
}

/// Print the AI's chosen move
#[instrument]
fn run_best_move(board: &str, ai: &str) -> Result<()> {
    let mut board: Board = board.parse()?;
    let ai: Player = ai.parse()?;

    println!("{}\n", board.display());
    match best_move(&mut board, ai) {
        Some(pos) => {
            info!(position = pos.to_index(), "Best move found");
            println!("{} plays {} ({})", ai, pos.to_index(), pos.label());
        }
        None => println!("No move available: the game is over"),
    }

    Ok(())
}

/// Print the board's status using the configured messages
#[instrument]
fn run_status(board: &str, settings: Option<PathBuf>) -> Result<()> {
    let board: Board = board.parse()?;
    let settings = match settings {
        Some(path) => GameSettings::from_file(path)?,
        None => GameSettings::default(),
    };

    println!("{}\n{}\n", settings.game_title(), board.display());

    let status = GameStatus::of(&board);
    match settings.outcome_message(&status) {
        Some(message) => println!("{}", message),
        None => println!("In progress, {} squares open", 9 - board.occupied()),
    }
    if let Some(win) = check_winner(&board) {
        println!("Winning line: {:?}", win.indices());
    }

    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictactoe_ai=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
