//! Tic-tac-toe engine with an exhaustive minimax AI.
//!
//! # Architecture
//!
//! - **Engine**: stateless rules ([`check_winner`], [`is_full`],
//!   [`available_moves`]) and the minimax search ([`best_move`])
//! - **Game**: caller-owned [`Game`] that drives the
//!   `InProgress -> Won | Draw` state machine
//! - **Settings**: [`GameSettings`] titles, messages and colors from TOML
//! - **Leaderboard**: in-memory [`Leaderboard`] standings
//!
//! # Example
//!
//! ```
//! use tictactoe_ai::{Board, Player, Position, best_move};
//!
//! let mut board: Board = "XX.OO....".parse().unwrap();
//! assert_eq!(best_move(&mut board, Player::X), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod leaderboard;
mod settings;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Game, GameStatus, LINES, Mark, Move, MoveError, Player, Position,
    Square, WIN_SCORE, WinningLine, available_moves, best_move, check_winner, is_draw, is_full,
    minimax,
};

// Crate-level exports - Settings
pub use settings::{ConfigError, GameSettings, PLAYER_PLACEHOLDER};

// Crate-level exports - Leaderboard
pub use leaderboard::{Leaderboard, LeaderboardEntry};
