//! Tic-tac-toe engine: board model, rules, minimax AI and a caller-side game.

mod action;
mod game;
mod minimax;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GameStatus};
pub use minimax::{WIN_SCORE, best_move, minimax};
pub use position::Position;
pub use rules::{LINES, WinningLine, available_moves, check_winner, is_draw, is_full};
pub use types::{Board, BoardParseError, Player, Square};

/// A player's mark on the board.
pub type Mark = Player;
