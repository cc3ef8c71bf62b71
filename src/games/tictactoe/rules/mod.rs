//! Game rules for tic-tac-toe.
//!
//! Pure functions classifying a board: who has won and along which line,
//! whether the board is full, and which squares are still open. Rules are
//! separated from board storage so the search and the game loop share them.

pub mod draw;
pub mod win;

pub use draw::{available_moves, is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner};
