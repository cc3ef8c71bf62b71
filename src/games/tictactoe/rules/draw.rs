//! Draw detection and open-square enumeration for tic-tac-toe.

use super::super::{Board, Position, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a finished draw: full and without a winning line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

/// Returns every empty position in ascending index order.
///
/// The result is empty exactly when [`is_full`] holds.
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}
