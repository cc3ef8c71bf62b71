//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines in scan order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    player: Player,
    line: [Position; 3],
}

impl WinningLine {
    /// The player owning all three squares.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three positions of the line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in the fixed order of [`LINES`] and the first line whose
/// three squares hold the same mark is returned. Board legality is not
/// checked, so on an unreachable board with several lines the earliest wins.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(WinningLine { player, line });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let win = check_winner(&board("XXX......")).unwrap();
        assert_eq!(win.player(), Player::X);
        assert_eq!(win.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_column() {
        let win = check_winner(&board(".O..O..O.")).unwrap();
        assert_eq!(win.player(), Player::O);
        assert_eq!(
            win.line(),
            [Position::TopCenter, Position::Center, Position::BottomCenter]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let win = check_winner(&board("..O.O.O..")).unwrap();
        assert_eq!(win.player(), Player::O);
        assert_eq!(win.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX.......")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_winner(&board("XOX......")), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Unreachable board: X owns the top row and the left column.
        let win = check_winner(&board("XXXX..X..")).unwrap();
        assert_eq!(win.indices(), [0, 1, 2]);

        // O on the bottom row is found before X on the left column.
        let win = check_winner(&board("X..X..OOO")).unwrap();
        assert_eq!(win.player(), Player::O);
        assert_eq!(win.indices(), [6, 7, 8]);
    }
}
