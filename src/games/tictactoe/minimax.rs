//! Exhaustive minimax search for the AI player.
//!
//! The search walks the whole remaining game tree (at most nine plies) with no
//! pruning. Scores are taken from the AI's point of view: a win `d` plies away
//! scores `10 - d`, a loss scores `d - 10` and a draw scores `0`, so faster
//! wins and slower losses are preferred.
//!
//! The board is used as scratch space: each candidate mark is placed, scored
//! and then cleared again, so callers get their board back unchanged.

use super::rules::{available_moves, check_winner, is_full};
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument, trace};

/// Score of an immediate win; decreases by one per ply of delay.
pub const WIN_SCORE: i32 = 10;

/// Scores `board` for `ai` by searching every continuation.
///
/// `depth` is the number of plies already played below the root and
/// `maximizing` tells whose turn it is (`true` for `ai`). Among equal scores
/// the first move in ascending position order is kept.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool, ai: Player, human: Player) -> i32 {
    if let Some(win) = check_winner(board) {
        if win.player() == ai {
            return WIN_SCORE - depth;
        }
        if win.player() == human {
            return depth - WIN_SCORE;
        }
    }
    if is_full(board) {
        return 0;
    }

    let mover = if maximizing { ai } else { human };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in available_moves(board) {
        board.set(pos, Square::Occupied(mover));
        let score = minimax(board, depth + 1, !maximizing, ai, human);
        board.clear(pos);

        if (maximizing && score > best) || (!maximizing && score < best) {
            best = score;
        }
    }

    best
}

/// Picks the strongest move for `ai` on `board`.
///
/// Every open square is tried in ascending order and scored with the
/// opponent to move; the first square with the strictly highest score wins.
///
/// Returns `None` when there is nothing to decide: the board is full or a
/// player already owns a line.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &mut Board, ai: Player) -> Option<Position> {
    if let Some(win) = check_winner(board) {
        debug!(winner = %win.player(), "Board already won, no move to search");
        return None;
    }

    let human = ai.opponent();
    let mut best: Option<(Position, i32)> = None;

    for pos in available_moves(board) {
        board.set(pos, Square::Occupied(ai));
        let score = minimax(board, 0, false, ai, human);
        board.clear(pos);

        trace!(position = %pos, score, "Scored candidate");
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => {
            debug!(position = %pos, score, "Selected move");
            Some(pos)
        }
        None => {
            debug!("No available moves");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        let mut won = board("XXXOO....");
        assert_eq!(minimax(&mut won, 0, false, Player::X, Player::O), 10);
        assert_eq!(minimax(&mut won, 3, true, Player::X, Player::O), 7);
        assert_eq!(minimax(&mut won, 2, true, Player::O, Player::X), -8);

        let mut drawn = board("XOXOXOOXO");
        assert_eq!(minimax(&mut drawn, 4, true, Player::X, Player::O), 0);
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut b = board("X...O....");
        let before = b.clone();
        minimax(&mut b, 0, true, Player::X, Player::O);
        assert_eq!(b, before);
    }

    #[test]
    fn test_opponent_threat_scores_as_loss() {
        // O to move with O O _ on top: O completes the row at depth 1.
        let mut b = board("OO.X.X...");
        assert_eq!(minimax(&mut b, 0, false, Player::X, Player::O), -9);
    }

    #[test]
    fn test_best_move_takes_immediate_win() {
        let mut b = board("XX.OO....");
        assert_eq!(best_move(&mut b, Player::X), Some(Position::TopRight));
    }

    #[test]
    fn test_best_move_none_on_full_board() {
        let mut b = board("XOXOXOOXO");
        assert_eq!(best_move(&mut b, Player::X), None);
    }

    #[test]
    fn test_best_move_none_on_won_board() {
        let mut b = board("XXXOO....");
        assert_eq!(best_move(&mut b, Player::O), None);
        assert_eq!(b, board("XXXOO...."));
    }
}
