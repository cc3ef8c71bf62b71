//! Tests for win detection and AI move selection.

use tictactoe_ai::{
    Board, Player, Position, Square, available_moves, best_move, check_winner, is_full,
};

fn board(cells: &str) -> Board {
    cells.parse().expect("valid board")
}

#[test]
fn test_empty_board_ai_opens_top_left() {
    // Every opening scores 0 under perfect play; the first one is kept.
    let mut b = Board::new();
    assert_eq!(best_move(&mut b, Player::X), Some(Position::TopLeft));
    assert_eq!(b, Board::new());
}

#[test]
fn test_ai_completes_own_row() {
    let mut b = board("XX.OO....");
    assert_eq!(best_move(&mut b, Player::X), Some(Position::TopRight));
}

#[test]
fn test_immediate_win_beats_block() {
    // Blocking at 2 also wins (double threat) but one ply later; 5 wins now.
    let mut b = board("OO.XX....");
    assert_eq!(best_move(&mut b, Player::X), Some(Position::MiddleRight));
}

#[test]
fn test_ai_blocks_opponent_row() {
    let mut b = board("OO.X.....");
    assert_eq!(best_move(&mut b, Player::X), Some(Position::TopRight));
}

#[test]
fn test_ai_as_o_blocks_diagonal() {
    // X threatens 0-4-8.
    let mut b = board("X...X..O.");
    assert_eq!(best_move(&mut b, Player::O), Some(Position::BottomRight));
}

#[test]
fn test_single_open_square_is_chosen() {
    let mut b = board("XOXXOOOX.");
    assert_eq!(best_move(&mut b, Player::X), Some(Position::BottomRight));
    assert_eq!(best_move(&mut b, Player::O), Some(Position::BottomRight));
}

#[test]
fn test_full_board_is_a_draw() {
    let b = board("XOXOXOOXO");
    assert_eq!(check_winner(&b), None);
    assert!(is_full(&b));
    assert!(available_moves(&b).is_empty());
}

#[test]
fn test_no_move_on_full_board() {
    let mut b = board("XOXOXOOXO");
    assert_eq!(best_move(&mut b, Player::O), None);
}

#[test]
fn test_winning_line_reported() {
    let win = check_winner(&board("X.O.XO..X")).expect("diagonal win");
    assert_eq!(win.player(), Player::X);
    assert_eq!(win.indices(), [0, 4, 8]);
}

/// Plays every X line against the AI as O; returns the number of games played.
fn play_out_against_ai(board: &mut Board) -> usize {
    let mut games = 0;
    for pos in available_moves(board) {
        board.set(pos, Square::Occupied(Player::X));
        assert_ne!(
            check_winner(board).map(|w| w.player()),
            Some(Player::X),
            "X beat the AI on {board}"
        );

        if is_full(board) {
            games += 1;
        } else {
            let reply = best_move(board, Player::O).expect("open squares remain");
            board.set(reply, Square::Occupied(Player::O));
            if check_winner(board).is_some() || is_full(board) {
                games += 1;
            } else {
                games += play_out_against_ai(board);
            }
            board.clear(reply);
        }

        board.clear(pos);
    }
    games
}

#[test]
fn test_ai_never_loses_as_second_player() {
    let mut b = Board::new();
    let games = play_out_against_ai(&mut b);
    assert!(games > 0);
    assert_eq!(b, Board::new());
}
