//! Tests for the caller-side game state machine.

use tictactoe_ai::{Board, Game, GameStatus, Move, MoveError, Player, Position};

#[test]
fn test_win_detection_records_line() {
    let mut game = Game::new(Player::X);
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
    ] {
        assert_eq!(game.play(pos), Ok(GameStatus::InProgress));
    }

    assert_eq!(game.play(Position::TopRight), Ok(GameStatus::Won(Player::X)));
    assert_eq!(game.winning_line().map(|w| w.indices()), Some([0, 1, 2]));
    assert_eq!(game.play(Position::BottomRight), Err(MoveError::GameOver));
}

#[test]
fn test_draw_detection() {
    let mut game = Game::new(Player::X);
    let moves = [
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomRight,
        Position::BottomLeft,
    ];
    let mut status = GameStatus::InProgress;
    for pos in moves {
        status = game.play(pos).expect("legal move");
    }
    assert_eq!(status, GameStatus::Draw);
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_history_records_moves() {
    let mut game = Game::new(Player::O);
    game.play(Position::Center).unwrap();
    game.play(Position::TopLeft).unwrap();
    assert_eq!(
        game.history(),
        &[
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopLeft)
        ]
    );
}

#[test]
fn test_ai_takes_the_win() {
    let board: Board = "XX.OO....".parse().unwrap();
    let mut game = Game::from_board(board, Player::O);
    let (pos, status) = game.play_ai().unwrap();
    assert_eq!(pos, Position::MiddleRight);
    assert_eq!(status, GameStatus::Won(Player::O));
}

#[test]
fn test_ai_against_ai_is_a_draw() {
    let mut game = Game::new(Player::X);
    let mut status = GameStatus::InProgress;
    while !status.is_over() {
        status = game.play_ai().expect("game in progress").1;
    }
    assert_eq!(status, GameStatus::Draw);
    assert_eq!(game.play_ai(), Err(MoveError::GameOver));
}

#[test]
fn test_from_finished_board() {
    let board: Board = "OOOXX.X..".parse().unwrap();
    let game = Game::from_board(board, Player::X);
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(game.winning_line().map(|w| w.player()), Some(Player::O));
}

#[test]
fn test_restart() {
    let mut game = Game::new(Player::O);
    game.play(Position::Center).unwrap();
    game.restart();
    assert_eq!(game.to_move(), Player::O);
    assert!(game.history().is_empty());
    assert_eq!(game.board(), &Board::new());
}
