//! Caller-side game loop for tic-tac-toe.
//!
//! The engine functions in [`rules`](super::rules) and
//! [`minimax`](super::minimax) are stateless. [`Game`] owns a board and
//! drives the `InProgress -> Won | Draw` state machine on top of them.

use super::action::{Move, MoveError};
use super::minimax::best_move;
use super::rules::{WinningLine, check_winner, is_full};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Classifies a board.
    pub fn of(board: &Board) -> Self {
        match check_winner(board) {
            Some(win) => GameStatus::Won(win.player()),
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A tic-tac-toe game owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    first_player: Player,
    to_move: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            first_player,
            to_move: first_player,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Resumes a game from an arbitrary board with `to_move` next.
    ///
    /// The board is classified immediately, so a finished board yields a
    /// finished game. History starts empty.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let winning_line = check_winner(&board);
        let status = GameStatus::of(&board);
        Self {
            board,
            first_player: to_move,
            to_move,
            status,
            winning_line,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning line once the game has been won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the mark of the player to move at `pos`.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game is finished,
    /// [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        self.apply(Move::new(self.to_move, pos))
    }

    /// Applies `mov`, checking that it is that player's turn.
    ///
    /// # Errors
    ///
    /// As [`Game::play`], plus [`MoveError::WrongPlayer`].
    #[instrument(skip(self))]
    pub fn apply(&mut self, mov: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if mov.player != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player));
        }
        if !self.board.is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }

        self.board.set(mov.position, Square::Occupied(mov.player));
        self.history.push(mov);
        self.update_status();

        if !self.status.is_over() {
            self.to_move = self.to_move.opponent();
        }

        debug!(%mov, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Lets the AI choose and play a move for the player to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the game is finished.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_ai(&mut self) -> Result<(Position, GameStatus), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let mut scratch = self.board.clone();
        let pos = best_move(&mut scratch, self.to_move).ok_or(MoveError::GameOver)?;
        let status = self.play(pos)?;
        Ok((pos, status))
    }

    /// Starts over on an empty board with the original first player.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new(self.first_player);
    }

    fn update_status(&mut self) {
        self.winning_line = check_winner(&self.board);
        self.status = GameStatus::of(&self.board);
        if self.status.is_over() {
            info!(status = ?self.status, moves = self.history.len(), "Game finished");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
