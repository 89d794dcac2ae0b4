//! # Game State
//!
//! Couples a [`Board`] with the player whose turn it is. One call to
//! [`GameState::make_move`] applies exactly one validated move (a direct
//! interior placement or an edge push), toggles the turn, and nothing else;
//! the game is over once the board's interior is full.

use crate::board::{Board, CellKind, Move, Player};
use std::fmt;

/// The complete state of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Creates a game from a loaded board and starting player.
    pub fn new(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
        }
    }

    /// The underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true if the given move is legal for the player to move.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.board.is_legal(mv)
    }

    /// Applies a legal move for the current player and toggles the turn.
    ///
    /// Interior placements occupy the chosen cell directly; edge placements
    /// trigger a push. The move must already have been validated.
    pub fn make_move(&mut self, mv: &Move) {
        debug_assert!(self.is_legal(mv));
        let (row, col) = (mv.0 as usize, mv.1 as usize);
        match self.board.classify(row, col) {
            CellKind::Interior => self.board.place(row, col, self.current_player),
            CellKind::Edge => self.board.push(row, col, self.current_player),
            CellKind::Corner => unreachable!("corner placements are never legal"),
        }
        self.current_player = self.current_player.opponent();
    }

    /// Returns true once every interior cell is occupied.
    pub fn is_over(&self) -> bool {
        self.board.is_full_interior()
    }

    /// The player(s) owning the highest total score.
    ///
    /// A strict leader wins alone; on equal scores both players are winners.
    pub fn winners(&self) -> Vec<Player> {
        let o_score = self.board.score_of(Player::O);
        let x_score = self.board.score_of(Player::X);
        if o_score > x_score {
            vec![Player::O]
        } else if x_score > o_score {
            vec![Player::X]
        } else {
            vec![Player::O, Player::X]
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
