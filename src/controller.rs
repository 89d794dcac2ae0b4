//! # Game Controller
//!
//! The controller owns the authoritative [`GameState`]. Every move goes
//! through it: candidates are validated before application, automated moves
//! are dispatched to the configured strategy, and the game status is
//! re-evaluated exactly once after each applied move. Input collection and
//! rendering live outside; the controller never touches stdin or stdout.

use crate::ai::{heuristic_move, scanner_move};
use crate::board::{Move, Player};
use crate::game::GameState;
use std::fmt;
use std::str::FromStr;

/// How a player's moves are produced. Fixed for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    /// Automated player scanning for the first legal cell.
    Scanner,
    /// Automated player preferring score-reducing pushes.
    Heuristic,
    /// Moves are typed in by a person.
    Human,
}

impl FromStr for PlayerType {
    type Err = String;

    /// Parses the command-line player-type letter: `0`, `1` or `H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(PlayerType::Scanner),
            "1" => Ok(PlayerType::Heuristic),
            "H" => Ok(PlayerType::Human),
            other => Err(format!("unknown player type {:?}", other)),
        }
    }
}

/// Current game status, updated after every applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// The interior still has room; play continues.
    InProgress,
    /// The interior is full and one player holds the higher score.
    Win(Player),
    /// The interior is full with equal scores; both players win.
    Tie,
}

impl GameStatus {
    /// Check if the game is over.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a candidate move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveValidationError {
    /// The coordinate is not a legal placement on the current board.
    IllegalMove,
    /// The game is already in a terminal state.
    GameAlreadyOver,
}

impl fmt::Display for MoveValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveValidationError::IllegalMove => write!(f, "Illegal move"),
            MoveValidationError::GameAlreadyOver => write!(f, "Game is already over"),
        }
    }
}

/// The result of a successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The player who moved.
    pub player: Player,
    /// The coordinate that was played.
    pub mv: Move,
    /// Whether the move ended the game.
    pub game_over: bool,
}

/// Owns the authoritative game state and drives turn sequencing.
#[derive(Debug, Clone)]
pub struct GameController {
    game: GameState,
    o_type: PlayerType,
    x_type: PlayerType,
    status: GameStatus,
}

impl GameController {
    /// Creates a controller for a freshly loaded game.
    ///
    /// The loader guarantees the board is not already full, so play always
    /// starts in progress.
    pub fn new(game: GameState, o_type: PlayerType, x_type: PlayerType) -> Self {
        GameController {
            game,
            o_type,
            x_type,
            status: GameStatus::InProgress,
        }
    }

    /// The authoritative game state, for rendering and queries.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.game.current_player()
    }

    /// The configured agent type for the given player.
    pub fn player_type(&self, player: Player) -> PlayerType {
        match player {
            Player::O => self.o_type,
            Player::X => self.x_type,
        }
    }

    /// The agent type for the player whose turn it is.
    pub fn active_player_type(&self) -> PlayerType {
        self.player_type(self.current_player())
    }

    /// Current game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Check if the game is over.
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// The winner(s) once the game is over.
    pub fn winners(&self) -> Vec<Player> {
        match &self.status {
            GameStatus::InProgress => Vec::new(),
            GameStatus::Win(player) => vec![*player],
            GameStatus::Tie => vec![Player::O, Player::X],
        }
    }

    /// Validates a candidate move without applying it.
    pub fn validate_move(&self, mv: &Move) -> Result<(), MoveValidationError> {
        if self.status.is_game_over() {
            return Err(MoveValidationError::GameAlreadyOver);
        }
        if !self.game.is_legal(mv) {
            return Err(MoveValidationError::IllegalMove);
        }
        Ok(())
    }

    /// Validates and applies a move for the current player.
    ///
    /// On success the turn has toggled and the game status has been
    /// re-evaluated; game-over is checked once per applied move, never
    /// mid-move.
    pub fn try_make_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveValidationError> {
        self.validate_move(&mv)?;
        let player = self.game.current_player();
        self.game.make_move(&mv);
        if self.game.is_over() {
            self.status = match self.game.winners().as_slice() {
                [single] => GameStatus::Win(*single),
                _ => GameStatus::Tie,
            };
        }
        Ok(MoveOutcome {
            player,
            mv,
            game_over: self.status.is_game_over(),
        })
    }

    /// Runs one automated turn for the active player.
    ///
    /// # Panics
    /// If called for a human player, or if the strategy proposes an illegal
    /// coordinate. A strategy that breaks legality is a programming error,
    /// not a recoverable game condition.
    pub fn auto_move(&mut self) -> MoveOutcome {
        let mv = match self.active_player_type() {
            PlayerType::Scanner => scanner_move(&self.game),
            PlayerType::Heuristic => heuristic_move(&self.game),
            PlayerType::Human => panic!("auto_move called for a human player"),
        };
        self.try_make_move(mv)
            .expect("automated strategy proposed an illegal move")
    }
}
