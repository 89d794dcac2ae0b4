//! # Push-Stone Game Engine
//!
//! A two-player, turn-based board game on a rectangular grid of scored
//! cells. Players alternate placing stones: an empty interior cell is
//! occupied directly, while a boundary (non-corner) cell triggers a *push*
//! that shoves the run of stones behind it one step deeper into the board.
//! Once every interior cell is occupied the game ends and the player owning
//! the higher total of cell scores wins; equal totals make both players
//! winners.
//!
//! Engine layout:
//! - [`board`] — the grid, cell classification and push lines
//! - [`rules`] — move legality, the push algorithm and scoring
//! - [`game`] — turn application and winner determination
//! - [`ai`] — the two automated strategies
//! - [`controller`] — validated turn sequencing over the authoritative state
//! - [`savefile`] — the persisted board text format
//!
//! The `play` binary wires the engine to the terminal: command-line player
//! configuration, interactive move entry and board display.

pub mod ai;
pub mod board;
pub mod controller;
pub mod game;
pub mod rules;
pub mod savefile;

pub use board::{Board, Cell, CellKind, Move, Player};
pub use controller::{
    GameController, GameStatus, MoveOutcome, MoveValidationError, PlayerType,
};
pub use game::GameState;
pub use savefile::LoadError;
