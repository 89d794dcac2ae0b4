//! # Savefile Loading and Saving
//!
//! The persisted board format, produced and consumed bit-exactly:
//!
//! ```text
//! rows cols
//! P
//! <rows board lines, 2*cols characters each>
//! ```
//!
//! `P` is the current player (`O` or `X`). Each cell is two characters:
//! score then occupant. Corner cells are always `" ."`; every other cell is a
//! digit score followed by `.`, `O` or `X`. Structural validation happens
//! entirely here; the engine trusts a loaded game completely and only ever
//! applies game-rule legality on top of it.

use crate::board::{Board, Cell, Player};
use crate::game::GameState;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Reasons a board file cannot be turned into a playable game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("No file to load from")]
    Unreadable,
    /// The file's structure or characters are not a valid board.
    #[error("Invalid file contents")]
    InvalidContents,
    /// The board parsed, but its interior is already full.
    #[error("Full board in load")]
    FullBoard,
}

/// Loads and validates a game from a board file.
pub fn load_game(path: &Path) -> Result<GameState, LoadError> {
    let text = fs::read_to_string(path).map_err(|_| LoadError::Unreadable)?;
    parse_game(&text)
}

/// Parses and validates savefile text into a game.
pub fn parse_game(text: &str) -> Result<GameState, LoadError> {
    let mut lines = text.lines();

    let header = lines.next().ok_or(LoadError::InvalidContents)?;
    let mut parts = header.split_whitespace();
    let rows: usize = parts
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or(LoadError::InvalidContents)?;
    let cols: usize = parts
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or(LoadError::InvalidContents)?;
    if parts.next().is_some() || rows < 3 || cols < 3 {
        return Err(LoadError::InvalidContents);
    }

    let player_line = lines.next().ok_or(LoadError::InvalidContents)?;
    let mut player_chars = player_line.chars();
    let current_player = player_chars
        .next()
        .and_then(Player::from_char)
        .ok_or(LoadError::InvalidContents)?;
    if player_chars.next().is_some() {
        return Err(LoadError::InvalidContents);
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let line = lines.next().ok_or(LoadError::InvalidContents)?;
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != cols * 2 {
            return Err(LoadError::InvalidContents);
        }
        for col in 0..cols {
            let score_char = chars[2 * col];
            let stone_char = chars[2 * col + 1];
            let corner =
                (row == 0 || row == rows - 1) && (col == 0 || col == cols - 1);
            if corner {
                // Corners must be empty and unscored.
                if score_char != ' ' || stone_char != '.' {
                    return Err(LoadError::InvalidContents);
                }
                cells.push(Cell::empty(0));
            } else {
                let score = score_char
                    .to_digit(10)
                    .ok_or(LoadError::InvalidContents)? as u8;
                let occupant = match stone_char {
                    '.' => None,
                    other => Some(Player::from_char(other).ok_or(LoadError::InvalidContents)?),
                };
                cells.push(Cell { score, occupant });
            }
        }
    }
    if lines.next().is_some() {
        return Err(LoadError::InvalidContents);
    }

    let board = Board::new(rows, cols, cells);
    if board.is_full_interior() {
        return Err(LoadError::FullBoard);
    }
    Ok(GameState::new(board, current_player))
}

/// Renders a game in savefile form.
pub fn serialize_game(game: &GameState) -> String {
    format!(
        "{} {}\n{}\n{}",
        game.board().rows(),
        game.board().cols(),
        game.current_player(),
        game.board()
    )
}

/// Writes a game to the given file in savefile form.
pub fn save_game(path: &Path, game: &GameState) -> std::io::Result<()> {
    fs::write(path, serialize_game(game))
}
