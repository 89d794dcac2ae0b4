//! # Board Model
//!
//! The board is a rectangular grid of scored cells. Each cell carries a fixed
//! score (0-9) and an occupant: empty, or a stone belonging to player O or X.
//! Coordinates are classified structurally as corner, edge or interior:
//!
//! - *Corner* cells are never playable and stay empty for the whole game.
//! - *Edge* cells (boundary, non-corner) are entry points for pushes.
//! - *Interior* cells are occupied directly and never change again.
//!
//! A placement on an edge cell shoves the run of stones on the straight line
//! behind it one step deeper into the board; [`Board::line_from_edge`] exposes
//! that line for the rules engine. The four push directions share one
//! direction-vector implementation.

use std::fmt;
use std::str::FromStr;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    O,
    X,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// The character used for this player in board text and prompts.
    pub fn as_char(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }

    /// Parses a player character as it appears in a savefile.
    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'O' => Some(Player::O),
            'X' => Some(Player::X),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single board cell: an immutable score plus a mutable occupant.
///
/// Scores never move; pushes only move occupants between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Cell score, 0-9.
    pub score: u8,
    /// Stone on this cell, if any.
    pub occupant: Option<Player>,
}

impl Cell {
    /// Creates an empty cell with the given score.
    pub fn empty(score: u8) -> Self {
        Cell {
            score,
            occupant: None,
        }
    }
}

/// Structural classification of a board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// One of the four boundary intersections; always empty, never playable.
    Corner,
    /// Boundary cell that is not a corner; a push entry point.
    Edge,
    /// Non-boundary cell; occupied directly by a placement.
    Interior,
}

/// A candidate placement at `(row, column)`.
///
/// Components are signed so that raw human input can be carried to the
/// validator unchanged; out-of-bounds values are simply illegal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move(pub i32, pub i32);

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl FromStr for Move {
    type Err = String;

    /// Parses a move from a line of the form `"row col"`.
    ///
    /// The first two whitespace-separated tokens must be integers; anything
    /// after them is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let row = parts
            .next()
            .ok_or("missing row")?
            .parse::<i32>()
            .map_err(|e| e.to_string())?;
        let col = parts
            .next()
            .ok_or("missing column")?
            .parse::<i32>()
            .map_err(|e| e.to_string())?;
        Ok(Move(row, col))
    }
}

/// A rectangular grid of cells with `(row, col)` addressed accessors.
///
/// Storage is a single contiguous buffer indexed by `row * cols + col`.
/// Both dimensions are at least 3, the smallest board with an interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Creates a board from row-major cell data.
    ///
    /// The loader is responsible for structural validation; this only
    /// enforces the shape of the buffer.
    pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        assert!(rows >= 3 && cols >= 3, "board must be at least 3x3");
        assert_eq!(cells.len(), rows * cols, "cell buffer does not match dimensions");
        Board { cells, rows, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns the cell at the given coordinate.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Returns the occupant of the given cell.
    pub fn occupant(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[self.index(row, col)].occupant
    }

    /// Returns the score of the given cell.
    pub fn score(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)].score
    }

    /// Overwrites the occupant of the given cell. The score is untouched.
    pub fn set_occupant(&mut self, row: usize, col: usize, occupant: Option<Player>) {
        let idx = self.index(row, col);
        self.cells[idx].occupant = occupant;
    }

    /// Classifies a coordinate as corner, edge or interior.
    pub fn classify(&self, row: usize, col: usize) -> CellKind {
        let boundary_row = row == 0 || row == self.rows - 1;
        let boundary_col = col == 0 || col == self.cols - 1;
        match (boundary_row, boundary_col) {
            (true, true) => CellKind::Corner,
            (false, false) => CellKind::Interior,
            _ => CellKind::Edge,
        }
    }

    /// Returns true if the move's coordinate lies on the board.
    pub fn contains(&self, mv: &Move) -> bool {
        mv.0 >= 0 && mv.1 >= 0 && (mv.0 as usize) < self.rows && (mv.1 as usize) < self.cols
    }

    /// Returns true if every interior cell is occupied.
    ///
    /// This is the sole game-over condition; boundary cells do not count.
    pub fn is_full_interior(&self) -> bool {
        for row in 1..self.rows - 1 {
            for col in 1..self.cols - 1 {
                if self.occupant(row, col).is_none() {
                    return false;
                }
            }
        }
        true
    }

    /// Number of stones currently on the board, boundary cells included.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.occupant.is_some()).count()
    }

    /// Direction vector of a push entered at the given edge cell.
    ///
    /// Top row pushes downward, bottom row upward, left column rightward,
    /// right column leftward. An edge cell lies on exactly one boundary so
    /// the direction is always unambiguous.
    fn push_delta(&self, row: usize, col: usize) -> (isize, isize) {
        debug_assert_eq!(self.classify(row, col), CellKind::Edge);
        if row == 0 {
            (1, 0)
        } else if row == self.rows - 1 {
            (-1, 0)
        } else if col == 0 {
            (0, 1)
        } else {
            (0, -1)
        }
    }

    /// The ordered line of coordinates a push entered at `(row, col)` acts on.
    ///
    /// Starts at the cell adjacent to the edge cell and runs in push
    /// direction through the far boundary cell inclusive. The edge cell
    /// itself is excluded; it never holds a stone.
    pub fn line_from_edge(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let (dr, dc) = self.push_delta(row, col);
        let mut line = Vec::new();
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols {
            line.push((r as usize, c as usize));
            r += dr;
            c += dc;
        }
        line
    }
}

impl fmt::Display for Board {
    /// Renders the board in savefile form: one line per row, two characters
    /// per cell (score then occupant). Corner cells render as `" ."`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.classify(row, col) == CellKind::Corner {
                    write!(f, " .")?;
                } else {
                    let cell = self.cell(row, col);
                    let stone = match cell.occupant {
                        Some(player) => player.as_char(),
                        None => '.',
                    };
                    write!(f, "{}{}", cell.score, stone)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board(rows: usize, cols: usize) -> Board {
        Board::new(rows, cols, vec![Cell::empty(0); rows * cols])
    }

    #[test]
    fn test_classification() {
        let board = empty_board(5, 4);
        assert_eq!(board.classify(0, 0), CellKind::Corner);
        assert_eq!(board.classify(0, 3), CellKind::Corner);
        assert_eq!(board.classify(4, 0), CellKind::Corner);
        assert_eq!(board.classify(4, 3), CellKind::Corner);
        assert_eq!(board.classify(0, 1), CellKind::Edge);
        assert_eq!(board.classify(2, 0), CellKind::Edge);
        assert_eq!(board.classify(4, 2), CellKind::Edge);
        assert_eq!(board.classify(3, 3), CellKind::Edge);
        assert_eq!(board.classify(1, 1), CellKind::Interior);
        assert_eq!(board.classify(3, 2), CellKind::Interior);
    }

    #[test]
    fn test_smallest_board_has_single_interior_cell() {
        let board = empty_board(3, 3);
        let mut interior = Vec::new();
        for r in 0..3 {
            for c in 0..3 {
                if board.classify(r, c) == CellKind::Interior {
                    interior.push((r, c));
                }
            }
        }
        assert_eq!(interior, vec![(1, 1)]);
    }

    #[test]
    fn test_line_from_top_edge_runs_downward() {
        let board = empty_board(5, 5);
        assert_eq!(
            board.line_from_edge(0, 2),
            vec![(1, 2), (2, 2), (3, 2), (4, 2)]
        );
    }

    #[test]
    fn test_line_from_bottom_edge_runs_upward() {
        let board = empty_board(5, 5);
        assert_eq!(
            board.line_from_edge(4, 3),
            vec![(3, 3), (2, 3), (1, 3), (0, 3)]
        );
    }

    #[test]
    fn test_line_from_left_edge_runs_rightward() {
        let board = empty_board(4, 6);
        assert_eq!(
            board.line_from_edge(2, 0),
            vec![(2, 1), (2, 2), (2, 3), (2, 4), (2, 5)]
        );
    }

    #[test]
    fn test_line_from_right_edge_runs_leftward() {
        let board = empty_board(4, 6);
        assert_eq!(
            board.line_from_edge(1, 5),
            vec![(1, 4), (1, 3), (1, 2), (1, 1), (1, 0)]
        );
    }

    #[test]
    fn test_is_full_interior_ignores_boundary() {
        let mut board = empty_board(3, 3);
        assert!(!board.is_full_interior());
        // Occupying an edge cell does not finish the game.
        board.set_occupant(0, 1, Some(Player::O));
        assert!(!board.is_full_interior());
        board.set_occupant(1, 1, Some(Player::X));
        assert!(board.is_full_interior());
    }

    #[test]
    fn test_stone_count() {
        let mut board = empty_board(4, 4);
        assert_eq!(board.stone_count(), 0);
        board.set_occupant(1, 1, Some(Player::O));
        board.set_occupant(2, 2, Some(Player::X));
        assert_eq!(board.stone_count(), 2);
    }

    #[test]
    fn test_display_renders_savefile_rows() {
        let mut board = empty_board(3, 3);
        board.set_occupant(1, 1, Some(Player::X));
        assert_eq!(board.to_string(), " .0. .\n0.0X0.\n .0. .\n");
    }

    #[test]
    fn test_move_from_str() {
        assert_eq!("2 3".parse::<Move>().unwrap(), Move(2, 3));
        assert_eq!("  4   7 ".parse::<Move>().unwrap(), Move(4, 7));
        assert_eq!("-1 0".parse::<Move>().unwrap(), Move(-1, 0));
        assert_eq!("1 2 3".parse::<Move>().unwrap(), Move(1, 2));
        assert!("".parse::<Move>().is_err());
        assert!("5".parse::<Move>().is_err());
        assert!("a b".parse::<Move>().is_err());
    }

    #[test]
    fn test_player_opponent_and_chars() {
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::from_char('O'), Some(Player::O));
        assert_eq!(Player::from_char('X'), Some(Player::X));
        assert_eq!(Player::from_char('.'), None);
        assert_eq!(Player::O.to_string(), "O");
    }
}
