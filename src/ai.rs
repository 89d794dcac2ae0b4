//! # Automated Players
//!
//! Two deterministic strategies. Both are pure: they read the live game for
//! legality queries and evaluate hypothetical pushes on disposable board
//! copies, never mutating the authoritative state.
//!
//! - [`scanner_move`]: picks the first legal cell in a fixed per-player scan
//!   order over the interior (O from the top-left, X from the bottom-right).
//! - [`heuristic_move`]: prefers the first edge push that strictly lowers the
//!   opponent's score, falling back to the highest-scoring legal cell.
//!
//! Callers must only invoke a strategy while the game is still in progress;
//! on a finished board there is no move to find and the scanners panic.

use crate::board::{Move, Player};
use crate::game::GameState;

/// Position-seeking strategy: the first legal cell in a fixed scan order.
///
/// O scans row 1 of the interior left to right starting at `(1, 1)`, wrapping
/// to the next row down; X mirrors it, starting at `(rows-2, cols-2)` and
/// scanning right to left, wrapping upward.
pub fn scanner_move(game: &GameState) -> Move {
    let board = game.board();
    let rows = board.rows() as i32;
    let cols = board.cols() as i32;

    match game.current_player() {
        Player::O => {
            let (mut row, mut col) = (1, 1);
            while row < rows {
                let mv = Move(row, col);
                if game.is_legal(&mv) {
                    return mv;
                }
                if col == cols - 2 {
                    col = 1;
                    row += 1;
                } else {
                    col += 1;
                }
            }
        }
        Player::X => {
            let (mut row, mut col) = (rows - 2, cols - 2);
            while row > 0 {
                let mv = Move(row, col);
                if game.is_legal(&mv) {
                    return mv;
                }
                if col == 1 {
                    col = cols - 2;
                    row -= 1;
                } else {
                    col -= 1;
                }
            }
        }
    }
    panic!("scanner found no legal move on a board that is not full");
}

/// Score-aware strategy.
///
/// Tries the edges in strict priority order (top left-to-right, right
/// top-to-bottom, bottom right-to-left, left bottom-to-top) and plays the
/// first legal push that strictly lowers the opponent's score. If none
/// exists, scans all cells row-major and plays the legal cell with the
/// greatest score, ties keeping the earlier candidate.
///
/// The fallback's baseline score and initial candidate are taken from cell
/// `(0, 0)` before any legality check. On a board where no legal cell scores
/// higher than that corner, the corner itself is returned and the engine
/// rejects it as an internal error; kept intact for compatibility with the
/// historical behavior.
pub fn heuristic_move(game: &GameState) -> Move {
    let board = game.board();
    let me = game.current_player();
    let rows = board.rows();
    let cols = board.cols();

    let top = (1..cols - 1).map(|c| (0, c));
    let right = (1..rows - 1).map(|r| (r, cols - 1));
    let bottom = (1..cols - 1).rev().map(|c| (rows - 1, c));
    let left = (1..rows - 1).rev().map(|r| (r, 0));
    for (row, col) in top.chain(right).chain(bottom).chain(left) {
        let mv = Move(row as i32, col as i32);
        if game.is_legal(&mv) && board.push_lowers_score(row, col, me) {
            return mv;
        }
    }

    let mut best = Move(0, 0);
    let mut best_score = board.score(0, 0);
    for row in 0..rows {
        for col in 0..cols {
            let mv = Move(row as i32, col as i32);
            if board.score(row, col) > best_score && game.is_legal(&mv) {
                best_score = board.score(row, col);
                best = mv;
            }
        }
    }
    best
}
