//! # Game Rules
//!
//! Move legality, the push algorithm and score computation, implemented as
//! rule queries and mutations on [`Board`].
//!
//! ## Legality
//! A coordinate is playable iff it is on the board, not a corner, empty, and
//! (for an edge cell) the push it would trigger is legal. A push is legal iff
//! the cell adjacent to the edge holds a stone and an empty cell exists
//! somewhere further along the line.
//!
//! ## Pushing
//! A legal push shifts the contiguous run of stones nearest the edge one step
//! toward the far boundary and drops the pushing player's stone on the cell
//! adjacent to the edge. The edge cell itself never holds a stone. All four
//! directions run through the same line-based algorithm; the direction vector
//! comes from [`Board::line_from_edge`].

use crate::board::{Board, CellKind, Move, Player};

impl Board {
    /// Returns true if the given move is a legal placement on this board.
    ///
    /// Never mutates; safe to call speculatively, including on disposable
    /// copies used for what-if evaluation.
    pub fn is_legal(&self, mv: &Move) -> bool {
        if !self.contains(mv) {
            return false;
        }
        let (row, col) = (mv.0 as usize, mv.1 as usize);
        match self.classify(row, col) {
            CellKind::Corner => false,
            CellKind::Interior => self.occupant(row, col).is_none(),
            CellKind::Edge => {
                self.occupant(row, col).is_none() && self.push_is_legal(row, col)
            }
        }
    }

    /// Push-legality lookahead for an edge cell.
    ///
    /// The cell adjacent to the edge must hold a stone (pushing into an
    /// immediately empty slot is not a push) and at least one empty cell must
    /// exist further along the line, the far boundary cell included.
    fn push_is_legal(&self, row: usize, col: usize) -> bool {
        let line = self.line_from_edge(row, col);
        let (near_row, near_col) = line[0];
        if self.occupant(near_row, near_col).is_none() {
            return false;
        }
        line[1..].iter().any(|&(r, c)| self.occupant(r, c).is_none())
    }

    /// Places a stone directly on an empty interior cell.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert_eq!(self.classify(row, col), CellKind::Interior);
        debug_assert!(self.occupant(row, col).is_none());
        self.set_occupant(row, col, Some(player));
    }

    /// Executes a push entered at the given edge cell.
    ///
    /// The run of stones nearest the edge advances one cell toward the far
    /// boundary; the vacated cell adjacent to the edge receives the pushing
    /// player's stone. Cell scores never move, only occupants do.
    ///
    /// Defined only for a legal push; the validator must be consulted first.
    pub fn push(&mut self, row: usize, col: usize, player: Player) {
        let line = self.line_from_edge(row, col);
        let gap = line
            .iter()
            .position(|&(r, c)| self.occupant(r, c).is_none())
            .expect("push entered a line with no empty cell");
        // Shift the run ending at the gap one step away from the edge.
        for i in (1..=gap).rev() {
            let (from_row, from_col) = line[i - 1];
            let stone = self.occupant(from_row, from_col);
            let (to_row, to_col) = line[i];
            self.set_occupant(to_row, to_col, stone);
        }
        let (near_row, near_col) = line[0];
        self.set_occupant(near_row, near_col, Some(player));
    }

    /// Sum of scores over all cells owned by the given player.
    ///
    /// Every cell counts, boundary cells included: a stone pushed onto the
    /// far edge cell still scores for its owner.
    pub fn score_of(&self, player: Player) -> u32 {
        let mut total = 0u32;
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.occupant(row, col) == Some(player) {
                    total += u32::from(self.score(row, col));
                }
            }
        }
        total
    }

    /// Returns true if pushing at the given edge cell would strictly lower
    /// the opponent's score.
    ///
    /// Evaluated on a disposable copy; the real board is untouched.
    pub fn push_lowers_score(&self, row: usize, col: usize, mover: Player) -> bool {
        let opponent = mover.opponent();
        let before = self.score_of(opponent);
        let mut probe = self.clone();
        probe.push(row, col, mover);
        probe.score_of(opponent) < before
    }
}
