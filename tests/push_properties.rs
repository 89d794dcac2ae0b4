//! Randomized invariants for move legality and the push algorithm.

use proptest::prelude::*;
use pushgame::{Board, Cell, CellKind, GameState, Move, Player};

/// Arbitrary board: 3-6 rows and columns, random scores and occupants,
/// corners empty as the loader guarantees.
fn arb_board() -> impl Strategy<Value = Board> {
    (3usize..7, 3usize..7).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec((0u8..10, 0u8..3), rows * cols).prop_map(move |raw| {
            let cells = raw
                .iter()
                .enumerate()
                .map(|(i, &(score, occupant))| {
                    let (row, col) = (i / cols, i % cols);
                    let corner =
                        (row == 0 || row == rows - 1) && (col == 0 || col == cols - 1);
                    if corner {
                        Cell::empty(0)
                    } else {
                        Cell {
                            score,
                            occupant: match occupant {
                                0 => None,
                                1 => Some(Player::O),
                                _ => Some(Player::X),
                            },
                        }
                    }
                })
                .collect();
            Board::new(rows, cols, cells)
        })
    })
}

fn all_moves(board: &Board) -> Vec<Move> {
    (0..board.rows() as i32)
        .flat_map(|r| (0..board.cols() as i32).map(move |c| Move(r, c)))
        .collect()
}

fn stones_of(board: &Board, player: Player) -> usize {
    (0..board.rows())
        .flat_map(|r| (0..board.cols()).map(move |c| (r, c)))
        .filter(|&(r, c)| board.occupant(r, c) == Some(player))
        .count()
}

proptest! {
    #[test]
    fn legality_is_stable_without_mutation(board in arb_board()) {
        for mv in all_moves(&board) {
            prop_assert_eq!(board.is_legal(&mv), board.is_legal(&mv));
        }
        prop_assert!(!board.is_legal(&Move(-1, 0)));
        prop_assert!(!board.is_legal(&Move(0, board.cols() as i32)));
    }

    #[test]
    fn legal_moves_add_one_stone_and_keep_scores(board in arb_board()) {
        let game = GameState::new(board, Player::O);
        for mv in all_moves(game.board()) {
            if !game.is_legal(&mv) {
                continue;
            }
            let mut next = game.clone();
            next.make_move(&mv);
            let before = game.board();
            let after = next.board();

            // Exactly one stone appears, for the mover only.
            prop_assert_eq!(after.stone_count(), before.stone_count() + 1);
            prop_assert_eq!(
                stones_of(after, Player::O),
                stones_of(before, Player::O) + 1
            );
            prop_assert_eq!(stones_of(after, Player::X), stones_of(before, Player::X));

            // Scores are attached to cells and never move.
            for r in 0..before.rows() {
                for c in 0..before.cols() {
                    prop_assert_eq!(before.score(r, c), after.score(r, c));
                }
            }
        }
    }

    #[test]
    fn corners_and_entry_edges_stay_empty(board in arb_board()) {
        let game = GameState::new(board, Player::X);
        for mv in all_moves(game.board()) {
            if !game.is_legal(&mv) {
                continue;
            }
            let mut next = game.clone();
            next.make_move(&mv);
            let after = next.board();

            let (rows, cols) = (after.rows(), after.cols());
            for &(r, c) in &[(0, 0), (0, cols - 1), (rows - 1, 0), (rows - 1, cols - 1)] {
                prop_assert_eq!(after.occupant(r, c), None);
            }
            // The edge cell a push was entered at never holds the stone.
            let (r, c) = (mv.0 as usize, mv.1 as usize);
            if after.classify(r, c) == CellKind::Edge {
                prop_assert_eq!(after.occupant(r, c), None);
            }
        }
    }

    #[test]
    fn combined_scores_never_exceed_cell_total(board in arb_board()) {
        let total: u32 = (0..board.rows())
            .flat_map(|r| (0..board.cols()).map(move |c| (r, c)))
            .map(|(r, c)| board.score(r, c) as u32)
            .sum();
        prop_assert!(board.score_of(Player::O) + board.score_of(Player::X) <= total);

        let game = GameState::new(board, Player::O);
        for mv in all_moves(game.board()) {
            if !game.is_legal(&mv) {
                continue;
            }
            let mut next = game.clone();
            next.make_move(&mv);
            let after = next.board();
            prop_assert!(after.score_of(Player::O) + after.score_of(Player::X) <= total);
        }
    }

    #[test]
    fn push_legality_matches_line_definition(board in arb_board()) {
        // For an empty edge cell, legality is exactly: adjacent cell
        // occupied and an empty cell somewhere further along the line.
        for mv in all_moves(&board) {
            let (r, c) = (mv.0 as usize, mv.1 as usize);
            if board.classify(r, c) != CellKind::Edge || board.occupant(r, c).is_some() {
                continue;
            }
            let line = board.line_from_edge(r, c);
            let expected = board.occupant(line[0].0, line[0].1).is_some()
                && line[1..].iter().any(|&(lr, lc)| board.occupant(lr, lc).is_none());
            prop_assert_eq!(board.is_legal(&mv), expected);
        }
    }
}
