//! Candidate generation and threat-based move ordering.
//!
//! Candidates are the empty cells near existing stones. Each candidate is
//! scored by what it would create for the mover (offense) and what it would
//! deny the opponent (defense), then stably sorted so equal scores keep
//! row-major order. Search truncates the ranked list to its breadth limit.

use crate::board::{Board, Pos, Stone};
use crate::eval::{PlacementProfile, ThreatWeights};
use crate::rules::WIN_LENGTH;

/// Empty cells within `radius` (square) of any stone, in row-major order.
///
/// An empty board yields only the center. If no empty cell is near a stone
/// every empty cell is returned, so the list is empty only on a full board.
pub fn candidate_moves(board: &Board, radius: u8) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let near: Vec<Pos> = board
        .empty_cells()
        .filter(|&pos| board.has_any_neighbor_within(radius, pos))
        .collect();
    if near.is_empty() {
        return board.empty_cells().collect();
    }
    near
}

/// Tactical value of `side` playing at `pos`.
///
/// Offensive terms come from a scan as `side`; defensive terms from a scan
/// as the opponent on the same cell, since occupying it denies that pattern.
pub fn threat_score(board: &Board, pos: Pos, side: Stone, weights: &ThreatWeights) -> i64 {
    let attack = PlacementProfile::scan(board, pos, side);
    let defend = PlacementProfile::scan(board, pos, side.opponent());

    let mut score = 0;
    let mut add = |hit: bool, weight: i64| {
        if hit {
            score += weight;
        }
    };

    add(attack.has_run(WIN_LENGTH, false), weights.five);
    add(defend.has_run(WIN_LENGTH, false), weights.block_five);
    add(attack.has_run(4, true), weights.open_four);
    add(defend.has_run(4, true), weights.block_open_four);
    add(attack.open_run_axes(3) >= 2, weights.double_open_three);
    add(defend.open_run_axes(3) >= 2, weights.block_double_open_three);
    add(attack.has_run(3, true), weights.open_three);
    add(defend.has_run(3, true), weights.block_open_three);
    add(attack.has_jump(3), weights.jump_three);
    add(defend.has_jump(3), weights.block_jump_three);
    add(attack.has_run(2, true), weights.open_two);
    add(defend.has_run(2, true), weights.block_open_two);

    score
}

/// Sort `moves` by descending threat score for `side`. Ties keep input order.
pub fn rank_by_threat(board: &Board, moves: Vec<Pos>, side: Stone, weights: &ThreatWeights) -> Vec<Pos> {
    let mut scored: Vec<(Pos, i64)> = moves
        .into_iter()
        .map(|pos| (pos, threat_score(board, pos, side, weights)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(pos, _)| pos).collect()
}

/// Generate, rank and truncate in one step.
pub fn ordered_moves(
    board: &Board,
    side: Stone,
    radius: u8,
    breadth: usize,
    weights: &ThreatWeights,
) -> Vec<Pos> {
    let mut ranked = rank_by_threat(board, candidate_moves(board, radius), side, weights);
    ranked.truncate(breadth);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn test_empty_board_gives_center() {
        let board = Board::new();
        assert_eq!(candidate_moves(&board, 2), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_candidates_within_radius() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let moves = candidate_moves(&board, 2);
        assert_eq!(moves.len(), 24); // 5x5 square minus the stone
        assert!(!moves.contains(&Pos::new(7, 7)));
        assert!(moves.contains(&Pos::new(5, 5)));
        assert!(!moves.contains(&Pos::new(4, 7)));

        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted, "candidates must be row-major");
    }

    #[test]
    fn test_candidates_clipped_at_corner() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        assert_eq!(candidate_moves(&board, 2).len(), 8);
        assert_eq!(candidate_moves(&board, 1).len(), 3);
    }

    #[test]
    fn test_no_nearby_cell_falls_back_to_all_empty() {
        let mut board = Board::new();
        for r in 0..BOARD_SIZE as u8 {
            for c in 0..5 {
                let stone = if (r + c) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place_stone(Pos::new(r, c), stone);
            }
        }
        // Radius 0 means no cell counts as near
        let moves = candidate_moves(&board, 0);
        assert_eq!(moves.len(), BOARD_SIZE * BOARD_SIZE - BOARD_SIZE * 5);
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let mut board = Board::new();
        for r in 0..BOARD_SIZE as u8 {
            for c in 0..BOARD_SIZE as u8 {
                board.place_stone(Pos::new(r, c), Stone::Black);
            }
        }
        assert!(candidate_moves(&board, 2).is_empty());
    }

    #[test]
    fn test_win_ranks_first() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        for c in 3..6 {
            board.place_stone(Pos::new(9, c), Stone::White);
        }

        let weights = ThreatWeights::default();
        let ranked = rank_by_threat(&board, candidate_moves(&board, 2), Stone::Black, &weights);
        // Both ends complete five; only (7,7) also reads as an open four
        assert_eq!(ranked[0], Pos::new(7, 7));
        assert_eq!(ranked[1], Pos::new(7, 2));
    }

    #[test]
    fn test_block_outranks_own_three() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(2, c), Stone::White);
        }
        board.place_stone(Pos::new(2, 2), Stone::Black);
        board.place_stone(Pos::new(10, 7), Stone::Black);
        board.place_stone(Pos::new(10, 8), Stone::Black);

        let weights = ThreatWeights::default();
        let ranked = rank_by_threat(&board, candidate_moves(&board, 2), Stone::Black, &weights);
        assert_eq!(ranked[0], Pos::new(2, 7));
    }

    #[test]
    fn test_threat_score_components() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 6), Stone::Black);
        let weights = ThreatWeights::default();

        // Open two for Black, and White extending nothing
        let score = threat_score(&board, Pos::new(7, 7), Stone::Black, &weights);
        assert_eq!(score, weights.open_two);

        // White at the same cell only blocks the pair
        let score = threat_score(&board, Pos::new(7, 7), Stone::White, &weights);
        assert_eq!(score, weights.block_open_two);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let board = {
            let mut b = Board::new();
            b.place_stone(Pos::new(7, 7), Stone::Black);
            b
        };
        let weights = ThreatWeights::default();
        let far = vec![Pos::new(0, 0), Pos::new(0, 14), Pos::new(14, 0)];
        let ranked = rank_by_threat(&board, far.clone(), Stone::White, &weights);
        assert_eq!(ranked, far);
    }

    #[test]
    fn test_ordered_moves_truncates() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let weights = ThreatWeights::default();
        assert_eq!(ordered_moves(&board, Stone::White, 2, 10, &weights).len(), 10);
        assert_eq!(ordered_moves(&board, Stone::White, 2, 100, &weights).len(), 24);
    }
}
