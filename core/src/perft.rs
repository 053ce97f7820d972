use crate::game_state::GameState;
use crate::types::Position;

/// Perft results broken down by kind of ply.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftResults {
    pub nodes: u64,
    pub passes: u64,
    pub game_ends: u64,
}

impl PerftResults {
    /// Combines results from child nodes.
    pub fn add(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.passes += other.passes;
        self.game_ends += other.game_ends;
    }
}

/// Successors of a position: one per legal move, or a single pass when the
/// mover is blocked but the game goes on. Finished positions have none.
fn successors(state: &GameState) -> Vec<(Position, GameState)> {
    if state.is_finished() {
        return Vec::new();
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        let mut passed = state.clone();
        passed.change_player();
        return vec![(Position::NONE, passed)];
    }

    moves
        .into_iter()
        .filter_map(|mv| {
            let mut next = state.clone();
            next.insert_token(mv).ok().map(|()| (mv, next))
        })
        .collect()
}

/// Counts move paths of the given length. A finished position counts as a leaf.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 || state.is_finished() {
        return 1;
    }

    successors(state)
        .iter()
        .map(|(_, next)| perft(next, depth - 1))
        .sum()
}

/// Performs perft with a per-move breakdown.
pub fn perft_divide(state: &GameState, depth: u8) -> Vec<(Position, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    successors(state)
        .into_iter()
        .map(|(mv, next)| (mv, perft(&next, depth - 1)))
        .collect()
}

/// Performs perft counting passes and game ends along the way.
pub fn perft_detailed(state: &GameState, depth: u8) -> PerftResults {
    let mut results = PerftResults::default();

    if depth == 0 || state.is_finished() {
        results.nodes = 1;
        if state.is_finished() {
            results.game_ends = 1;
        }
        return results;
    }

    for (mv, next) in successors(state) {
        if mv.is_none() {
            results.passes += 1;
        }
        results.add(&perft_detailed(&next, depth - 1));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Cell, Player};

    #[test]
    fn test_perft_opening() {
        let state = GameState::new();
        assert_eq!(perft(&state, 1), 4);
        assert_eq!(perft(&state, 2), 12);
        assert_eq!(perft(&state, 3), 56);
        assert_eq!(perft(&state, 4), 244);
        assert_eq!(perft(&state, 5), 1396);
    }

    #[test]
    #[ignore = "slow in debug builds"]
    fn test_perft_opening_deep() {
        assert_eq!(perft(&GameState::new(), 6), 8200);
    }

    #[test]
    fn test_perft_divide_sums_to_perft() {
        let state = GameState::new();
        let divide = perft_divide(&state, 3);
        assert_eq!(divide.len(), 4);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), perft(&state, 3));
        // The opening is symmetric, so every first move has the same subtree.
        assert!(divide.iter().all(|&(_, n)| n == 14));
    }

    #[test]
    fn test_perft_counts_pass() {
        let mut board = Board::empty(4).unwrap();
        board.set(Position::new(0, 0), Cell::White);
        board.set(Position::new(0, 1), Cell::Black);
        let state = GameState::from_board(board, Player::Black);

        let results = perft_detailed(&state, 2);
        assert_eq!(results.passes, 1);
        // Black passes, White takes c1 and Black has no tokens left.
        assert_eq!(results.nodes, 1);
        assert_eq!(perft_divide(&state, 1), vec![(Position::NONE, 1)]);
    }

    #[test]
    fn test_perft_finished_position() {
        let board = Board::empty(4).unwrap();
        let state = GameState::from_board(board, Player::Black);
        assert_eq!(perft(&state, 3), 1);
        assert_eq!(perft_detailed(&state, 3).game_ends, 1);
    }
}
