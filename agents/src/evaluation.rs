use othello_core::{Cell, GameState, Player};

/// Weights of the three heuristic terms.
/// The defaults rank corners over mobility over token parity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EvaluationWeights {
    pub corner: i32,
    pub mobility: i32,
    pub parity: i32,
}

impl EvaluationWeights {
    pub const fn new(corner: i32, mobility: i32, parity: i32) -> Self {
        Self {
            corner,
            mobility,
            parity,
        }
    }
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self::new(1000, 100, 1)
    }
}

/// Scoring used by the search at cutoff and terminal nodes.
pub trait Evaluatable {
    /// Weighted frontier estimate from `root`'s perspective.
    fn heuristic(&self, root: Player, weights: &EvaluationWeights) -> i32;

    /// Exact value of a finished game from `root`'s perspective.
    fn utility(&self, root: Player) -> i32;
}

impl Evaluatable for GameState {
    fn heuristic(&self, root: Player, weights: &EvaluationWeights) -> i32 {
        heuristic(self, root, weights)
    }

    fn utility(&self, root: Player) -> i32 {
        utility(self, root)
    }
}

/// Corner control: +1 per corner held by `root`, -1 per corner held by the opponent.
pub fn corners(state: &GameState, root: Player) -> i32 {
    let board = state.board();
    board
        .corners()
        .iter()
        .map(|&corner| match board.get(corner).and_then(Cell::owner) {
            Some(owner) if owner == root => 1,
            Some(_) => -1,
            None => 0,
        })
        .sum()
}

/// Move count of the player in turn, negated when that player is not `root`.
pub fn mobility(state: &GameState, root: Player) -> i32 {
    let moves = state.legal_moves().len() as i32;
    if state.player_in_turn() == root {
        moves
    } else {
        -moves
    }
}

/// `root`'s token count minus the opponent's.
pub fn token_parity(state: &GameState, root: Player) -> i32 {
    let tokens = state.count_tokens();
    tokens.of(root) as i32 - tokens.of(root.opponent()) as i32
}

/// Final score differential. Used instead of the heuristic once the game is over.
pub fn utility(state: &GameState, root: Player) -> i32 {
    token_parity(state, root)
}

/// Weighted sum of corner control, mobility and token parity.
pub fn heuristic(state: &GameState, root: Player, weights: &EvaluationWeights) -> i32 {
    weights.corner * corners(state, root)
        + weights.mobility * mobility(state, root)
        + weights.parity * token_parity(state, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::Position;

    fn after_d3() -> GameState {
        let mut state = GameState::new();
        state.insert_token(Position::new(2, 3)).unwrap();
        state
    }

    #[test]
    fn test_opening_heuristic() {
        let state = GameState::new();
        let weights = EvaluationWeights::default();

        // No corners, four moves for the mover, equal tokens.
        assert_eq!(heuristic(&state, Player::Black, &weights), 400);
        assert_eq!(heuristic(&state, Player::White, &weights), -400);
    }

    #[test]
    fn test_mobility_sign_follows_mover() {
        let state = after_d3();
        assert_eq!(state.player_in_turn(), Player::White);
        assert_eq!(mobility(&state, Player::White), 3);
        assert_eq!(mobility(&state, Player::Black), -3);
    }

    #[test]
    fn test_heuristic_composition() {
        let state = after_d3();
        let weights = EvaluationWeights::default();

        assert_eq!(token_parity(&state, Player::Black), 3);
        assert_eq!(heuristic(&state, Player::Black, &weights), -300 + 3);
        assert_eq!(heuristic(&state, Player::White, &weights), 300 - 3);

        let parity_only = EvaluationWeights::new(0, 0, 1);
        assert_eq!(heuristic(&state, Player::Black, &parity_only), 3);
    }

    #[test]
    fn test_corners() {
        let state = GameState::from_notation(
            "B..W
             .BW.
             .WB.
             B...
             B",
        )
        .unwrap();

        assert_eq!(corners(&state, Player::Black), 1);
        assert_eq!(corners(&state, Player::White), -1);
    }

    #[test]
    fn test_corners_bounded() {
        let all_black = GameState::from_notation("BWWB\nWWWW\nWWWW\nBWWB\nW").unwrap();
        assert_eq!(corners(&all_black, Player::Black), 4);
        assert_eq!(corners(&all_black, Player::White), -4);
        assert_eq!(corners(&GameState::new(), Player::Black), 0);
    }

    #[test]
    fn test_utility_sign_flips_between_players() {
        let state = GameState::from_notation("BBBB\nBBBB\nBWWW\nWWWW\nW").unwrap();
        assert!(state.is_finished());
        assert_eq!(utility(&state, Player::Black), 9 - 7);
        assert_eq!(utility(&state, Player::White), 7 - 9);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let state = after_d3();
        let weights = EvaluationWeights::default();
        assert_eq!(
            state.heuristic(Player::Black, &weights),
            state.heuristic(Player::Black, &weights)
        );
        assert_eq!(state.utility(Player::White), state.utility(Player::White));
    }
}
