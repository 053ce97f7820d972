use crate::Agent;
use othello_core::{GameState, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Baseline agent that plays a uniformly random legal move.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible agent for matches and tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            name: format!("Random(seed={seed})"),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn decide_move(&mut self, state: &mut GameState) -> Position {
        let moves = state.legal_moves();

        match moves.choose(&mut self.rng) {
            Some(&mv) => mv,
            None => {
                state.change_player();
                Position::NONE
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
