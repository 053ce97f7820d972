use crate::{
    search::{search, SearchConfig, SearchResult},
    Agent,
};
use othello_core::{GameState, Position};
use tracing::debug;

/// Fixed-depth alpha-beta agent.
pub struct AlphaBetaAgent {
    name: String,
    config: SearchConfig,
    last_result: Option<SearchResult<Position>>,
}

impl AlphaBetaAgent {
    /// Depth zero would evaluate the root without choosing a move, so the
    /// depth is raised to at least one ply.
    pub fn new(depth: u8) -> Self {
        Self::with_config(SearchConfig::depth(depth))
    }

    pub fn with_config(config: SearchConfig) -> Self {
        let config = config.with_depth(config.max_depth.max(1));
        AlphaBetaAgent {
            name: format!("AlphaBeta(depth={})", config.max_depth),
            config,
            last_result: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search, for reporting only.
    pub fn last_result(&self) -> Option<&SearchResult<Position>> {
        self.last_result.as_ref()
    }
}

impl Default for AlphaBetaAgent {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl Agent for AlphaBetaAgent {
    fn decide_move(&mut self, state: &mut GameState) -> Position {
        let player = state.player_in_turn();
        let moves = state.legal_moves();

        let Some(&first) = moves.first() else {
            debug!(?player, "no legal move, passing");
            state.change_player();
            self.last_result = None;
            return Position::NONE;
        };

        let result = search(&*state, &self.config);
        // The root has a move to expand, so a best move is always recorded.
        let chosen = result.best_move.unwrap_or(first);
        debug!(?player, %chosen, score = result.score, nodes = result.nodes, "move decided");

        self.last_result = Some(result);
        chosen
    }

    fn name(&self) -> &str {
        &self.name
    }
}
