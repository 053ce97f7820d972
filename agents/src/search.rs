//! Depth-limited minimax with alpha-beta pruning.
//!
//! `max_node` and `min_node` recurse into each other one ply at a time. Both
//! stop at finished positions (exact utility) and at `max_depth` (heuristic).
//! Moves are tried in the order the state yields them, and a later move only
//! replaces the current best when it is strictly better, so ties go to the
//! earliest move.

use crate::evaluation::EvaluationWeights;
use crate::SearchState;
use othello_core::Player;
use tracing::{debug, trace};

pub const DEFAULT_MAX_DEPTH: u8 = 6;

const NEG_INFINITY: i32 = i32::MIN;
const POS_INFINITY: i32 = i32::MAX;

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub weights: EvaluationWeights,
}

impl SearchConfig {
    pub fn depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            weights: EvaluationWeights::default(),
        }
    }

    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_weights(mut self, weights: EvaluationWeights) -> Self {
        self.weights = weights;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::depth(DEFAULT_MAX_DEPTH)
    }
}

/// Value of a subtree and the move leading to it.
/// Cutoff and terminal nodes carry no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove<M> {
    pub score: i32,
    pub mv: Option<M>,
}

impl<M> ScoredMove<M> {
    pub const fn new(score: i32, mv: Option<M>) -> Self {
        Self { score, mv }
    }

    pub const fn leaf(score: i32) -> Self {
        Self { score, mv: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Per-call bookkeeping. Created fresh for every search.
struct SearchInfo<'a> {
    config: &'a SearchConfig,
    nodes: u64,
    cutoffs: u64,
}

impl<'a> SearchInfo<'a> {
    fn new(config: &'a SearchConfig) -> Self {
        Self {
            config,
            nodes: 0,
            cutoffs: 0,
        }
    }

    fn into_result<M>(self, scored: ScoredMove<M>) -> SearchResult<M> {
        SearchResult {
            best_move: scored.mv,
            score: scored.score,
            depth: self.config.max_depth,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }
}

/// Alpha-beta search from `state` for the player in turn.
pub fn search<S: SearchState>(state: &S, config: &SearchConfig) -> SearchResult<S::Move> {
    let root = state.player_in_turn();
    let mut info = SearchInfo::new(config);

    let scored = max_node(state, root, NEG_INFINITY, POS_INFINITY, 0, &mut info);
    let result = info.into_result(scored);

    debug!(
        ?root,
        depth = result.depth,
        score = result.score,
        nodes = result.nodes,
        cutoffs = result.cutoffs,
        best_move = ?result.best_move,
        "alpha-beta search complete"
    );

    result
}

/// Checks the cutoff tests shared by both node kinds.
fn cutoff_value<S: SearchState>(
    state: &S,
    root: Player,
    depth: u8,
    config: &SearchConfig,
) -> Option<i32> {
    if state.is_finished() {
        return Some(state.utility(root));
    }
    if depth == config.max_depth {
        return Some(state.heuristic(root, &config.weights));
    }
    None
}

fn max_node<S: SearchState>(
    state: &S,
    root: Player,
    mut alpha: i32,
    beta: i32,
    depth: u8,
    info: &mut SearchInfo,
) -> ScoredMove<S::Move> {
    info.nodes += 1;

    if let Some(value) = cutoff_value(state, root, depth, info.config) {
        return ScoredMove::leaf(value);
    }

    let moves = state.legal_moves();

    // Blocked but not finished: the opponent moves next.
    if moves.is_empty() {
        let reply = min_node(&state.pass(), root, alpha, beta, depth + 1, info);
        return ScoredMove::leaf(reply.score);
    }

    let mut best = ScoredMove::new(NEG_INFINITY, None);

    for mv in moves {
        let Some(next) = state.result(mv) else {
            continue;
        };
        let reply = min_node(&next, root, alpha, beta, depth + 1, info);

        if reply.score > best.score {
            best = ScoredMove::new(reply.score, Some(mv));
            alpha = alpha.max(best.score);
        }

        if best.score >= beta {
            info.cutoffs += 1;
            trace!(depth, score = best.score, beta, "beta cutoff");
            return best;
        }
    }

    best
}

fn min_node<S: SearchState>(
    state: &S,
    root: Player,
    alpha: i32,
    mut beta: i32,
    depth: u8,
    info: &mut SearchInfo,
) -> ScoredMove<S::Move> {
    info.nodes += 1;

    if let Some(value) = cutoff_value(state, root, depth, info.config) {
        return ScoredMove::leaf(value);
    }

    let moves = state.legal_moves();

    if moves.is_empty() {
        let reply = max_node(&state.pass(), root, alpha, beta, depth + 1, info);
        return ScoredMove::leaf(reply.score);
    }

    let mut best = ScoredMove::new(POS_INFINITY, None);

    for mv in moves {
        let Some(next) = state.result(mv) else {
            continue;
        };
        let reply = max_node(&next, root, alpha, beta, depth + 1, info);

        if reply.score < best.score {
            best = ScoredMove::new(reply.score, Some(mv));
            beta = beta.min(best.score);
        }

        if best.score <= alpha {
            info.cutoffs += 1;
            trace!(depth, score = best.score, alpha, "alpha cutoff");
            return best;
        }
    }

    best
}

/// Plain minimax over the same tree, without pruning.
/// Shares the cutoff tests, pass handling and tie-break of `search`.
pub fn minimax<S: SearchState>(state: &S, config: &SearchConfig) -> SearchResult<S::Move> {
    let root = state.player_in_turn();
    let mut info = SearchInfo::new(config);

    let scored = minimax_node(state, root, true, 0, &mut info);
    info.into_result(scored)
}

fn minimax_node<S: SearchState>(
    state: &S,
    root: Player,
    maximizing: bool,
    depth: u8,
    info: &mut SearchInfo,
) -> ScoredMove<S::Move> {
    info.nodes += 1;

    if let Some(value) = cutoff_value(state, root, depth, info.config) {
        return ScoredMove::leaf(value);
    }

    let moves = state.legal_moves();

    if moves.is_empty() {
        let reply = minimax_node(&state.pass(), root, !maximizing, depth + 1, info);
        return ScoredMove::leaf(reply.score);
    }

    let mut best = ScoredMove::new(if maximizing { NEG_INFINITY } else { POS_INFINITY }, None);

    for mv in moves {
        let Some(next) = state.result(mv) else {
            continue;
        };
        let reply = minimax_node(&next, root, !maximizing, depth + 1, info);

        let improves = if maximizing {
            reply.score > best.score
        } else {
            reply.score < best.score
        };
        if improves {
            best = ScoredMove::new(reply.score, Some(mv));
        }
    }

    best
}
