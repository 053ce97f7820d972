//! Othello playing agents: the alpha-beta searcher, its evaluation
//! function, and a random baseline.

pub mod alpha_beta;
pub mod evaluation;
pub mod game;
pub mod random;
pub mod search;

use othello_core::{GameState, Player, Position};
use std::fmt;

/// Core trait for Othello agents.
pub trait Agent {
    /// Picks a move for the player in turn.
    ///
    /// Returns `Position::NONE` if and only if that player has no legal
    /// move, in which case the turn has been passed on `state`.
    fn decide_move(&mut self, state: &mut GameState) -> Position;

    /// Get the agent's name
    fn name(&self) -> &str;
}

/// Game tree interface used by the search.
pub trait SearchState: Evaluatable + Sized {
    type Move: Copy + Eq + fmt::Debug;

    fn player_in_turn(&self) -> Player;
    fn legal_moves(&self) -> Vec<Self::Move>;
    fn is_finished(&self) -> bool;

    /// Successor after playing `mv`, or None if the move cannot be applied.
    fn result(&self, mv: Self::Move) -> Option<Self>;

    /// Successor with the turn handed over and nothing placed.
    fn pass(&self) -> Self;
}

impl SearchState for GameState {
    type Move = Position;

    fn player_in_turn(&self) -> Player {
        GameState::player_in_turn(self)
    }

    fn legal_moves(&self) -> Vec<Position> {
        GameState::legal_moves(self)
    }

    fn is_finished(&self) -> bool {
        GameState::is_finished(self)
    }

    fn result(&self, mv: Position) -> Option<Self> {
        let mut next = GameState::from_board(self.board().clone(), self.player_in_turn());
        next.insert_token(mv).ok()?;
        Some(next)
    }

    fn pass(&self) -> Self {
        let mut next = self.clone();
        next.change_player();
        next
    }
}

/// The agents available to a game driver.
pub enum AgentKind {
    AlphaBeta(AlphaBetaAgent),
    Random(RandomAgent),
}

impl Agent for AgentKind {
    fn decide_move(&mut self, state: &mut GameState) -> Position {
        match self {
            AgentKind::AlphaBeta(agent) => agent.decide_move(state),
            AgentKind::Random(agent) => agent.decide_move(state),
        }
    }

    fn name(&self) -> &str {
        match self {
            AgentKind::AlphaBeta(agent) => agent.name(),
            AgentKind::Random(agent) => agent.name(),
        }
    }
}

impl From<AlphaBetaAgent> for AgentKind {
    fn from(agent: AlphaBetaAgent) -> Self {
        AgentKind::AlphaBeta(agent)
    }
}

impl From<RandomAgent> for AgentKind {
    fn from(agent: RandomAgent) -> Self {
        AgentKind::Random(agent)
    }
}

pub use alpha_beta::AlphaBetaAgent;
pub use evaluation::{EvaluationWeights, Evaluatable};
pub use game::{play_game, GameRecord, Ply};
pub use random::RandomAgent;
pub use search::{minimax, search, ScoredMove, SearchConfig, SearchResult, DEFAULT_MAX_DEPTH};
