use crate::Agent;
use othello_core::{GameState, MoveError, Player, Position, TokenCount};
use tracing::{debug, info};

/// One ply of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply {
    pub player: Player,
    pub mv: Position,
}

/// Final position and move record of a game between two agents.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub final_state: GameState,
    pub plies: Vec<Ply>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        self.final_state.winner()
    }

    pub fn score(&self) -> TokenCount {
        self.final_state.count_tokens()
    }
}

/// Plays `state` to the end, asking `black` and `white` for moves in turn.
/// Agents pass on their own; an agent returning an illegal move aborts the game.
pub fn play_game(
    mut state: GameState,
    black: &mut dyn Agent,
    white: &mut dyn Agent,
) -> Result<GameRecord, MoveError> {
    let mut plies = Vec::new();

    while !state.is_finished() {
        let player = state.player_in_turn();
        let agent: &mut dyn Agent = match player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };

        let mv = agent.decide_move(&mut state);
        if !mv.is_none() {
            state.insert_token(mv)?;
        }
        debug!(?player, agent = agent.name(), %mv, "ply");
        plies.push(Ply { player, mv });
    }

    let record = GameRecord {
        final_state: state,
        plies,
    };
    let score = record.score();
    info!(
        black = black.name(),
        white = white.name(),
        black_tokens = score.black,
        white_tokens = score.white,
        plies = record.plies.len(),
        "game finished"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlphaBetaAgent, RandomAgent};

    #[test]
    fn test_random_game_runs_to_completion() {
        let mut black = RandomAgent::with_seed(3);
        let mut white = RandomAgent::with_seed(4);

        let record = play_game(GameState::new(), &mut black, &mut white).unwrap();
        assert!(record.final_state.is_finished());
        // Every ply either places a token or passes.
        let placed = record.plies.iter().filter(|p| !p.mv.is_none()).count() as u32;
        let score = record.score();
        assert_eq!(score.black + score.white, 4 + placed);
    }

    #[test]
    fn test_small_board_game() {
        let state = GameState::with_size(4, Player::Black).unwrap();
        let mut black = AlphaBetaAgent::new(4);
        let mut white = RandomAgent::with_seed(11);

        let record = play_game(state, &mut black, &mut white).unwrap();
        assert!(record.final_state.is_finished());
        assert_eq!(record.plies[0].player, Player::Black);
    }
}
