//! Game state: board plus player to move.
//! This module provides the rules interface consumed by the agents.
use crate::board::Board;
use crate::error::{BoardError, MoveError};
use crate::types::{Cell, Player, Position, DIRECTIONS};

/// Token totals for both players.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TokenCount {
    pub black: u32,
    pub white: u32,
}

impl TokenCount {
    /// Returns the count for the given player.
    pub const fn of(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// Complete state of an Othello game.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GameState {
    board: Board,
    turn: Player,
}

impl GameState {
    /// Creates a new 8×8 game in the opening position with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            turn: Player::Black,
        }
    }

    /// Creates a new game on a board of the given size.
    pub fn with_size(size: usize, starting: Player) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            turn: starting,
        })
    }

    /// Creates an independent state from a board snapshot and the player to move.
    pub fn from_board(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn player_in_turn(&self) -> Player {
        self.turn
    }

    /// Returns the token totals for both players.
    pub fn count_tokens(&self) -> TokenCount {
        TokenCount {
            black: self.board.count(Player::Black),
            white: self.board.count(Player::White),
        }
    }

    /// Legal moves for the player to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.legal_moves_for(self.turn)
    }

    /// Legal moves for an arbitrary player, in row-major order.
    pub fn legal_moves_for(&self, player: Player) -> Vec<Position> {
        self.board
            .positions()
            .filter(|&pos| self.is_legal_for(pos, player))
            .collect()
    }

    /// Returns true if the player to move may place a token at `pos`.
    pub fn is_legal(&self, pos: Position) -> bool {
        self.is_legal_for(pos, self.turn)
    }

    fn is_legal_for(&self, pos: Position, player: Player) -> bool {
        if self.board.get(pos) != Some(Cell::Empty) {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.captured_run(pos, player, dr, dc) > 0)
    }

    fn has_moves(&self, player: Player) -> bool {
        self.board
            .positions()
            .any(|pos| self.is_legal_for(pos, player))
    }

    /// Returns true if neither player can place a token.
    pub fn is_finished(&self) -> bool {
        !self.has_moves(self.turn) && !self.has_moves(self.turn.opponent())
    }

    /// Number of opponent tokens bracketed from `pos` in direction (dr, dc).
    /// Zero unless the run is closed by one of the player's own tokens.
    fn captured_run(&self, pos: Position, player: Player, dr: i32, dc: i32) -> usize {
        let own = Cell::of(player);
        let opponent = Cell::of(player.opponent());

        let mut current = pos.offset(dr, dc);
        let mut run = 0;

        while let Some(cell) = self.board.get(current) {
            if cell == opponent {
                run += 1;
                current = current.offset(dr, dc);
            } else if cell == own {
                return run;
            } else {
                return 0;
            }
        }

        0
    }

    /// Positions that would flip if the player to move played at `pos`.
    pub fn flips(&self, pos: Position) -> Vec<Position> {
        let mut flipped = Vec::new();
        if self.board.get(pos) != Some(Cell::Empty) {
            return flipped;
        }

        for &(dr, dc) in &DIRECTIONS {
            let run = self.captured_run(pos, self.turn, dr, dc);
            let mut current = pos;
            for _ in 0..run {
                current = current.offset(dr, dc);
                flipped.push(current);
            }
        }

        flipped
    }

    /// Places a token for the player to move, flips every bracketed line
    /// and hands the turn to the opponent. Illegal moves leave the state untouched.
    pub fn insert_token(&mut self, pos: Position) -> Result<(), MoveError> {
        if !self.board.contains(pos) {
            return Err(MoveError::OutOfBounds(pos));
        }

        let flipped = self.flips(pos);
        if flipped.is_empty() {
            return Err(MoveError::Illegal(pos));
        }

        let own = Cell::of(self.turn);
        self.board.set(pos, own);
        for captured in flipped {
            self.board.set(captured, own);
        }

        self.change_player();
        Ok(())
    }

    /// Passes the turn without placing a token.
    pub fn change_player(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Returns the winner of a finished game, or None on a draw.
    pub fn winner(&self) -> Option<Player> {
        let count = self.count_tokens();
        match count.black.cmp(&count.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for GameState {
    fn from(board: Board) -> Self {
        Self::from_board(board, Player::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let state = GameState::new();
        assert_eq!(state.player_in_turn(), Player::Black);
        assert_eq!(state.count_tokens(), TokenCount { black: 2, white: 2 });
        assert!(!state.is_finished());
    }

    #[test]
    fn test_opening_moves() {
        let state = GameState::new();
        assert_eq!(
            state.legal_moves(),
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_insert_token_flips_and_changes_player() {
        let mut state = GameState::new();
        state.insert_token(Position::new(2, 3)).unwrap();

        assert_eq!(state.player_in_turn(), Player::White);
        assert_eq!(state.board().get(Position::new(2, 3)), Some(Cell::Black));
        assert_eq!(state.board().get(Position::new(3, 3)), Some(Cell::Black));
        assert_eq!(state.count_tokens(), TokenCount { black: 4, white: 1 });
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut state = GameState::new();
        let before = state.clone();

        assert_eq!(
            state.insert_token(Position::new(0, 0)),
            Err(MoveError::Illegal(Position::new(0, 0)))
        );
        assert_eq!(
            state.insert_token(Position::new(3, 3)),
            Err(MoveError::Illegal(Position::new(3, 3)))
        );
        assert_eq!(
            state.insert_token(Position::NONE),
            Err(MoveError::OutOfBounds(Position::NONE))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_flips_multiple_directions() {
        // Black at c3 brackets d4 diagonally and c4 vertically via c5.
        let mut board = Board::empty(8).unwrap();
        board.set(Position::new(3, 3), Cell::White);
        board.set(Position::new(4, 4), Cell::Black);
        board.set(Position::new(3, 2), Cell::White);
        board.set(Position::new(4, 2), Cell::Black);
        let state = GameState::from_board(board, Player::Black);

        let mut flips = state.flips(Position::new(2, 2));
        flips.sort();
        assert_eq!(flips, vec![Position::new(3, 2), Position::new(3, 3)]);
    }

    #[test]
    fn test_change_player_keeps_board() {
        let mut state = GameState::new();
        let board = state.board().clone();
        state.change_player();
        assert_eq!(state.player_in_turn(), Player::White);
        assert_eq!(state.board(), &board);
    }

    #[test]
    fn test_finished_when_nobody_can_move() {
        let mut board = Board::empty(4).unwrap();
        board.set(Position::new(0, 0), Cell::Black);
        board.set(Position::new(3, 3), Cell::White);
        let state = GameState::from_board(board, Player::Black);

        assert!(state.legal_moves().is_empty());
        assert!(state.is_finished());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_blocked_mover_is_not_finished() {
        // Black has no token left to bracket with, White can still capture.
        let mut board = Board::empty(4).unwrap();
        board.set(Position::new(0, 0), Cell::White);
        board.set(Position::new(0, 1), Cell::Black);
        let state = GameState::from_board(board, Player::Black);

        assert!(state.legal_moves().is_empty());
        assert_eq!(state.legal_moves_for(Player::White), vec![Position::new(0, 2)]);
        assert!(!state.is_finished());
    }

    #[test]
    fn test_successor_is_independent() {
        let state = GameState::new();
        let mut successor = GameState::from_board(state.board().clone(), state.player_in_turn());
        successor.insert_token(Position::new(2, 3)).unwrap();

        assert_eq!(state, GameState::new());
        assert_ne!(state.board(), successor.board());
    }

    mod playouts {
        use super::*;
        use proptest::prelude::*;
        use rand::rngs::StdRng;
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        proptest! {
            #[test]
            fn moves_flip_exactly_their_captures(seed in any::<u64>()) {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut state = GameState::new();
                let mut placed = 0;

                while !state.is_finished() {
                    let moves = state.legal_moves();
                    let Some(&mv) = moves.choose(&mut rng) else {
                        state.change_player();
                        continue;
                    };
                    prop_assert_eq!(state.board().get(mv), Some(Cell::Empty));

                    let mover = state.player_in_turn();
                    let flips = state.flips(mv).len() as u32;
                    let before = state.count_tokens();
                    prop_assert!(flips > 0);

                    state.insert_token(mv).unwrap();
                    placed += 1;
                    let after = state.count_tokens();
                    prop_assert_eq!(after.of(mover), before.of(mover) + flips + 1);
                    prop_assert_eq!(after.of(mover.opponent()), before.of(mover.opponent()) - flips);
                    prop_assert_eq!(state.player_in_turn(), mover.opponent());
                }

                let count = state.count_tokens();
                prop_assert_eq!(count.black + count.white, 4 + placed);
            }
        }
    }
}
