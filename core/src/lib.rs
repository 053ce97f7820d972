//! Othello rules: board, game state, notation and move-path counting.

pub mod board;
pub mod error;
pub mod game_state;
pub mod notation;
pub mod perft;
pub mod types;

pub use board::*;
pub use error::{BoardError, MoveError, NotationError};
pub use game_state::*;
pub use notation::positions;
pub use perft::{perft, perft_detailed, perft_divide, PerftResults};
pub use types::*;
