use crate::board::Board;
use crate::error::NotationError;
use crate::game_state::GameState;
use crate::types::{Cell, Player, Position};

/// Text board notation.
/// One line per row, one character per cell: `.` empty, `B`/`X` black, `W`/`O` white.
/// Whitespace inside a row and blank lines are ignored.
/// A game state adds a final line naming the player to move.
pub mod positions {
    /// Standard 8×8 opening, Black to move.
    pub const OPENING: &str = "\
........
........
........
...WB...
...BW...
........
........
........
B";
}

impl Board {
    /// Parses a board from notation.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let rows = notation_rows(text);
        parse_rows(&rows)
    }

    /// Serializes the board, one row per line.
    pub fn to_notation(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl GameState {
    /// Parses a game state: board rows followed by the player to move.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let mut rows = notation_rows(text);
        let turn_line = rows.pop().ok_or(NotationError::Empty)?;
        let turn = turn_line.parse::<Player>()?;
        let board = parse_rows(&rows)?;

        Ok(GameState::from_board(board, turn))
    }

    /// Serializes the state in the format read by `from_notation`.
    pub fn to_notation(&self) -> String {
        format!(
            "{}\n{}",
            self.board().to_notation(),
            self.player_in_turn().symbol()
        )
    }
}

fn notation_rows(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|line| !line.is_empty())
        .collect()
}

fn parse_rows(rows: &[String]) -> Result<Board, NotationError> {
    if rows.is_empty() {
        return Err(NotationError::Empty);
    }

    let size = rows.len();
    let mut board = Board::empty(size)?;

    for (r, row) in rows.iter().enumerate() {
        let got = row.chars().count();
        if got != size {
            return Err(NotationError::NotSquare {
                row: r,
                got,
                expected: size,
            });
        }

        for (c, character) in row.chars().enumerate() {
            let cell = Cell::from_char(character).ok_or(NotationError::InvalidCell {
                character,
                row: r,
                col: c,
            })?;
            board.set(Position::new(r as i32, c as i32), cell);
        }
    }

    Ok(board)
}
