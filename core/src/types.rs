use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;

/// Represents one of the two players in Othello.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Returns the opposite player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the numeric identifier (1 for Black, 2 for White).
    pub const fn id(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }

    /// Creates a player from its numeric identifier.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }

    /// Returns the single-character symbol used in board notation.
    pub const fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

impl FromStr for Player {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "x" | "1" | "black" => Ok(Player::Black),
            "w" | "o" | "2" | "white" => Ok(Player::White),
            other => Err(NotationError::InvalidPlayer(other.to_string())),
        }
    }
}

/// Occupancy of a single board cell.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Returns the cell occupied by the given player.
    pub const fn of(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Returns the player owning this cell, if any.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'B' | 'b' | 'X' | 'x' => Some(Cell::Black),
            'W' | 'w' | 'O' | 'o' => Some(Cell::White),
            _ => None,
        }
    }
}

/// A cell coordinate on the board.
/// `Position::NONE` (-1, -1) is the "no move available" sentinel.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Sentinel returned by agents when the mover has to pass.
    pub const NONE: Position = Position { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns true for the pass sentinel.
    pub const fn is_none(self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }

    /// Returns the neighbouring position in the given direction.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Positions print as column letter plus 1-based row (`d3`).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "pass");
        }
        if (0..26).contains(&self.col) && self.row >= 0 {
            write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Position::NONE);
        }

        let mut chars = s.chars();
        let col = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase() as i32 - 'a' as i32)
            .ok_or_else(|| NotationError::InvalidPosition(s.to_string()))?;
        let row = chars
            .as_str()
            .parse::<i32>()
            .ok()
            .filter(|&r| r >= 1)
            .ok_or_else(|| NotationError::InvalidPosition(s.to_string()))?;

        Ok(Position::new(row - 1, col))
    }
}

/// The eight directions a line of captured tokens can run in.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
