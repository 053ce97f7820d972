use crate::error::BoardError;
use crate::types::{Cell, Player, Position};

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 8;

/// Square grid of cells stored row-major.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with the four centre tokens of the standard opening.
    /// (h-1, h-1) and (h, h) are White, (h-1, h) and (h, h-1) are Black.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let mut board = Self::empty(size)?;
        let h = (size / 2) as i32;

        board.set(Position::new(h - 1, h - 1), Cell::White);
        board.set(Position::new(h, h), Cell::White);
        board.set(Position::new(h - 1, h), Cell::Black);
        board.set(Position::new(h, h - 1), Cell::Black);

        Ok(board)
    }

    /// Creates a board without any tokens.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if size < 4 || size % 2 != 0 {
            return Err(BoardError::InvalidSize(size));
        }

        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// The standard 8×8 opening position.
    pub fn standard() -> Self {
        let mut board = Self {
            size: DEFAULT_SIZE,
            cells: vec![Cell::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        };
        board.set(Position::new(3, 3), Cell::White);
        board.set(Position::new(4, 4), Cell::White);
        board.set(Position::new(3, 4), Cell::Black);
        board.set(Position::new(4, 3), Cell::Black);
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row as usize * self.size + pos.col as usize)
        } else {
            None
        }
    }

    /// Returns the cell at the position, or None when off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Sets the cell at the position. Off-board positions are ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    /// The four corner positions: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Position; 4] {
        let last = self.size as i32 - 1;
        [
            Position::new(0, 0),
            Position::new(0, last),
            Position::new(last, 0),
            Position::new(last, last),
        ]
    }

    /// Counts the tokens of one player.
    pub fn count(&self, player: Player) -> u32 {
        let target = Cell::of(player);
        self.cells.iter().filter(|&&cell| cell == target).count() as u32
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let board = Board::new(8).unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(board.get(Position::new(3, 3)), Some(Cell::White));
        assert_eq!(board.get(Position::new(3, 4)), Some(Cell::Black));
        assert_eq!(board.count(Player::Black), 2);
        assert_eq!(board.count(Player::White), 2);
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(Board::new(3), Err(BoardError::InvalidSize(3)));
        assert_eq!(Board::new(7), Err(BoardError::InvalidSize(7)));
        assert_eq!(Board::empty(2), Err(BoardError::InvalidSize(2)));
        assert!(Board::new(4).is_ok());
        assert!(Board::new(10).is_ok());
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut board = Board::new(4).unwrap();
        assert_eq!(board.get(Position::new(-1, 0)), None);
        assert_eq!(board.get(Position::new(0, 4)), None);
        board.set(Position::new(4, 4), Cell::Black);
        assert_eq!(board.count(Player::Black), 2);
    }

    #[test]
    fn test_corners() {
        let board = Board::new(6).unwrap();
        assert_eq!(
            board.corners(),
            [
                Position::new(0, 0),
                Position::new(0, 5),
                Position::new(5, 0),
                Position::new(5, 5)
            ]
        );
    }

    #[test]
    fn test_positions_are_row_major() {
        let board = Board::new(4).unwrap();
        let positions: Vec<Position> = board.positions().take(5).collect();
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[3], Position::new(0, 3));
        assert_eq!(positions[4], Position::new(1, 0));
        assert_eq!(board.positions().count(), 16);
    }
}
