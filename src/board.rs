use crate::balls::{DrawnSet, MAX_BALL, MIN_BALL};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Raw matrix value used by card payloads for a non-playable slot.
pub const EMPTY_SENTINEL: i32 = -1;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("position ({row}, {col}) is outside a {rows}x{cols} board")]
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, got: usize },
    #[error("cell ({row}, {col}) holds {value}, outside the ball range 1..=90")]
    NumberOutOfRange { row: usize, col: usize, value: i32 },
    #[error("invalid board cell: '{0}'")]
    Parse(String),
}

/// A board cell coordinate. Ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Content of one board cell. `Empty` slots are never marked and never part of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Number(u8),
}

impl Cell {
    /// Map a raw payload value into a cell. `-1` is the empty sentinel; any other
    /// value must be a ball number.
    ///
    /// ```
    /// use bingo_rs::board::Cell;
    ///
    /// assert_eq!(Cell::from_raw(-1), Some(Cell::Empty));
    /// assert_eq!(Cell::from_raw(42), Some(Cell::Number(42)));
    /// assert_eq!(Cell::from_raw(91), None);
    /// ```
    pub fn from_raw(value: i32) -> Option<Self> {
        if value == EMPTY_SENTINEL {
            return Some(Cell::Empty);
        }
        u8::try_from(value)
            .ok()
            .filter(|n| (MIN_BALL..=MAX_BALL).contains(n))
            .map(Cell::Number)
    }

    pub const fn number(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Number(n) => Some(n),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Option<u8>> for Cell {
    fn from(value: Option<u8>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "-"),
            Cell::Number(n) => write!(f, "{n}"),
        }
    }
}

/// An immutable rectangular grid of cells representing one bingo card.
///
/// ```
/// use bingo_rs::board::{Board, Cell, Position};
///
/// let board: Board = "1 2 3; 4 - 6".parse().unwrap();
/// assert_eq!((board.rows(), board.cols()), (2, 3));
/// assert_eq!(board.value_at(Position::new(1, 1)).unwrap(), Cell::Empty);
/// assert_eq!(board.positions().count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec<Vec<Cell>>,
}

impl Board {
    /// Build a board, rejecting rows whose length differs from the first row.
    pub fn try_new(grid: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let expected = grid.first().map_or(0, Vec::len);
        if let Some((row, r)) = grid.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(BoardError::Ragged { row, expected, got: r.len() });
        }
        Ok(Self { grid })
    }

    /// Build a board from a raw payload matrix where `-1` marks an empty slot.
    pub fn from_matrix(matrix: &[Vec<i32>]) -> Result<Self, BoardError> {
        let grid = matrix
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, &value)| {
                        Cell::from_raw(value)
                            .ok_or(BoardError::NumberOutOfRange { row, col, value })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(grid)
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    pub fn value_at(&self, pos: Position) -> Result<Cell, BoardError> {
        self.grid.get(pos.row).and_then(|r| r.get(pos.col)).copied().ok_or(
            BoardError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows(),
                cols: self.cols(),
            },
        )
    }

    /// Every position in row-major order. Each call yields a fresh iterator.
    pub fn positions(&self) -> Positions {
        Positions { rows: self.rows(), cols: self.cols(), next: 0 }
    }

    /// Positions paired with their cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, r)| {
            r.iter().enumerate().map(move |(col, &cell)| (Position::new(row, col), cell))
        })
    }

    /// Playable numbers in row-major order.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells().filter_map(|(_, cell)| cell.number())
    }

    pub fn position_of(&self, number: u8) -> Option<Position> {
        self.cells().find(|(_, cell)| cell.number() == Some(number)).map(|(pos, _)| pos)
    }

    /// Positions whose number has been drawn. Empty cells are never marked.
    pub fn marked_positions(&self, drawn: &DrawnSet) -> BTreeSet<Position> {
        self.cells()
            .filter(|(_, cell)| cell.number().is_some_and(|n| drawn.contains(n)))
            .map(|(pos, _)| pos)
            .collect()
    }
}

/// Restartable row-major walk over a board's extents.
#[derive(Debug, Clone)]
pub struct Positions {
    rows: usize,
    cols: usize,
    next: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.cols == 0 || self.next >= self.rows * self.cols {
            return None;
        }
        let pos = Position::new(self.next / self.cols, self.next % self.cols);
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.rows * self.cols).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Positions {}

/// Parse rows separated by `;` or newlines, cells by whitespace or commas.
/// `-`, `.` and `-1` denote empty cells.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = s
            .split(|c| c == ';' || c == '\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|t| !t.is_empty())
                    .enumerate()
                    .map(|(col, token)| parse_cell(token, row, col))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::try_new(grid)
    }
}

fn parse_cell(token: &str, row: usize, col: usize) -> Result<Cell, BoardError> {
    if token == "-" || token == "." {
        return Ok(Cell::Empty);
    }
    let value: i32 = token.parse().map_err(|_| BoardError::Parse(token.to_string()))?;
    Cell::from_raw(value).ok_or(BoardError::NumberOutOfRange { row, col, value })
}
