use std::fmt;

use super::Player;
use crate::error::EngineError;

pub const MIN_WIDTH: usize = 4;
pub const MAX_WIDTH: usize = 15;
pub const MIN_HEIGHT: usize = 4;
pub const MAX_HEIGHT: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

/// A board coordinate. `x` is the column (0 = left), `y` the row (0 = bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Position { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    // column-major: column x occupies cells[x * height..(x + 1) * height], row 0 first
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) || !(MIN_HEIGHT..=MAX_HEIGHT).contains(&height)
        {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position. Row 0 is the bottom.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<Cell, EngineError> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfRange { x, y });
        }
        Ok(self.cells[self.index(x, y)])
    }

    /// Like [`Board::cell_at`] but takes signed coordinates and returns `None`
    /// off the board.
    pub(crate) fn get_signed(&self, x: isize, y: isize) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[self.index(x, y)])
    }

    /// Row a token dropped into `column` would land on, without dropping it.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        self.column(column).iter().position(|&c| c == Cell::Empty)
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.landing_row(column).is_none()
    }

    /// Columns that still accept a token
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn drop_token(&mut self, column: usize, player: Player) -> Result<usize, EngineError> {
        if column >= self.width {
            return Err(EngineError::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }

        let row = self
            .landing_row(column)
            .ok_or(EngineError::ColumnFull(column))?;
        let idx = self.index(column, row);
        self.cells[idx] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Number of tokens on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    fn column(&self, x: usize) -> &[Cell] {
        &self.cells[x * self.height..(x + 1) * self.height]
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }
}

impl fmt::Display for Board {
    /// Top row first: `.` empty, `X` player 1, `O` player 2.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let symbol = match self.cells[self.index(x, y)] {
                    Cell::Empty => '.',
                    Cell::Player1 => 'X',
                    Cell::Player2 => 'O',
                };
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
