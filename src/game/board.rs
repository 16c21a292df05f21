use std::fmt;

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::error::DropError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Owner(PlayerId),
}

impl Cell {
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Owner(player) => Some(player),
        }
    }
}

/// Where a dropped token came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
}

/// Fixed-size board with column gravity.
///
/// Cells are stored column by column, row 0 at the bottom. The only way to
/// occupy a cell is [`Grid::drop_piece`], which always writes the lowest empty
/// row of a column, so every column is a contiguous stack starting at row 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            heights: vec![0; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    /// Out-of-range coordinates read as empty.
    pub fn cell_at(&self, column: usize, row: usize) -> Cell {
        if column >= self.width || row >= self.height {
            return Cell::Empty;
        }
        self.cells[column * self.height + row]
    }

    /// Number of tokens stacked in a column
    pub fn column_height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    /// Check if a column is full. Columns outside the grid count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.heights.get(column) {
            Some(&h) => h >= self.height,
            None => true,
        }
    }

    /// Drop a token in a column, returns where it landed
    pub fn drop_piece(&mut self, column: usize, owner: PlayerId) -> Result<Placement, DropError> {
        if column >= self.width {
            return Err(DropError::InvalidColumn {
                column,
                width: self.width,
            });
        }

        let row = self.heights[column];
        if row >= self.height {
            return Err(DropError::ColumnFull { column });
        }

        self.cells[column * self.height + row] = Cell::Owner(owner);
        self.heights[column] += 1;
        Ok(Placement { column, row })
    }

    /// Total number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.width * self.height
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            let line: String = (0..self.width)
                .map(|column| match self.cell_at(column, row) {
                    Cell::Empty => '.',
                    Cell::Owner(player) => player.symbol(),
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
