use std::fmt;

use crate::error::GridError;

pub const ROW_COUNT: usize = 6;
pub const COLUMN_COUNT: usize = 7;

/// Number of aligned discs needed to win.
const RUN_LENGTH: usize = 4;

/// (row step, column step) for horizontal, vertical, descending `\` and
/// ascending `/` runs.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// The symbol a player's discs are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Marker(char);

impl Marker {
    pub const fn new(symbol: char) -> Self {
        Marker(symbol)
    }

    pub fn symbol(self) -> char {
        self.0
    }
}

impl From<char> for Marker {
    fn from(symbol: char) -> Self {
        Marker(symbol)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Marker),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

/// The 6x7 playing grid. Row 0 is the top, discs settle toward row 5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; COLUMN_COUNT]; ROW_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; COLUMN_COUNT]; ROW_COUNT],
        }
    }

    /// Get the cell at a specific position
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROW_COUNT` or `column >= COLUMN_COUNT`.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// All cells in row-major order, as `(row, column, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(column, &cell)| (row, column, cell))
        })
    }

    /// Check if a column can take no more discs. Columns outside the grid
    /// count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLUMN_COUNT {
            return true;
        }
        !self.cells[0][column].is_empty()
    }

    /// Columns that still accept a disc, left to right.
    pub fn available_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLUMN_COUNT).filter(move |&column| !self.is_column_full(column))
    }

    /// Number of occupied cells.
    pub fn disc_count(&self) -> usize {
        self.cells().filter(|(_, _, cell)| !cell.is_empty()).count()
    }

    /// Drop `marker` into `column`. The disc settles in the lowest empty row.
    ///
    /// Returns `Ok(false)` without touching the grid when the column is
    /// already full, and [`GridError::InvalidColumn`] when `column` is not in
    /// `0..COLUMN_COUNT`.
    pub fn attempt_insert(&mut self, column: usize, marker: Marker) -> Result<bool, GridError> {
        Ok(self.drop_disc(column, marker)?.is_some())
    }

    /// Like [`Grid::attempt_insert`], but reports the row the disc landed in.
    pub fn drop_disc(&mut self, column: usize, marker: Marker) -> Result<Option<usize>, GridError> {
        if column >= COLUMN_COUNT {
            return Err(GridError::InvalidColumn { column });
        }

        let Some(row) = (0..ROW_COUNT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
        else {
            return Ok(None);
        };

        self.cells[row][column] = Cell::Occupied(marker);
        Ok(Some(row))
    }

    /// Check if the grid is completely full.
    ///
    /// Only the top row is inspected: with gravity, a column whose top cell
    /// is occupied is occupied all the way down.
    pub fn is_full(&self) -> bool {
        (0..COLUMN_COUNT).all(|column| self.is_column_full(column))
    }

    /// Check whether `marker` has four (or more) discs in a line anywhere on
    /// the grid, horizontally, vertically or along either diagonal.
    pub fn marker_wins(&self, marker: Marker) -> bool {
        let target = Cell::Occupied(marker);

        (0..ROW_COUNT).any(|row| {
            (0..COLUMN_COUNT).any(|column| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.run_matches(row, column, dr, dc, target))
            })
        })
    }

    /// Whether the window of `RUN_LENGTH` cells starting at (row, column)
    /// and stepping by (dr, dc) lies inside the grid and holds only `target`.
    fn run_matches(&self, row: usize, column: usize, dr: isize, dc: isize, target: Cell) -> bool {
        (0..RUN_LENGTH as isize).all(|step| {
            let r = row as isize + dr * step;
            let c = column as isize + dc * step;
            (0..ROW_COUNT as isize).contains(&r)
                && (0..COLUMN_COUNT as isize).contains(&c)
                && self.cells[r as usize][c as usize] == target
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
