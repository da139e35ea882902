//! Grid module - the playing field store
//!
//! The grid is a `columns x rows` array of cells in flat row-major storage.
//! Coordinates: (x, y) where x runs left to right and y runs top to bottom,
//! so row 0 is the top of the field.
//!
//! Mutation never happens on the installed state directly. Callers take a
//! full copy with [`Grid::snapshot`], edit it, and install it with
//! [`Grid::replace`] once the edit is known to be valid. A half-applied move
//! is never observable.

use blockfall_types::{Cell, Point};

/// A full copy of the grid's cells.
///
/// Also used as the working copy for a pending mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    columns: u16,
    rows: u16,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

/// One cell that differs between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub at: Point,
    pub cell: Cell,
}

impl GridSnapshot {
    /// Create an all-empty snapshot
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![Cell::Empty; columns as usize * rows as usize],
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= i32::from(self.columns) || y < 0 || y >= i32::from(self.rows) {
            return None;
        }
        Some(y as usize * self.columns as usize + x as usize)
    }

    /// Whether `p` lies inside the grid
    pub fn contains(&self, p: Point) -> bool {
        self.index(p.x, p.y).is_some()
    }

    /// Cell at `p`, or None if out of bounds
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.index(p.x, p.y).map(|i| self.cells[i])
    }

    /// In bounds and empty
    pub fn is_vacant(&self, p: Point) -> bool {
        matches!(self.get(p), Some(Cell::Empty))
    }

    /// Set cell at `p`. Returns false if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        match self.index(p.x, p.y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.columns as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Check if every cell in row `y` is non-empty
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        self.row(y).iter().all(|cell| !cell.is_empty())
    }

    /// Remove row `y`: everything above it shifts down one row and an empty
    /// row appears at the top.
    pub fn remove_row(&mut self, y: usize) {
        if y >= self.rows as usize {
            return;
        }

        let width = self.columns as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);

        for cell in &mut self.cells[..width] {
            *cell = Cell::Empty;
        }
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of `self` that differ from `prev`, in row-major order.
    ///
    /// A renderer holding `prev` only needs to repaint these. Snapshots of a
    /// different size report every cell.
    pub fn changes_since(&self, prev: &GridSnapshot) -> Vec<CellChange> {
        let same_shape = prev.columns == self.columns && prev.rows == self.rows;
        let width = self.columns as usize;

        self.cells
            .iter()
            .enumerate()
            .filter(|&(i, cell)| !same_shape || prev.cells[i] != *cell)
            .map(|(i, &cell)| CellChange {
                at: Point::new((i % width) as i32, (i / width) as i32),
                cell,
            })
            .collect()
    }
}

/// The grid store: holds the one current snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    current: GridSnapshot,
}

impl Grid {
    /// Create an empty grid
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            current: GridSnapshot::new(columns, rows),
        }
    }

    pub fn columns(&self) -> u16 {
        self.current.columns
    }

    pub fn rows(&self) -> u16 {
        self.current.rows
    }

    /// Cell at `p`, or None if out of bounds
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.current.get(p)
    }

    /// Borrow the current state
    pub fn current(&self) -> &GridSnapshot {
        &self.current
    }

    /// Full copy of the current state, to be edited and installed with [`Grid::replace`]
    pub fn snapshot(&self) -> GridSnapshot {
        self.current.clone()
    }

    /// Install `next` as the current state wholesale.
    pub fn replace(&mut self, next: GridSnapshot) {
        debug_assert_eq!(next.columns, self.current.columns);
        debug_assert_eq!(next.rows, self.current.rows);
        self.current = next;
    }
}
