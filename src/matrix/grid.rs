use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::Color;

pub const GRID_SIZE: usize = 8;

pub type Row = [Cell; GRID_SIZE];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub on: bool,
    pub color: Color,
}

impl Cell {
    pub const OFF: Cell = Cell {
        on: false,
        color: Color::DEFAULT,
    };

    pub fn lit(color: Color) -> Self {
        Self { on: true, color }
    }

    /// Off cells never keep their last color.
    pub fn toggled(&self, selected: Color) -> Self {
        match self.on {
            true => Cell::OFF,
            false => Cell::lit(selected),
        }
    }
}

/// Immutable 8x8 snapshot. Rows are shared between snapshots, so cloning is
/// cheap and a single-cell change allocates only the affected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: [Rc<Row>; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        let blank = Rc::new([Cell::OFF; GRID_SIZE]);
        Self {
            rows: std::array::from_fn(|_| blank.clone()),
        }
    }
}

impl Grid {
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().map(|r| r.as_ref())
    }

    pub fn lit_count(&self) -> usize {
        self.rows().flatten().filter(|c| c.on).count()
    }

    /// Returns a new grid with one cell replaced. Caller guarantees bounds.
    pub(super) fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        let mut rows = self.rows.clone();
        let mut changed = *rows[row];
        changed[col] = cell;
        rows[row] = Rc::new(changed);
        Self { rows }
    }

    /// Whether both snapshots hold the very same allocation for `row`.
    pub fn shares_row(&self, other: &Grid, row: usize) -> bool {
        match (self.rows.get(row), other.rows.get(row)) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
