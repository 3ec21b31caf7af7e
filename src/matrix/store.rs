use tracing::debug;

use super::{errors, Color, Grid};

/// Owns the authoritative grid and the selected color. All grid changes go
/// through here and each one swaps in a fresh snapshot.
#[derive(Debug, Default, Clone)]
pub struct Store {
    grid: Grid,
    selected: Color,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> Grid {
        self.grid.clone()
    }

    pub fn selected_color(&self) -> Color {
        self.selected
    }

    /// Flips the cell. A cell turned on takes the color selected right now.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Grid, errors::Store> {
        let current = self
            .grid
            .cell(row, col)
            .ok_or(errors::Store::OutOfRange(row, col))?;
        let next = current.toggled(self.selected);
        debug!("toggling cell ({row}, {col}): {current:?} -> {next:?}");

        self.grid = self.grid.with_cell(row, col, next);

        Ok(self.grid())
    }

    /// Palette membership is guaranteed by the `Color` type itself.
    pub fn set_selected_color(&mut self, color: Color) {
        if color == self.selected {
            return;
        }

        debug!("selected color changed: {} -> {}", self.selected, color);
        self.selected = color;
    }

    pub fn reset_all(&mut self) -> Grid {
        debug!("resetting grid; lit cells before reset: {}", self.grid.lit_count());
        self.grid = Grid::default();
        self.grid()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matrix::{Cell, GRID_SIZE};

    fn all_cells() -> impl Iterator<Item = (usize, usize)> {
        (0..GRID_SIZE).flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
    }

    #[test]
    fn toggle_twice_restores_grid() {
        let mut store = Store::new();
        store.set_selected_color(Color::Orange);
        store.toggle_cell(5, 5).unwrap();

        all_cells().for_each(|(r, c)| {
            let before = store.grid();
            store.toggle_cell(r, c).unwrap();
            let after = store.toggle_cell(r, c).unwrap();
            assert_eq!(before, after, "cell ({r}, {c})");
        });
    }

    #[test]
    fn toggle_captures_color_at_call_time() {
        let mut store = Store::new();
        store.set_selected_color(Color::Blue);
        store.toggle_cell(4, 2).unwrap();
        store.set_selected_color(Color::Yellow);

        assert_eq!(store.grid().cell(4, 2), Some(Cell::lit(Color::Blue)));
    }

    #[test]
    fn toggle_off_resets_color() {
        let mut store = Store::new();
        store.set_selected_color(Color::Pink);
        store.toggle_cell(0, 7).unwrap();
        store.set_selected_color(Color::Green);
        let grid = store.toggle_cell(0, 7).unwrap();

        assert_eq!(grid.cell(0, 7), Some(Cell::OFF));
        assert_eq!(grid.cell(0, 7).unwrap().color, Color::White);
    }

    #[test]
    fn toggle_only_touches_target() {
        let mut store = Store::new();
        store.set_selected_color(Color::Red);
        let before = store.grid();
        let after = store.toggle_cell(2, 3).unwrap();

        all_cells()
            .filter(|cell| *cell != (2, 3))
            .for_each(|(r, c)| assert_eq!(before.cell(r, c), after.cell(r, c)));
        (0..GRID_SIZE)
            .filter(|r| *r != 2)
            .for_each(|r| assert!(after.shares_row(&before, r)));
    }

    #[test]
    fn toggle_out_of_range_leaves_grid() {
        let mut store = Store::new();
        store.toggle_cell(1, 1).unwrap();
        let before = store.grid();

        assert_eq!(store.toggle_cell(8, 0), Err(errors::Store::OutOfRange(8, 0)));
        assert_eq!(store.toggle_cell(0, 8), Err(errors::Store::OutOfRange(0, 8)));
        assert_eq!(
            store.toggle_cell(usize::MAX, usize::MAX),
            Err(errors::Store::OutOfRange(usize::MAX, usize::MAX))
        );
        assert_eq!(store.grid(), before);
    }

    #[test]
    fn reset_clears_everything_but_selection() {
        let mut store = Store::new();
        store.set_selected_color(Color::Green);
        all_cells()
            .filter(|(r, c)| (r + c) % 3 == 0)
            .for_each(|(r, c)| {
                store.toggle_cell(r, c).unwrap();
            });

        let grid = store.reset_all();

        assert_eq!(grid, Grid::default());
        all_cells().for_each(|(r, c)| assert_eq!(grid.cell(r, c), Some(Cell::OFF)));
        assert_eq!(store.selected_color(), Color::Green);
    }

    #[test]
    fn selecting_color_keeps_cells() {
        let mut store = Store::new();
        store.set_selected_color(Color::Red);
        store.toggle_cell(6, 1).unwrap();
        let before = store.grid();

        Color::ALL.into_iter().for_each(|c| store.set_selected_color(c));

        assert_eq!(store.grid(), before);
    }

    #[test]
    fn red_cell_scenario() {
        let mut store = Store::new();
        store.set_selected_color("#FF0000".parse().unwrap());

        let grid = store.toggle_cell(2, 3).unwrap();
        assert_eq!(grid.cell(2, 3), Some(Cell::lit(Color::Red)));
        assert_eq!(grid.lit_count(), 1);

        let grid = store.toggle_cell(2, 3).unwrap();
        assert_eq!(
            grid.cell(2, 3),
            Some(Cell {
                on: false,
                color: Color::White
            })
        );
        assert_eq!(grid.lit_count(), 0);
    }

    #[test]
    fn corners_then_reset_scenario() {
        let mut store = Store::new();
        store.toggle_cell(0, 0).unwrap();
        let grid = store.toggle_cell(7, 7).unwrap();
        assert_eq!(grid.cell(0, 0), Some(Cell::lit(Color::White)));
        assert_eq!(grid.cell(7, 7), Some(Cell::lit(Color::White)));

        let grid = store.reset_all();
        assert_eq!(grid.lit_count(), 0);
        grid.rows()
            .flatten()
            .for_each(|c| assert_eq!(*c, Cell::OFF));
    }
}
