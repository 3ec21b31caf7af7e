use egui::{Color32, CursorIcon, Grid as UiGrid, Sense, Stroke, Vec2};
use tracing::{debug, trace};

use super::AppWidget;
use crate::matrix::{Cell, Grid, GRID_SIZE};

const CELL_SIZE: f32 = 40.0;
const CELL_SPACING: f32 = 8.0;
const CELL_ROUNDING: f32 = 6.0;
const UNLIT: Color32 = Color32::from_rgb(0x1A, 0x20, 0x2C);

/// Draws a grid snapshot and remembers which cell was clicked this frame.
pub struct MatrixView {
    grid: Grid,
    clicked: Option<(usize, usize)>,
}

impl MatrixView {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            clicked: None,
        }
    }

    pub fn update_grid(&mut self, grid: Grid) {
        let changed = (0..GRID_SIZE)
            .filter(|r| !grid.shares_row(&self.grid, *r))
            .count();
        trace!("new grid snapshot; changed rows: {changed}");
        self.grid = grid;
    }

    /// Takes the click registered during the last `show`, if any.
    pub fn clicked(&mut self) -> Option<(usize, usize)> {
        self.clicked.take()
    }
}

impl AppWidget for MatrixView {
    fn show(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        UiGrid::new("led_matrix")
            .spacing(Vec2::splat(CELL_SPACING))
            .show(ui, |ui| {
                self.grid.rows().enumerate().for_each(|(r, row)| {
                    row.iter().enumerate().for_each(|(c, cell)| {
                        let (rect, response) =
                            ui.allocate_exact_size(Vec2::splat(CELL_SIZE), Sense::click());

                        let rect = match response.hovered() {
                            true => rect.expand(2.0),
                            false => rect,
                        };
                        ui.painter().rect_filled(rect, CELL_ROUNDING, fill(cell));
                        if response.hovered() {
                            ui.painter().rect_stroke(
                                rect,
                                CELL_ROUNDING,
                                Stroke::new(1.0, ui.visuals().strong_text_color()),
                            );
                        }

                        if response
                            .on_hover_cursor(CursorIcon::PointingHand)
                            .clicked()
                        {
                            debug!("cell clicked: ({r}, {c})");
                            clicked = Some((r, c));
                        }
                    });
                    ui.end_row();
                });
            });

        trace!("matrix drawn; lit cells: {}", self.grid.lit_count());

        if clicked.is_some() {
            self.clicked = clicked;
        }
    }
}

fn fill(cell: &Cell) -> Color32 {
    if !cell.on {
        return UNLIT;
    }

    let (r, g, b) = cell.color.rgb();
    Color32::from_rgb(r, g, b)
}
