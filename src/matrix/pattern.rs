use chrono::{DateTime, Utc};

use super::{Grid, GRID_SIZE};

/// Monochrome row bitmap of a grid: one byte per row, leftmost column in the
/// most significant bit. Colors are dropped, only `on` matters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    rows: [u8; GRID_SIZE],
}

impl Pattern {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut rows = [0u8; GRID_SIZE];
        grid.rows().zip(rows.iter_mut()).for_each(|(row, byte)| {
            *byte = row
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.on)
                .fold(0u8, |acc, (col, _)| acc | (1u8 << (GRID_SIZE - 1 - col)));
        });

        Self { rows }
    }

    pub fn bytes(&self) -> [u8; GRID_SIZE] {
        self.rows
    }

    /// Entry for the `PATTERNS` dict of the hardware scripts.
    pub fn render(&self, name: &str) -> String {
        let mut out = format!("    '{name}': bytes([\n");
        out.push_str(&format!("        # {GRID_SIZE}x{GRID_SIZE} matrix pattern\n"));
        self.rows
            .iter()
            .for_each(|b| out.push_str(&format!("        0b{b:08b},\n")));
        out.push_str("    ]),");
        out
    }
}

pub fn pattern_name(at: DateTime<Utc>) -> String {
    format!(
        "pixel_art_{}_{GRID_SIZE}x{GRID_SIZE}",
        at.format("%Y%m%d_%H%M%S")
    )
}
