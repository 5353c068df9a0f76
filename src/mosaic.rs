//! Pixel grid to cell fill mapping.
//!
//! Every pixel of the (already resampled) image becomes exactly one cell of
//! the worksheet: pixel `(x, y)` fills the cell at row `y + 1`, column
//! `x + 1`. Colours are computed one pixel row per rayon task; the cells are
//! then assigned in row order so progress is reported top to bottom.

use crate::ooxml::xlsx::{ArgbColor, CellFill, MutableWorksheet};
use image::RgbImage;
use rayon::prelude::*;
use std::collections::HashSet;

/// Column width and row height applied to every column and row of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Column width in character units.
    pub cell_width: f64,
    /// Row height in points.
    pub row_height: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            cell_width: 2.0,
            row_height: 14.0,
        }
    }
}

/// Reported after each grid row has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowProgress {
    /// Rows finished so far (1-based, equals the row just written).
    pub completed: u32,
    /// Total number of rows in the grid.
    pub total: u32,
}

/// Summary of a [`paint`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Number of cells that received a fill.
    pub cells: u64,
    /// Number of distinct fill colours used.
    pub distinct_colors: usize,
}

/// Paint `image` onto `sheet`, one solid-filled cell per pixel.
///
/// Columns `1..=width` get `geometry.cell_width` and rows `1..=height` get
/// `geometry.row_height`. `progress` is called once per row, in order.
pub fn paint<F>(
    image: &RgbImage,
    sheet: &mut MutableWorksheet,
    geometry: &GridGeometry,
    mut progress: F,
) -> PaintStats
where
    F: FnMut(RowProgress),
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return PaintStats::default();
    }

    for col in 1..=width {
        sheet.set_column_width(col, geometry.cell_width);
    }

    let rows: Vec<Vec<ArgbColor>> = image
        .as_raw()
        .par_chunks(width as usize * 3)
        .map(|row| {
            row.chunks_exact(3)
                .map(|px| ArgbColor::opaque(px[0], px[1], px[2]))
                .collect()
        })
        .collect();

    let mut palette = HashSet::new();
    let mut cells = 0u64;

    for (y, colors) in rows.into_iter().enumerate() {
        let row = y as u32 + 1;
        sheet.set_row_height(row, geometry.row_height);

        for (x, color) in colors.into_iter().enumerate() {
            let previous = sheet.set_cell_fill(row, x as u32 + 1, CellFill::solid(color));
            debug_assert!(previous.is_none(), "cell ({row}, {}) written twice", x + 1);
            palette.insert(color);
            cells += 1;
        }

        progress(RowProgress {
            completed: row,
            total: height,
        });
    }

    PaintStats {
        cells,
        distinct_colors: palette.len(),
    }
}
