//! Derived sizing and positioning.
//!
//! A `Layout` is a pure function of grid content, measurement, and config.
//! It is recomputed from scratch after every structural edit: width is a
//! max-reduction over a column, so widening is monotonic as content is
//! added, but a shrink (when the widest cell is deleted) can only be found
//! by recomputing, never by decrementing.

use ordered_float::OrderedFloat;

use gridtween_core::geometry::Vec2;

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::measure::TextMeasurer;

/// Per-column widths and per-row heights, plus the position arithmetic
/// derived from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    col_widths: Vec<f64>,
    row_heights: Vec<f64>,
}

impl Layout {
    /// Derive sizing for the full grid.
    pub fn solve(rows: &[Vec<Cell>], config: &GridConfig, measurer: &dyn TextMeasurer) -> Layout {
        let cols = rows.first().map_or(0, |r| r.len());
        let col_widths = (0..cols)
            .map(|c| Self::column_width(rows, c, config, measurer))
            .collect();
        let row_heights = vec![config.cell_height; rows.len()];
        Layout { col_widths, row_heights }
    }

    /// Width of one column: widest measured content, plus padding on both
    /// sides, floored at the configured minimum column width.
    pub fn column_width(
        rows: &[Vec<Cell>],
        col: usize,
        config: &GridConfig,
        measurer: &dyn TextMeasurer,
    ) -> f64 {
        let content = rows
            .iter()
            .filter_map(|row| row.get(col))
            .map(|cell| OrderedFloat(measurer.measure(cell.text(), config.font_size).0))
            .max()
            .map_or(0.0, OrderedFloat::into_inner);
        (content + 2.0 * config.horizontal_padding).max(config.cell_width)
    }

    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    pub fn width(&self, col: usize) -> f64 {
        self.col_widths[col]
    }

    pub fn height(&self, row: usize) -> f64 {
        self.row_heights[row]
    }

    pub(crate) fn set_width(&mut self, col: usize, width: f64) {
        self.col_widths[col] = width;
    }

    /// Left edge of a column relative to the grid origin.
    pub fn col_left(&self, col: usize) -> f64 {
        self.col_widths[..col].iter().sum()
    }

    /// Top edge of a row relative to the grid origin (distance below it).
    pub fn row_top(&self, row: usize) -> f64 {
        self.row_heights[..row].iter().sum()
    }

    pub fn total_width(&self) -> f64 {
        self.col_widths.iter().sum()
    }

    pub fn total_height(&self) -> f64 {
        self.row_heights.iter().sum()
    }

    /// Absolute center of cell `(row, col)` for a grid anchored at `origin`
    /// (its top-left corner). Rows extend downward, so y decreases.
    pub fn center(&self, origin: Vec2, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            origin.x + self.col_left(col) + self.col_widths[col] / 2.0,
            origin.y - (self.row_top(row) + self.row_heights[row] / 2.0),
        )
    }
}
