use serde::{Deserialize, Serialize};

use gridtween_core::color::Rgba;

/// Background fill: color plus opacity, settable independently of the
/// font and border colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Rgba,
    pub opacity: f64,
}

/// Per-cell visual styling. `None` means the renderer's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    pub font_color: Option<Rgba>,
    pub background: Option<Fill>,
    pub border_color: Option<Rgba>,
}

/// One addressable unit of the grid: text content plus styling.
///
/// A cell is exclusively owned by one grid position. Its `(row, col)` index
/// always matches its position in the grid's sequences; the mutation engine
/// reassigns indices after every structural edit. Cells detached by a delete
/// operation keep the index they had at the moment of detachment.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    text: String,
    pub style: CellStyle,
    row: usize,
    col: usize,
}

impl Cell {
    pub(crate) fn new(text: String, row: usize, col: usize) -> Self {
        Self {
            text,
            style: CellStyle::default(),
            row,
            col,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_index(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    pub fn set_font_color(&mut self, color: Rgba) {
        self.style.font_color = Some(color);
    }

    pub fn set_background_color(&mut self, color: Rgba, opacity: f64) {
        self.style.background = Some(Fill { color, opacity });
    }

    pub fn set_border_color(&mut self, color: Rgba) {
        self.style.border_color = Some(color);
    }
}
