//! Script file format and execution.
//!
//! A script is a grid description plus an ordered list of steps. Mutation
//! steps produce transition descriptors; styling steps change cell state
//! without descriptors. Execution stops at the first failing step, leaving
//! the grid as it was before that step.

use serde::{Deserialize, Serialize};

use gridtween_core::color::Rgba;
use gridtween_core::geometry::Vec2;
use gridtween_engine::config::GridSpec;
use gridtween_engine::error::GridError;
use gridtween_engine::grid::Grid;
use gridtween_engine::transition::{CellRef, TransitionList};

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub grid: GridSpec,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One scripted operation against the grid.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    AddRow {
        values: Vec<String>,
        #[serde(default)]
        index: Option<usize>,
    },
    DeleteRow {
        index: usize,
    },
    AddColumn {
        #[serde(default)]
        header: Option<String>,
        values: Vec<String>,
        #[serde(default)]
        index: Option<usize>,
    },
    DeleteColumn {
        index: usize,
    },
    SetCellValue {
        row: usize,
        col: usize,
        value: String,
    },
    SetHeaderBackgroundColor {
        color: Rgba,
        opacity: f64,
    },
    SetHeaderFontColor {
        color: Rgba,
    },
    SetColumnFontColor {
        col: usize,
        color: Rgba,
    },
    SetColumnBorderColor {
        col: usize,
        color: Rgba,
    },
    SetCellFontColor {
        row: usize,
        col: usize,
        color: Rgba,
    },
    SetCellBackgroundColor {
        row: usize,
        col: usize,
        color: Rgba,
        opacity: f64,
    },
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::AddRow { .. } => "add_row",
            Step::DeleteRow { .. } => "delete_row",
            Step::AddColumn { .. } => "add_column",
            Step::DeleteColumn { .. } => "delete_column",
            Step::SetCellValue { .. } => "set_cell_value",
            Step::SetHeaderBackgroundColor { .. } => "set_header_background_color",
            Step::SetHeaderFontColor { .. } => "set_header_font_color",
            Step::SetColumnFontColor { .. } => "set_column_font_color",
            Step::SetColumnBorderColor { .. } => "set_column_border_color",
            Step::SetCellFontColor { .. } => "set_cell_font_color",
            Step::SetCellBackgroundColor { .. } => "set_cell_background_color",
        }
    }

    fn apply(self, grid: &mut Grid) -> Result<StepRecord, GridError> {
        let name = self.name();
        let mut detached = 0;
        let transitions = match self {
            Step::AddRow { values, index } => grid.add_row(values, index)?,
            Step::DeleteRow { index } => {
                let (cells, list) = grid.delete_row(index)?;
                detached = cells.len();
                list
            }
            Step::AddColumn { header, values, index } => {
                grid.add_column(header, values, index)?
            }
            Step::DeleteColumn { index } => {
                let (cells, list) = grid.delete_column(index)?;
                detached = cells.len();
                list
            }
            Step::SetCellValue { row, col, value } => grid.set_cell_value(row, col, value)?,
            Step::SetHeaderBackgroundColor { color, opacity } => {
                grid.set_header_background_color(color, opacity)?;
                TransitionList::new()
            }
            Step::SetHeaderFontColor { color } => {
                grid.set_header_font_color(color)?;
                TransitionList::new()
            }
            Step::SetColumnFontColor { col, color } => {
                grid.set_column_font_color(col, color)?;
                TransitionList::new()
            }
            Step::SetColumnBorderColor { col, color } => {
                grid.set_column_border_color(col, color)?;
                TransitionList::new()
            }
            Step::SetCellFontColor { row, col, color } => {
                grid.cell_mut(row, col)?.set_font_color(color);
                TransitionList::new()
            }
            Step::SetCellBackgroundColor { row, col, color, opacity } => {
                grid.cell_mut(row, col)?.set_background_color(color, opacity);
                TransitionList::new()
            }
        };
        Ok(StepRecord { op: name, detached, transitions })
    }
}

/// Outcome of one step, serialized to stdout.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub op: &'static str,
    /// Number of cells detached and handed back by a delete.
    pub detached: usize,
    pub transitions: TransitionList,
}

/// Final geometry, for `gridtween layout`.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub origin: Vec2,
    pub column_widths: Vec<f64>,
    pub row_heights: Vec<f64>,
    pub cells: Vec<CellReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellReport {
    pub cell: CellRef,
    pub text: String,
    pub center: Vec2,
}

/// Build the grid and run every step, collecting per-step records.
pub fn execute(script: Script) -> Result<(Grid, Vec<StepRecord>), GridError> {
    let mut grid = Grid::from_spec(script.grid)?;
    let mut records = Vec::with_capacity(script.steps.len());
    for step in script.steps {
        records.push(step.apply(&mut grid)?);
    }
    Ok((grid, records))
}

pub fn layout_report(grid: &Grid) -> LayoutReport {
    let layout = grid.layout();
    let mut cells = Vec::with_capacity(grid.row_count() * grid.column_count());
    for r in 0..grid.row_count() {
        for c in 0..grid.column_count() {
            // Bounds come straight from the loop ranges.
            if let (Ok(cell), Ok(center)) = (grid.cell(r, c), grid.cell_position(r, c)) {
                cells.push(CellReport {
                    cell: CellRef::new(r, c),
                    text: cell.text().to_string(),
                    center,
                });
            }
        }
    }
    LayoutReport {
        origin: grid.origin(),
        column_widths: (0..grid.column_count()).map(|c| layout.width(c)).collect(),
        row_heights: (0..grid.row_count()).map(|r| layout.height(r)).collect(),
        cells,
    }
}
