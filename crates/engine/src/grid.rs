use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use gridtween_core::geometry::Vec2;

use crate::cell::Cell;
use crate::config::{GridConfig, GridSpec};
use crate::error::GridError;
use crate::layout::Layout;
use crate::measure::{Monospace, TextMeasurer};

/// A rectangular arrangement of cells with an optional header row and
/// derived geometry.
///
/// Invariants held at all times:
/// - every row has the same length (`column_count`)
/// - `row_count >= 1` and `column_count >= 1` (a headed grid additionally
///   keeps at least one data row)
/// - each cell's `(row, col)` matches its position in the sequences
/// - header names are unique when a header is present
///
/// All mutations take `&mut self`, so the single-writer rule from the
/// concurrency model is enforced at compile time. References handed out by
/// `cell`/`row`/`column` are read-only views tied to the borrow; any
/// structural mutation ends them.
#[derive(Clone)]
pub struct Grid {
    pub(crate) rows: Vec<Vec<Cell>>,
    pub(crate) has_header: bool,
    pub(crate) config: GridConfig,
    pub(crate) origin: Vec2,
    pub(crate) layout: Layout,
    pub(crate) measurer: Arc<dyn TextMeasurer>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("has_header", &self.has_header)
            .field("config", &self.config)
            .field("origin", &self.origin)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl Grid {
    /// Build from a single table where row 0 is the header.
    pub fn from_data(data: Vec<Vec<String>>, config: GridConfig) -> Result<Self, GridError> {
        Self::build(data, true, config, Arc::new(Monospace))
    }

    /// Build from an explicit header plus data rows.
    pub fn from_parts(
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        config: GridConfig,
    ) -> Result<Self, GridError> {
        let mut data = Vec::with_capacity(rows.len() + 1);
        data.push(header);
        data.extend(rows);
        Self::build(data, true, config, Arc::new(Monospace))
    }

    /// Build a headerless grid.
    pub fn from_rows(rows: Vec<Vec<String>>, config: GridConfig) -> Result<Self, GridError> {
        Self::build(rows, false, config, Arc::new(Monospace))
    }

    /// Build from a declarative spec (see `GridSpec` for the recognized
    /// combinations).
    pub fn from_spec(spec: GridSpec) -> Result<Self, GridError> {
        spec.validate()?;
        let GridSpec { data, header, rows, config } = spec;
        match (data, header, rows) {
            (Some(data), None, None) => Self::from_data(data, config),
            (None, Some(header), Some(rows)) => Self::from_parts(header, rows, config),
            (None, None, Some(rows)) => Self::from_rows(rows, config),
            // validate() rejects every other combination
            _ => Err(GridError::Config("invalid grid spec".to_string())),
        }
    }

    /// Swap in a different measurement service and re-derive the layout.
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self.relayout();
        self
    }

    fn build(
        data: Vec<Vec<String>>,
        has_header: bool,
        config: GridConfig,
        measurer: Arc<dyn TextMeasurer>,
    ) -> Result<Self, GridError> {
        config.validate()?;

        let expected = data.first().map_or(0, Vec::len);
        if data.is_empty() || expected == 0 {
            return Err(GridError::Config(
                "a grid needs at least one row and one column".to_string(),
            ));
        }
        for (i, row) in data.iter().enumerate() {
            if row.len() != expected {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected,
                    actual: row.len(),
                });
            }
        }
        if has_header {
            if data.len() < 2 {
                return Err(GridError::Config(
                    "a headed grid needs at least one data row".to_string(),
                ));
            }
            check_unique_names(&data[0])?;
        }

        let rows: Vec<Vec<Cell>> = data
            .into_iter()
            .enumerate()
            .map(|(r, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(c, text)| Cell::new(text, r, c))
                    .collect()
            })
            .collect();
        let layout = Layout::solve(&rows, &config, measurer.as_ref());

        Ok(Self {
            rows,
            has_header,
            config,
            origin: Vec2::ZERO,
            layout,
            measurer,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows excluding the header.
    pub fn data_row_count(&self) -> usize {
        self.row_count() - usize::from(self.has_header)
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// The header row's cells, if the grid has a header.
    pub fn header(&self) -> Option<&[Cell]> {
        if self.has_header {
            self.rows.first().map(Vec::as_slice)
        } else {
            None
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Anchor the grid's top-left corner. Positioning is the caller's
    /// concern and emits no transitions.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        self.check_cell(row, col)?;
        Ok(&self.rows[row][col])
    }

    /// Mutable access for per-cell styling. Content changes go through
    /// `set_cell_value` so the layout stays consistent.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, GridError> {
        self.check_cell(row, col)?;
        Ok(&mut self.rows[row][col])
    }

    pub fn row(&self, index: usize) -> Result<&[Cell], GridError> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(GridError::RowOutOfBounds {
                index,
                rows: self.row_count(),
            })
    }

    pub fn column(&self, index: usize) -> Result<Vec<&Cell>, GridError> {
        if index >= self.column_count() {
            return Err(GridError::ColumnOutOfBounds {
                index,
                cols: self.column_count(),
            });
        }
        Ok(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Index of the column whose header cell carries `name`.
    pub fn column_index(&self, name: &str) -> Result<usize, GridError> {
        if !self.has_header {
            return Err(GridError::NoHeader);
        }
        self.rows[0]
            .iter()
            .position(|cell| cell.text() == name)
            .ok_or_else(|| GridError::UnknownColumn(name.to_string()))
    }

    pub fn column_by_name(&self, name: &str) -> Result<Vec<&Cell>, GridError> {
        let index = self.column_index(name)?;
        self.column(index)
    }

    /// Absolute center of cell `(row, col)`, derived from origin + layout.
    pub fn cell_position(&self, row: usize, col: usize) -> Result<Vec2, GridError> {
        self.check_cell(row, col)?;
        Ok(self.layout.center(self.origin, row, col))
    }

    // =========================================================================
    // Internal helpers shared with the mutation engine
    // =========================================================================

    pub(crate) fn check_cell(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.row_count() || col >= self.column_count() {
            return Err(GridError::CellOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.column_count(),
            });
        }
        Ok(())
    }

    /// Reassign every cell's `(row, col)` to match its position.
    pub(crate) fn reindex(&mut self) {
        for (r, row) in self.rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                cell.set_index(r, c);
            }
        }
    }

    /// Re-derive the full layout from current content.
    pub(crate) fn relayout(&mut self) {
        self.layout = Layout::solve(&self.rows, &self.config, self.measurer.as_ref());
    }
}

/// Reject duplicate header names (spec treats first-match resolution as a
/// bug; uniqueness is enforced at construction instead).
pub(crate) fn check_unique_names(names: &[String]) -> Result<(), GridError> {
    let mut seen = FxHashSet::default();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(GridError::DuplicateColumn(name.clone()));
        }
    }
    Ok(())
}
