//! Test harness for scripted mutation sequences.
//!
//! `GridHarness` wraps a `Grid`, applies `Op`s, and keeps every step's
//! transition list and detached cells so tests can check invariants across
//! whole sequences without GUI or renderer dependencies.

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::Grid;
use crate::layout::Layout;
use crate::transition::{Transition, TransitionList};

/// One mutation to apply to the grid under test.
#[derive(Debug, Clone)]
pub enum Op {
    AddRow {
        values: Vec<String>,
        index: Option<usize>,
    },
    DeleteRow {
        index: usize,
    },
    AddColumn {
        header: Option<String>,
        values: Vec<String>,
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
}

pub struct GridHarness {
    grid: Grid,
    steps: Vec<TransitionList>,
    detached: Vec<Vec<Cell>>,
}

impl GridHarness {
    /// Build a harness over a headed grid with default config.
    pub fn from_data(data: &[&[&str]]) -> Self {
        let data = data
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect();
        let grid = Grid::from_data(data, GridConfig::default())
            .unwrap_or_else(|e| panic!("harness grid construction failed: {e}"));
        Self {
            grid,
            steps: Vec::new(),
            detached: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Apply one op, recording its transitions (and detached cells for
    /// deletes) on success.
    pub fn apply(&mut self, op: Op) -> Result<&TransitionList, GridError> {
        let list = match op {
            Op::AddRow { values, index } => self.grid.add_row(values, index)?,
            Op::DeleteRow { index } => {
                let (cells, list) = self.grid.delete_row(index)?;
                self.detached.push(cells);
                list
            }
            Op::AddColumn { header, values, index } => {
                self.grid.add_column(header, values, index)?
            }
            Op::DeleteColumn { index } => {
                let (cells, list) = self.grid.delete_column(index)?;
                self.detached.push(cells);
                list
            }
            Op::SetCellValue { row, col, value } => {
                self.grid.set_cell_value(row, col, value)?
            }
        };
        self.steps.push(list);
        Ok(self.steps.last().unwrap_or_else(|| unreachable!()))
    }

    pub fn steps(&self) -> &[TransitionList] {
        &self.steps
    }

    pub fn last(&self) -> Option<&TransitionList> {
        self.steps.last()
    }

    pub fn detached(&self) -> &[Vec<Cell>] {
        &self.detached
    }

    /// Check the grid's structural invariants: rectangular, indices in
    /// sync, layout dimensions matching, and column widths no narrower
    /// than a from-scratch solve (content edits may leave them wider).
    pub fn assert_consistent(&self) {
        let grid = &self.grid;
        let cols = grid.column_count();
        assert!(grid.row_count() >= 1, "grid lost its last row");
        assert!(cols >= 1, "grid lost its last column");
        if grid.has_header() {
            assert!(grid.data_row_count() >= 1, "headed grid lost all data rows");
        }

        for r in 0..grid.row_count() {
            let row = grid.row(r).unwrap();
            assert_eq!(row.len(), cols, "row {r} is not rectangular");
            for (c, cell) in row.iter().enumerate() {
                assert_eq!(
                    (cell.row(), cell.col()),
                    (r, c),
                    "cell index out of sync at ({r}, {c})"
                );
            }
        }

        let layout = grid.layout();
        assert_eq!(layout.row_count(), grid.row_count());
        assert_eq!(layout.column_count(), cols);

        let solved = Layout::solve(&grid.rows, grid.config(), grid.measurer.as_ref());
        for c in 0..cols {
            assert!(
                layout.width(c) >= solved.width(c),
                "column {c} narrower than its content"
            );
        }
        for r in 0..grid.row_count() {
            assert_eq!(layout.height(r), grid.config().cell_height);
        }
    }
}

/// Assert the descriptor ordering contract for one mutation's list:
/// Disappear, then Move, then Resize, then Appear, then ContentChange.
pub fn assert_ordered(list: &TransitionList) {
    fn rank(t: &Transition) -> u8 {
        match t {
            Transition::Disappear(_) => 0,
            Transition::Move(_) => 1,
            Transition::Resize(_) => 2,
            Transition::Appear(_) => 3,
            Transition::ContentChange(_) => 4,
        }
    }
    let ranks: Vec<u8> = list.iter().map(rank).collect();
    let mut sorted = ranks.clone();
    sorted.sort_unstable();
    assert_eq!(ranks, sorted, "descriptor kinds out of order: {list:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_records_steps_and_detached() {
        let mut harness = GridHarness::from_data(&[
            &["id", "name"],
            &["1", "alice"],
            &["2", "bob"],
        ]);

        harness
            .apply(Op::AddRow {
                values: vec!["3".to_string(), "carol".to_string()],
                index: None,
            })
            .unwrap();
        harness.apply(Op::DeleteRow { index: 1 }).unwrap();

        assert_eq!(harness.steps().len(), 2);
        assert_eq!(harness.detached().len(), 1);
        assert_eq!(harness.detached()[0][1].text(), "alice");
        harness.assert_consistent();
    }

    #[test]
    fn test_harness_rejects_invalid_op_without_recording() {
        let mut harness = GridHarness::from_data(&[&["id", "name"], &["1", "alice"]]);
        let err = harness.apply(Op::DeleteRow { index: 1 }).unwrap_err();
        assert_eq!(err, GridError::LastDataRow);
        assert!(harness.steps().is_empty());
        harness.assert_consistent();
    }

    #[test]
    fn test_scripted_sequence_stays_consistent() {
        let mut harness = GridHarness::from_data(&[
            &["id", "name"],
            &["1", "alice"],
            &["2", "bob"],
        ]);

        let script = vec![
            Op::AddColumn {
                header: Some("score".to_string()),
                values: vec!["85".to_string(), "92".to_string()],
                index: None,
            },
            Op::SetCellValue { row: 1, col: 2, value: "100".to_string() },
            Op::AddRow {
                values: vec!["3".to_string(), "carol".to_string(), "78".to_string()],
                index: Some(1),
            },
            Op::DeleteColumn { index: 0 },
            Op::DeleteRow { index: 2 },
        ];
        for op in script {
            harness.apply(op).unwrap();
            harness.assert_consistent();
        }

        assert_eq!(harness.grid().column_count(), 2);
        assert_eq!(harness.grid().row_count(), 3);
        for list in harness.steps() {
            assert_ordered(list);
        }
    }
}
