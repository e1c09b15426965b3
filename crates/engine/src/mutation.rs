//! Structural and content mutations.
//!
//! Every operation validates first and touches the grid only after all
//! checks pass, so a returned error leaves the grid exactly as it was.
//! After mutating, the engine re-derives the layout and diffs old geometry
//! against new to produce the ordered transition list.
//!
//! Move emission rule: a surviving cell gets a `Move` exactly when its
//! column's left edge or its row's top edge changed. A width change of the
//! cell's own column is carried by that column's `Resize` descriptor
//! instead, which keeps `set_cell_value` down to one `Resize` plus `Move`s
//! for the columns after it.

use gridtween_core::geometry::Vec2;

use crate::cell::Cell;
use crate::error::GridError;
use crate::grid::Grid;
use crate::layout::Layout;
use crate::transition::{
    AppearTransition, CellRef, ContentChangeTransition, DisappearTransition, MoveTransition,
    ResizeTransition, Transition, TransitionList,
};

/// Geometry frozen before a mutation, for diffing.
struct Snapshot {
    origin: Vec2,
    layout: Layout,
}

impl Snapshot {
    fn of(grid: &Grid) -> Self {
        Self {
            origin: grid.origin,
            layout: grid.layout.clone(),
        }
    }

    fn center(&self, row: usize, col: usize) -> Vec2 {
        self.layout.center(self.origin, row, col)
    }
}

impl Grid {
    /// Insert a row of cells at `index` (default: end), shifting later rows
    /// down. On a headed grid, `index` is absolute and must be at least 1.
    ///
    /// Emits `Move` for cells whose row shifted down (and for cells pushed
    /// right if the new content widens a column), `Resize` for widened
    /// columns, then `Appear` for the new row's cells.
    pub fn add_row(
        &mut self,
        values: Vec<String>,
        index: Option<usize>,
    ) -> Result<TransitionList, GridError> {
        let cols = self.column_count();
        if values.len() != cols {
            return Err(GridError::RowLength {
                expected: cols,
                actual: values.len(),
            });
        }
        let at = index.unwrap_or(self.row_count());
        let min = usize::from(self.has_header);
        if at < min || at > self.row_count() {
            return Err(GridError::RowOutOfBounds {
                index: at,
                rows: self.row_count(),
            });
        }

        let old = Snapshot::of(self);
        let cells: Vec<Cell> = values
            .into_iter()
            .enumerate()
            .map(|(c, text)| Cell::new(text, at, c))
            .collect();
        self.rows.insert(at, cells);
        self.reindex();
        self.relayout();

        let mut list = TransitionList::new();
        self.collect_moves(&old, &mut list, |r, c| {
            if r == at {
                None
            } else if r > at {
                Some((r - 1, c))
            } else {
                Some((r, c))
            }
        });
        self.collect_resizes(&old, &mut list, Some);
        self.collect_appears(&mut list, self.rows[at].iter());
        Ok(list)
    }

    /// Remove the row at `index`, returning its cells to the caller.
    ///
    /// The header row is not deletable and at least one data row must
    /// remain. Emits `Disappear` for the detached cells, `Move` for rows
    /// shifted up (and columns pulled left by shrinking), then `Resize` for
    /// every column whose width shrank because the deleted row held its
    /// widest content.
    pub fn delete_row(&mut self, index: usize) -> Result<(Vec<Cell>, TransitionList), GridError> {
        if index >= self.row_count() {
            return Err(GridError::RowOutOfBounds {
                index,
                rows: self.row_count(),
            });
        }
        if self.has_header && index == 0 {
            return Err(GridError::HeaderRowDelete);
        }
        if self.data_row_count() <= 1 {
            return Err(GridError::LastDataRow);
        }

        let old = Snapshot::of(self);
        let detached = self.rows.remove(index);
        self.reindex();
        self.relayout();

        let mut list = TransitionList::new();
        for cell in &detached {
            list.push(Transition::Disappear(DisappearTransition {
                cell: CellRef::new(cell.row(), cell.col()),
                center: old.center(cell.row(), cell.col()),
            }));
        }
        self.collect_moves(&old, &mut list, |r, c| {
            if r >= index { Some((r + 1, c)) } else { Some((r, c)) }
        });
        self.collect_resizes(&old, &mut list, Some);
        Ok((detached, list))
    }

    /// Insert a column at `index` (default: end), shifting later columns
    /// right. `header` must be given exactly when the grid has a header;
    /// `values` covers the data rows top-down.
    ///
    /// Emits `Move` for every existing cell in columns at or after `index`,
    /// then `Appear` for the new column's cells.
    pub fn add_column(
        &mut self,
        header: Option<String>,
        values: Vec<String>,
        index: Option<usize>,
    ) -> Result<TransitionList, GridError> {
        if header.is_some() != self.has_header {
            return Err(GridError::HeaderMismatch { has_header: self.has_header });
        }
        let expected = self.data_row_count();
        if values.len() != expected {
            return Err(GridError::ColumnLength {
                expected,
                actual: values.len(),
            });
        }
        if let Some(name) = &header {
            if self.column_index(name).is_ok() {
                return Err(GridError::DuplicateColumn(name.clone()));
            }
        }
        let at = index.unwrap_or(self.column_count());
        if at > self.column_count() {
            return Err(GridError::ColumnOutOfBounds {
                index: at,
                cols: self.column_count(),
            });
        }

        let old = Snapshot::of(self);
        let texts = header.into_iter().chain(values);
        for (row, text) in self.rows.iter_mut().zip(texts) {
            row.insert(at, Cell::new(text, 0, at));
        }
        self.reindex();
        self.relayout();

        let mut list = TransitionList::new();
        self.collect_moves(&old, &mut list, |r, c| {
            if c == at {
                None
            } else if c > at {
                Some((r, c - 1))
            } else {
                Some((r, c))
            }
        });
        self.collect_resizes(&old, &mut list, |c| {
            if c == at {
                None
            } else if c > at {
                Some(c - 1)
            } else {
                Some(c)
            }
        });
        let new_cells: Vec<&Cell> = self.rows.iter().map(|row| &row[at]).collect();
        self.collect_appears(&mut list, new_cells.into_iter());
        Ok(list)
    }

    /// Remove the column at `index`, returning its cells top-down. At least
    /// one column must remain. Row heights are not content-driven, so only
    /// horizontal geometry changes.
    ///
    /// Emits `Disappear` for the detached cells, then `Move` for columns
    /// shifted left.
    pub fn delete_column(
        &mut self,
        index: usize,
    ) -> Result<(Vec<Cell>, TransitionList), GridError> {
        if index >= self.column_count() {
            return Err(GridError::ColumnOutOfBounds {
                index,
                cols: self.column_count(),
            });
        }
        if self.column_count() <= 1 {
            return Err(GridError::LastColumn);
        }

        let old = Snapshot::of(self);
        let detached: Vec<Cell> = self.rows.iter_mut().map(|row| row.remove(index)).collect();
        self.reindex();
        self.relayout();

        let mut list = TransitionList::new();
        for cell in &detached {
            list.push(Transition::Disappear(DisappearTransition {
                cell: CellRef::new(cell.row(), cell.col()),
                center: old.center(cell.row(), cell.col()),
            }));
        }
        self.collect_moves(&old, &mut list, |r, c| {
            if c >= index { Some((r, c + 1)) } else { Some((r, c)) }
        });
        Ok((detached, list))
    }

    /// Replace one cell's text. The owning column widens when the new
    /// content measures wider than everything else in it; it never narrows
    /// on a content edit.
    ///
    /// Widening emits `Move` for every cell in later columns, one `Resize`
    /// for the column, then a `ContentChange`; otherwise the single
    /// `ContentChange` is the whole list.
    pub fn set_cell_value(
        &mut self,
        row: usize,
        col: usize,
        text: impl Into<String>,
    ) -> Result<TransitionList, GridError> {
        self.check_cell(row, col)?;
        let text = text.into();
        if self.has_header && row == 0 && text != self.rows[0][col].text() {
            // Renaming a header cell must keep names unique.
            if self.column_index(&text).is_ok() {
                return Err(GridError::DuplicateColumn(text));
            }
        }

        let old = Snapshot::of(self);
        let from = self.rows[row][col].text().to_string();
        self.rows[row][col].set_text(text.clone());

        let measured =
            Layout::column_width(&self.rows, col, &self.config, self.measurer.as_ref());
        if measured > self.layout.width(col) {
            self.layout.set_width(col, measured);
        }

        let mut list = TransitionList::new();
        self.collect_moves(&old, &mut list, |r, c| Some((r, c)));
        self.collect_resizes(&old, &mut list, Some);
        list.push(Transition::ContentChange(ContentChangeTransition {
            cell: CellRef::new(row, col),
            from,
            to: text,
        }));
        Ok(list)
    }

    // =========================================================================
    // Geometry diffing
    // =========================================================================

    /// Push a `Move` for every surviving cell whose column left edge or row
    /// top edge changed. `old_index` maps a new position to its old one, or
    /// `None` for cells that did not exist before the edit.
    fn collect_moves<F>(&self, old: &Snapshot, list: &mut TransitionList, old_index: F)
    where
        F: Fn(usize, usize) -> Option<(usize, usize)>,
    {
        for r in 0..self.row_count() {
            for c in 0..self.column_count() {
                let Some((or, oc)) = old_index(r, c) else { continue };
                let edge_changed = old.layout.col_left(oc) != self.layout.col_left(c)
                    || old.layout.row_top(or) != self.layout.row_top(r);
                if edge_changed {
                    list.push(Transition::Move(MoveTransition {
                        cell: CellRef::new(r, c),
                        from: old.center(or, oc),
                        to: self.layout.center(self.origin, r, c),
                    }));
                }
            }
        }
    }

    /// Push a `Resize` for every surviving column whose width changed.
    /// `old_col` maps a new column index to its old one, or `None` for a
    /// freshly inserted column (its width is part of its `Appear`s).
    fn collect_resizes<F>(&self, old: &Snapshot, list: &mut TransitionList, old_col: F)
    where
        F: Fn(usize) -> Option<usize>,
    {
        for c in 0..self.column_count() {
            let Some(oc) = old_col(c) else { continue };
            let from_width = old.layout.width(oc);
            let to_width = self.layout.width(c);
            if from_width != to_width {
                list.push(Transition::Resize(ResizeTransition {
                    col: c,
                    from_width,
                    to_width,
                    center_x: self.origin.x + self.layout.col_left(c) + to_width / 2.0,
                }));
            }
        }
    }

    /// Push an `Appear` at final geometry for each new cell, in iteration
    /// order (row-major for rows, top-down for columns).
    fn collect_appears<'a, I>(&self, list: &mut TransitionList, cells: I)
    where
        I: Iterator<Item = &'a Cell>,
    {
        for cell in cells {
            let (r, c) = (cell.row(), cell.col());
            list.push(Transition::Appear(AppearTransition {
                cell: CellRef::new(r, c),
                text: cell.text().to_string(),
                center: self.layout.center(self.origin, r, c),
                width: self.layout.width(c),
                height: self.layout.height(r),
            }));
        }
    }
}
