//! Grid-level styling calls.
//!
//! Styling has four granularities, lowest to highest precedence: the
//! renderer default, column-wide calls, header-wide calls, and per-cell
//! setters (`Cell::set_font_color` and friends via `Grid::cell_mut`).
//!
//! A broader-granularity call is a bulk write: it assigns the property to
//! every cell in scope *at call time*. Cells added later by a mutation do
//! not inherit it; callers re-apply the call after `add_row`/`add_column`
//! when uniformity is desired. This is a contract, not an oversight: the
//! engine stores no styling rules, only per-cell state.
//!
//! Styling never touches geometry and emits no transitions.

use gridtween_core::color::Rgba;

use crate::error::GridError;
use crate::grid::Grid;

impl Grid {
    pub fn set_header_background_color(
        &mut self,
        color: Rgba,
        opacity: f64,
    ) -> Result<(), GridError> {
        if !self.has_header {
            return Err(GridError::NoHeader);
        }
        for cell in &mut self.rows[0] {
            cell.set_background_color(color, opacity);
        }
        Ok(())
    }

    pub fn set_header_font_color(&mut self, color: Rgba) -> Result<(), GridError> {
        if !self.has_header {
            return Err(GridError::NoHeader);
        }
        for cell in &mut self.rows[0] {
            cell.set_font_color(color);
        }
        Ok(())
    }

    pub fn set_column_font_color(&mut self, col: usize, color: Rgba) -> Result<(), GridError> {
        if col >= self.column_count() {
            return Err(GridError::ColumnOutOfBounds {
                index: col,
                cols: self.column_count(),
            });
        }
        for row in &mut self.rows {
            row[col].set_font_color(color);
        }
        Ok(())
    }

    pub fn set_column_border_color(&mut self, col: usize, color: Rgba) -> Result<(), GridError> {
        if col >= self.column_count() {
            return Err(GridError::ColumnOutOfBounds {
                index: col,
                cols: self.column_count(),
            });
        }
        for row in &mut self.rows {
            row[col].set_border_color(color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Fill;
    use crate::config::GridConfig;

    fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn sample() -> Grid {
        Grid::from_data(
            strings(&[
                &["product", "price", "stock"],
                &["apple", "1.50", "150"],
                &["milk", "2.00", "50"],
            ]),
            GridConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_header_styling_covers_header_only() {
        let mut grid = sample();
        grid.set_header_background_color(Rgba::BLUE, 0.3).unwrap();
        grid.set_header_font_color(Rgba::WHITE).unwrap();

        for cell in grid.header().unwrap() {
            assert_eq!(
                cell.style.background,
                Some(Fill { color: Rgba::BLUE, opacity: 0.3 })
            );
            assert_eq!(cell.style.font_color, Some(Rgba::WHITE));
        }
        for cell in grid.row(1).unwrap() {
            assert!(cell.style.background.is_none());
            assert!(cell.style.font_color.is_none());
        }
    }

    #[test]
    fn test_header_styling_requires_header() {
        let mut grid =
            Grid::from_rows(strings(&[&["1", "2"]]), GridConfig::default()).unwrap();
        assert_eq!(
            grid.set_header_font_color(Rgba::WHITE).unwrap_err(),
            GridError::NoHeader
        );
        assert_eq!(
            grid.set_header_background_color(Rgba::BLUE, 0.5).unwrap_err(),
            GridError::NoHeader
        );
    }

    #[test]
    fn test_column_styling_covers_whole_column() {
        let mut grid = sample();
        grid.set_column_font_color(1, Rgba::GREEN).unwrap();
        grid.set_column_border_color(0, Rgba::GREY).unwrap();

        for cell in grid.column(1).unwrap() {
            assert_eq!(cell.style.font_color, Some(Rgba::GREEN));
        }
        for cell in grid.column(0).unwrap() {
            assert_eq!(cell.style.border_color, Some(Rgba::GREY));
            assert!(cell.style.font_color.is_none());
        }
        assert!(grid.set_column_font_color(9, Rgba::GREEN).is_err());
    }

    #[test]
    fn test_per_cell_styling_overrides_bulk_write() {
        let mut grid = sample();
        grid.set_column_font_color(2, Rgba::GREEN).unwrap();
        grid.cell_mut(2, 2).unwrap().set_font_color(Rgba::RED);

        assert_eq!(grid.cell(1, 2).unwrap().style.font_color, Some(Rgba::GREEN));
        assert_eq!(grid.cell(2, 2).unwrap().style.font_color, Some(Rgba::RED));
    }

    #[test]
    fn test_cells_added_after_bulk_write_do_not_inherit() {
        let mut grid = sample();
        grid.set_column_font_color(0, Rgba::BLUE).unwrap();
        grid.add_row(
            vec!["bread".to_string(), "3.00".to_string(), "20".to_string()],
            None,
        )
        .unwrap();

        // Bulk writes apply at call time only.
        assert_eq!(grid.cell(1, 0).unwrap().style.font_color, Some(Rgba::BLUE));
        assert!(grid.cell(3, 0).unwrap().style.font_color.is_none());
    }

    #[test]
    fn test_styling_survives_structural_shift() {
        let mut grid = sample();
        grid.cell_mut(2, 1).unwrap().set_background_color(Rgba::RED, 0.2);
        grid.delete_row(1).unwrap();

        // The styled cell moved from row 2 to row 1 with its style intact.
        assert_eq!(grid.cell(1, 1).unwrap().text(), "2.00");
        assert_eq!(
            grid.cell(1, 1).unwrap().style.background,
            Some(Fill { color: Rgba::RED, opacity: 0.2 })
        );
    }
}
