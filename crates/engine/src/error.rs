use std::fmt;

/// All errors raised by the grid engine.
///
/// Every variant is a programmer/input error detected before any mutation is
/// applied: when a call returns `Err`, the grid is bit-identical to its state
/// before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A construction row's length differs from the first row's.
    RaggedRow { row: usize, expected: usize, actual: usize },
    /// An inserted row has the wrong number of values.
    RowLength { expected: usize, actual: usize },
    /// An inserted column has the wrong number of values.
    ColumnLength { expected: usize, actual: usize },
    /// A header value was supplied to a headerless grid, or omitted for a
    /// grid that has a header.
    HeaderMismatch { has_header: bool },
    /// Cell coordinates outside `[0, rows) x [0, cols)`.
    CellOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
    /// Row index outside the valid range for the operation.
    RowOutOfBounds { index: usize, rows: usize },
    /// Column index outside the valid range for the operation.
    ColumnOutOfBounds { index: usize, cols: usize },
    /// The header row is structural and cannot be deleted.
    HeaderRowDelete,
    /// Deleting this row would leave the grid with no data rows.
    LastDataRow,
    /// Deleting this column would leave the grid with no columns.
    LastColumn,
    /// Name-based lookup on a grid without a header.
    NoHeader,
    /// No header cell carries this name.
    UnknownColumn(String),
    /// Two header cells would carry the same name.
    DuplicateColumn(String),
    /// Invalid or inconsistent construction configuration.
    Config(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRow { row, expected, actual } => {
                write!(f, "row {row} has {actual} cell(s), expected {expected}")
            }
            Self::RowLength { expected, actual } => {
                write!(f, "row has {actual} value(s), expected {expected}")
            }
            Self::ColumnLength { expected, actual } => {
                write!(f, "column has {actual} value(s), expected {expected}")
            }
            Self::HeaderMismatch { has_header } => {
                if *has_header {
                    write!(f, "grid has a header; a header value is required")
                } else {
                    write!(f, "grid has no header; header value not allowed")
                }
            }
            Self::CellOutOfBounds { row, col, rows, cols } => {
                write!(f, "cell ({row}, {col}) out of bounds for {rows}x{cols} grid")
            }
            Self::RowOutOfBounds { index, rows } => {
                write!(f, "row index {index} out of bounds ({rows} row(s))")
            }
            Self::ColumnOutOfBounds { index, cols } => {
                write!(f, "column index {index} out of bounds ({cols} column(s))")
            }
            Self::HeaderRowDelete => write!(f, "the header row cannot be deleted"),
            Self::LastDataRow => write!(f, "cannot delete the last data row"),
            Self::LastColumn => write!(f, "cannot delete the last column"),
            Self::NoHeader => write!(f, "grid has no header; name lookup is undefined"),
            Self::UnknownColumn(name) => write!(f, "no column named '{name}'"),
            Self::DuplicateColumn(name) => write!(f, "duplicate column name '{name}'"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for GridError {}
