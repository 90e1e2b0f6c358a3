//! Error types for table construction and rendering.

use std::fmt;

/// Error type covering column setup, row ingestion and rendering.
#[derive(Debug)]
pub enum Error {
    /// A column with the same name is already attached to the table.
    ColumnAlreadyExists(String),
    /// No column with the given name is attached to the table.
    ColumnNotFound(String),
    /// A positional row does not match the number of columns.
    RowArityMismatch {
        /// Number of columns the table has.
        expected: usize,
        /// Number of values the caller supplied.
        given: usize,
    },
    /// A map-based row is missing a value for a column.
    FieldMissing(String),
    /// The width budget cannot hold the cell's content under its overflow policy.
    InsufficientColumnWidth(String),
    /// The height budget cannot hold the cell's laid-out lines.
    InsufficientColumnHeight,
    /// A cell was asked to render at a width of zero or below its paddings.
    InvalidCellWidth,
    /// A cell was asked to render at a height of zero.
    InvalidCellHeight,
    /// Width enforcement found no column it is allowed to resize.
    NoAdjustableColumn,
    /// Width enforcement failed; the cause is attached.
    EnforcingWidth(Box<Error>),
    /// The target width cannot be met even at minimum column widths.
    WidthNotSatisfiable {
        /// The requested total table width.
        target: usize,
    },
    /// Rendering failed; the cause is attached.
    RenderFailed(Box<Error>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnAlreadyExists(name) => {
                write!(f, "column '{name}' already exists")
            }
            Self::ColumnNotFound(name) => write!(f, "column '{name}' not found"),
            Self::RowArityMismatch { expected, given } => {
                write!(f, "row has {given} values but the table has {expected} columns")
            }
            Self::FieldMissing(name) => {
                write!(f, "row is missing a value for column '{name}'")
            }
            Self::InsufficientColumnWidth(reason) => {
                write!(f, "insufficient column width: {reason}")
            }
            Self::InsufficientColumnHeight => write!(f, "insufficient column height"),
            Self::InvalidCellWidth => write!(f, "invalid cell width"),
            Self::InvalidCellHeight => write!(f, "invalid cell height"),
            Self::NoAdjustableColumn => {
                write!(f, "no column with automatic width control is adjustable")
            }
            Self::EnforcingWidth(source) => {
                write!(f, "failed to enforce table width: {source}")
            }
            Self::WidthNotSatisfiable { target } => {
                write!(f, "table cannot shrink to width {target}")
            }
            Self::RenderFailed(source) => write!(f, "failed to render table: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EnforcingWidth(source) | Self::RenderFailed(source) => Some(source),
            _ => None,
        }
    }
}
