//! # textgrid
//!
//! Tabular data rendered as fixed-width character grids for the terminal.
//!
//! Columns carry the styling and width policy, cells measure themselves
//! before anything is drawn, and the table reconciles those measurements
//! into one rectangular grid with box-drawing borders. Trees flatten into
//! rows with a generated column of connector art.
//!
//! ## Quick Start
//!
//! ```rust
//! use textgrid::{CellValue, Column, OutputKind, Table};
//!
//! # fn main() -> Result<(), textgrid::Error> {
//! let mut table = Table::new();
//! table.append_columns([Column::standard("ID"), Column::standard("Name")])?;
//! table.append_row([CellValue::from(1), CellValue::from("amber")])?;
//! table.append_row([CellValue::from(2), CellValue::from("birch")])?;
//!
//! let grid = table.render(OutputKind::Console)?;
//! assert!(grid.starts_with("+----+-------+\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! - **Table**: columns plus rows, reconciled and rendered as one grid
//! - **Column**: width policy, padding, and the cell factory for its data
//! - **Cell**: the two-phase unit that first reports a size, then renders it
//! - **TableLayout**: border glyphs, visibility toggles, and a target width
//! - **TreeNode**: anything that can flatten into rows with connector art

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod cells;
pub mod style;
pub mod align;
pub mod cell;
pub mod column;
pub mod layout;
pub mod tree;
pub mod table;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::align::Alignment;
    pub use crate::cell::{Cell, CellValue, Overflow};
    pub use crate::column::{Column, ColumnStyle};
    pub use crate::error::Error;
    pub use crate::layout::{RuleKind, TableLayout};
    pub use crate::style::{Attributes, Color, OutputKind, Style};
    pub use crate::table::{Row, Table};
    pub use crate::tree::{TreeNode, TreePathStyle, forest_depth};
}

// Re-export key types at crate root
pub use align::Alignment;
pub use cell::{Cell, CellValue, Overflow};
pub use column::{Column, ColumnStyle};
pub use error::Error;
pub use layout::TableLayout;
pub use style::{Attributes, Color, OutputKind, Style};
pub use table::{Row, Table};
pub use tree::{TreeNode, TreePathStyle};
