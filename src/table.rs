//! Table assembly: columns, rows, width reconciliation, and grid rendering.
//!
//! Rendering runs in two phases over the cell protocol. First every cell is
//! measured under its column's width limit and the answers are folded into
//! per-column widths and per-row heights; when the layout names a target
//! width, auto-width columns are then re-limited and measured again. Second,
//! every cell renders into its agreed rectangle and the lines are framed with
//! the layout's glyphs.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::cell::{Cell, CellValue};
use crate::column::Column;
use crate::error::Error;
use crate::layout::{RuleKind, TableLayout};
use crate::style::OutputKind;
use crate::tree::{self, TreeNode, TreePathStyle};

/// Widths at or below this never shrink or grow during width enforcement.
const ADJUSTABLE_MIN_WIDTH: usize = 4;

/// One table row, a cell per column in column order.
pub type Row = Vec<Cell>;

#[derive(Debug, Clone, Default)]
struct TableStats {
    column_widths: Vec<usize>,
    row_heights: Vec<usize>,
    header_height: usize,
}

/// A table of columns and rows, rendered as a character grid.
#[derive(Debug, Clone)]
pub struct Table {
    /// Frame glyphs, visibility toggles, and the target width.
    pub layout: TableLayout,

    columns: Vec<Column>,
    rows: Vec<Row>,
    stats: TableStats,
    col_map: HashMap<String, usize>,
}

impl Table {
    /// An empty table with the plain-ASCII layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_layout(TableLayout::default())
    }

    #[must_use]
    pub fn with_layout(layout: TableLayout) -> Self {
        Self {
            layout,
            columns: Vec::new(),
            rows: Vec::new(),
            stats: TableStats::default(),
            col_map: HashMap::new(),
        }
    }

    /// Adds a column. Column names are unique per table.
    pub fn append_column(&mut self, column: Column) -> Result<(), Error> {
        if self.col_map.contains_key(column.name()) {
            return Err(Error::ColumnAlreadyExists(column.name().to_string()));
        }
        self.col_map
            .insert(column.name().to_string(), self.columns.len());
        self.columns.push(column);
        Ok(())
    }

    /// Adds several columns, stopping at the first duplicate name.
    pub fn append_columns(
        &mut self,
        columns: impl IntoIterator<Item = Column>,
    ) -> Result<(), Error> {
        for column in columns {
            self.append_column(column)?;
        }
        Ok(())
    }

    /// Adds a row from values in column order. The value count must match
    /// the column count exactly.
    pub fn append_row(&mut self, values: impl IntoIterator<Item = CellValue>) -> Result<(), Error> {
        let values: Vec<CellValue> = values.into_iter().collect();
        if values.len() != self.columns.len() {
            return Err(Error::RowArityMismatch {
                expected: self.columns.len(),
                given: values.len(),
            });
        }
        let row = self
            .columns
            .iter()
            .zip(values)
            .map(|(col, v)| col.data_cell(v))
            .collect();
        self.rows.push(row);
        Ok(())
    }

    /// Adds a row from values keyed by column name. Every column must be
    /// present in the map; extra keys are ignored.
    pub fn append_row_map(&mut self, fields: &HashMap<String, CellValue>) -> Result<(), Error> {
        let row = self.fields_to_row(fields)?;
        self.rows.push(row);
        Ok(())
    }

    /// Flattens a forest into rows, installing a path column that draws the
    /// tree shape with the style's connector glyphs.
    ///
    /// The path column goes in front of any existing columns; appending
    /// another forest replaces it. Each node's [`TreeNode::fields`] must
    /// cover every other column. No rows are added if any node fails.
    pub fn append_trees(
        &mut self,
        style: TreePathStyle,
        nodes: &[&dyn TreeNode],
    ) -> Result<(), Error> {
        self.set_tree_path_column(&style);
        let depth = tree::forest_depth(nodes);
        let mut rows = Vec::new();
        for node in nodes {
            rows.extend(self.tree_rows(&style, *node, depth, "", false, true)?);
        }
        self.rows.append(&mut rows);
        Ok(())
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, Error> {
        let &i = self
            .col_map
            .get(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
        Ok(&self.columns[i])
    }

    /// Looks up a column by name for in-place adjustment.
    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column, Error> {
        let &i = self
            .col_map
            .get(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
        Ok(&mut self.columns[i])
    }

    /// The cell at `column`, `row`, if both indexes are in range.
    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(column)
    }

    /// Mutable access to the cell at `column`, `row`.
    pub fn cell_mut(&mut self, column: usize, row: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row)?.get_mut(column)
    }

    /// Drops all rows and measurements. Columns and layout stay.
    pub fn reset_data(&mut self) {
        self.rows.clear();
        self.stats = TableStats::default();
    }

    /// Renders the whole grid, newline-terminated lines included.
    ///
    /// When the layout names a target width, auto-width columns are
    /// re-limited to meet it first; those limits persist on the columns.
    pub fn render(&mut self, output: OutputKind) -> Result<String, Error> {
        self.render_inner(output)
            .map_err(|e| Error::RenderFailed(Box::new(e)))
    }

    fn render_inner(&mut self, output: OutputKind) -> Result<String, Error> {
        log::trace!(
            "rendering table: {} columns, {} rows",
            self.columns.len(),
            self.rows.len()
        );
        self.enforce_width(output)?;
        let mut out = self.render_header(output)?;
        out.push_str(&self.render_body(output)?);
        Ok(out)
    }

    fn fields_to_row(&self, fields: &HashMap<String, CellValue>) -> Result<Row, Error> {
        let mut row = Vec::with_capacity(self.columns.len());
        for col in &self.columns {
            let value = fields
                .get(col.name())
                .ok_or_else(|| Error::FieldMissing(col.name().to_string()))?;
            row.push(col.data_cell(value.clone()));
        }
        Ok(row)
    }

    /// Installs the path column at index 0: appended to an empty table,
    /// swapped in over a previous path column, prepended otherwise.
    fn set_tree_path_column(&mut self, style: &TreePathStyle) {
        let column = Column::tree_path(style.clone());
        if self.columns.is_empty() {
            self.columns.push(column);
        } else if self.columns[0].is_tree_path() {
            self.columns[0] = column;
        } else {
            self.columns.insert(0, column);
        }
        self.rebuild_col_map();
    }

    fn rebuild_col_map(&mut self) {
        self.col_map = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name().to_string(), i))
            .collect();
    }

    fn tree_rows(
        &self,
        style: &TreePathStyle,
        node: &dyn TreeNode,
        max_depth: usize,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> Result<Vec<Row>, Error> {
        let mut fields = node.fields();
        fields.insert(style.name.clone(), CellValue::default());
        let mut row = self.fields_to_row(&fields)?;

        let mut path = String::new();
        let mut child_prefix = prefix.to_string();
        if is_root {
            path.push_str(&style.root);
            child_prefix.push_str(&style.prefix_blank);
        } else {
            path.push_str(prefix);
            if is_last {
                path.push_str(&style.terminal);
                child_prefix.push_str(&style.prefix_blank);
            } else {
                path.push_str(&style.middle);
                child_prefix.push_str(&style.prefix_leveled);
            }
        }
        let children = node.children();
        if !children.is_empty() {
            path.push_str(&style.children);
        }
        // Connector glyphs are two characters per level, so the column is
        // sized in characters rather than display cells.
        let path_width = 1 + max_depth * 2;
        let pad = path_width.saturating_sub(path.chars().count());
        path.push_str(&style.pad_line.repeat(pad));
        row[0].assign(path);

        let mut out = vec![row];
        let last = children.len().saturating_sub(1);
        for (i, child) in children.into_iter().enumerate() {
            out.extend(self.tree_rows(style, child, max_depth, &child_prefix, i == last, false)?);
        }
        Ok(out)
    }

    /// Measures every cell, including hidden columns, folding the answers
    /// into column widths, row heights, and the header height.
    fn update_statistics(&mut self, output: OutputKind) -> Result<(), Error> {
        let mut stats = TableStats {
            column_widths: vec![0; self.columns.len()],
            row_heights: vec![0; self.rows.len()],
            header_height: 0,
        };
        for (i, col) in self.columns.iter().enumerate() {
            let (w, h) = col.header_cell().stats(col.width_limit, output)?;
            stats.header_height = stats.header_height.max(h);
            stats.column_widths[i] = stats.column_widths[i].max(w);
        }
        for (ri, row) in self.rows.iter().enumerate() {
            for (ci, cell) in row.iter().enumerate() {
                let (w, h) = cell.stats(self.columns[ci].width_limit, output)?;
                stats.row_heights[ri] = stats.row_heights[ri].max(h);
                stats.column_widths[ci] = stats.column_widths[ci].max(w);
            }
        }
        self.stats = stats;
        Ok(())
    }

    /// Re-limits auto-width columns until the rendered grid meets the
    /// layout's target width, then measures again under the new limits.
    fn enforce_width(&mut self, output: OutputKind) -> Result<(), Error> {
        self.update_statistics(output)?;

        let target = self.layout.width;
        if target == 0 {
            return Ok(());
        }

        let mut natural = 0;
        if self.layout.show_side_border {
            natural += 2;
        }
        let mut visible = 0;
        for (i, col) in self.columns.iter().enumerate() {
            if col.hidden {
                continue;
            }
            visible += 1;
            natural += self.stats.column_widths[i];
        }
        if self.layout.show_column_separator && visible > 0 {
            natural += visible - 1;
        }
        if natural == target {
            return Ok(());
        }

        // Candidates must be visible, under auto control, and wide enough
        // that shrinking leaves room for content.
        let adjustable: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, col)| {
                !col.hidden && col.auto_width && self.stats.column_widths[*i] > ADJUSTABLE_MIN_WIDTH
            })
            .map(|(i, _)| i)
            .collect();
        if adjustable.is_empty() {
            return Err(Error::EnforcingWidth(Box::new(Error::NoAdjustableColumn)));
        }
        log::debug!(
            "enforcing table width {target}: natural {natural}, {} adjustable of {} columns",
            adjustable.len(),
            self.columns.len()
        );

        if natural < target {
            let extra = target - natural;
            let share = extra / adjustable.len();
            let remainder = extra % adjustable.len();
            for (pos, &ci) in adjustable.iter().enumerate() {
                let mut w = self.stats.column_widths[ci] + share;
                if pos < remainder {
                    w += 1;
                }
                self.columns[ci].set_width(w, false);
            }
        } else {
            let adjustable_total: usize = adjustable
                .iter()
                .map(|&ci| self.stats.column_widths[ci])
                .sum();
            let fixed = natural - adjustable_total;
            if fixed + ADJUSTABLE_MIN_WIDTH * adjustable.len() > target {
                return Err(Error::WidthNotSatisfiable { target });
            }
            let budget = target - fixed;
            let share = budget / adjustable.len();
            let remainder = budget % adjustable.len();
            for (pos, &ci) in adjustable.iter().enumerate() {
                let mut w = share;
                if pos < remainder {
                    w += 1;
                }
                self.columns[ci].set_width(w, false);
            }
        }

        // Limits changed, so the widths and heights must be measured again.
        self.update_statistics(output)
    }

    fn render_header(&self, output: OutputKind) -> Result<String, Error> {
        let mut out = self.rule(RuleKind::HeaderTop);
        if self.layout.show_header {
            let header: Row = self.columns.iter().map(Column::header_cell).collect();
            out.push_str(&self.render_row(&header, self.stats.header_height, output)?);
        }
        out.push_str(&self.rule(RuleKind::HeaderBottom));
        Ok(out)
    }

    fn render_body(&self, output: OutputKind) -> Result<String, Error> {
        let mut out = self.rule(RuleKind::BodyTop);
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&self.render_row(row, self.stats.row_heights[i], output)?);
            if i != self.rows.len() - 1 {
                out.push_str(&self.rule(RuleKind::RowSeparator));
            }
        }
        out.push_str(&self.rule(RuleKind::BodyBottom));
        Ok(out)
    }

    fn render_row(&self, cells: &[Cell], height: usize, output: OutputKind) -> Result<String, Error> {
        let mut rendered: Vec<Vec<String>> = Vec::new();
        for (i, col) in self.columns.iter().enumerate() {
            if col.hidden {
                continue;
            }
            let cell = cells.get(i).ok_or(Error::RowArityMismatch {
                expected: self.columns.len(),
                given: cells.len(),
            })?;
            rendered.push(cell.render(self.stats.column_widths[i], height, output)?);
        }

        let separator = if self.layout.show_column_separator {
            self.layout.column_separator.to_string()
        } else {
            String::new()
        };
        let (left, right) = if self.layout.show_side_border {
            (
                self.layout.edge_left.to_string(),
                self.layout.edge_right.to_string(),
            )
        } else {
            (String::new(), String::new())
        };

        let mut out = String::new();
        for line in 0..height {
            let items: SmallVec<[&str; 8]> =
                rendered.iter().map(|cell| cell[line].as_str()).collect();
            out.push_str(&left);
            out.push_str(&items.join(&separator));
            out.push_str(&right);
            out.push('\n');
        }
        Ok(out)
    }

    fn rule(&self, kind: RuleKind) -> String {
        let widths: SmallVec<[usize; 8]> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, col)| !col.hidden)
            .map(|(i, _)| self.stats.column_widths[i])
            .collect();
        self.layout.rule_line(kind, &widths)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
