//! Tree flattening support: node sources, connector glyph styles, and depth
//! measurement.
//!
//! A forest of [`TreeNode`]s becomes ordinary table rows plus one extra
//! column of connector art drawn from a [`TreePathStyle`]. The glyph strings
//! all occupy two characters per level (the pad glyphs one), so a path column
//! sized from the forest depth lines up across every row.

use std::collections::HashMap;

use crate::cell::CellValue;
use crate::style::Style;

/// A node that can be flattened into table rows.
///
/// `fields` supplies one value per visible column, keyed by column name.
/// Every column of the table must be present in the map; the path column is
/// filled in by the conversion itself.
pub trait TreeNode {
    fn fields(&self) -> HashMap<String, CellValue>;
    fn children(&self) -> Vec<&dyn TreeNode>;
}

/// Depth of the deepest tree in the forest. A lone leaf counts 1, an empty
/// forest 0.
#[must_use]
pub fn forest_depth(nodes: &[&dyn TreeNode]) -> usize {
    nodes.iter().map(|n| node_depth(*n)).max().unwrap_or(0)
}

fn node_depth(node: &dyn TreeNode) -> usize {
    1 + node
        .children()
        .into_iter()
        .map(node_depth)
        .max()
        .unwrap_or(0)
}

/// Connector glyphs for the generated path column.
///
/// Each glyph string is two characters except the pad glyphs, which are one.
/// `name` doubles as the generated column's header text and its lookup key.
#[derive(Debug, Clone)]
pub struct TreePathStyle {
    /// Header text and column name of the generated path column.
    pub name: String,
    /// Marks a root node.
    pub root: String,
    /// Marks a child that still has siblings below it.
    pub middle: String,
    /// Marks the last child of its parent.
    pub terminal: String,
    /// Appended to a node's connector when the node has children.
    pub children: String,
    /// Continues a rail past deeper levels while siblings remain below.
    pub prefix_leveled: String,
    /// Blank indent under a closed branch.
    pub prefix_blank: String,
    /// Fills the path out to the column's full width.
    pub pad_line: String,
    /// Blank counterpart of `pad_line` on continuation lines.
    pub pad_blank: String,

    pub(crate) header: Style,
    pub(crate) body: Style,
}

impl TreePathStyle {
    /// Plain-ASCII connectors.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            name: "Path".to_string(),
            root: ">-".to_string(),
            middle: "+-".to_string(),
            terminal: "\\-".to_string(),
            children: "+-".to_string(),
            prefix_leveled: "| ".to_string(),
            prefix_blank: "  ".to_string(),
            pad_line: "-".to_string(),
            pad_blank: " ".to_string(),
            header: Style::new(),
            body: Style::new(),
        }
    }

    /// Unicode box-drawing connectors.
    #[must_use]
    pub fn light() -> Self {
        Self {
            name: "Path".to_string(),
            root: "□─".to_string(),
            middle: "├─".to_string(),
            terminal: "└─".to_string(),
            children: "┬─".to_string(),
            prefix_leveled: "│ ".to_string(),
            prefix_blank: "  ".to_string(),
            pad_line: "─".to_string(),
            pad_blank: " ".to_string(),
            header: Style::new(),
            body: Style::new(),
        }
    }

    /// Text style for the path column's header cell.
    #[must_use]
    pub fn header(mut self, style: Style) -> Self {
        self.header = style;
        self
    }

    /// Text style for the path column's body cells.
    #[must_use]
    pub fn body(mut self, style: Style) -> Self {
        self.body = style;
        self
    }

    /// Rewrites a path into its continuation line, the form drawn on every
    /// line of a row after the first. Branch points stay open as vertical
    /// rails and finished connectors turn blank.
    #[must_use]
    pub fn continuation(&self, path: &str) -> String {
        path.replace(&self.children, &self.prefix_leveled)
            .replace(&self.middle, &self.prefix_leveled)
            .replace(&self.terminal, &self.prefix_blank)
            .replace(&self.root, &self.prefix_blank)
            .replace(&self.pad_line, &self.pad_blank)
    }
}

impl Default for TreePathStyle {
    fn default() -> Self {
        Self::ascii()
    }
}
