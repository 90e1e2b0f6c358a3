//! Grid cells and the two-phase measure/render protocol.
//!
//! Every cell answers two questions, always in the same order. [`Cell::stats`]
//! reports the width and height the cell needs under an optional width limit,
//! and [`Cell::render`] produces exactly `height` lines of exactly `width`
//! display cells each. The table asks stats of every cell first, reconciles
//! the answers into final column widths and row heights, then renders each
//! cell into that agreed rectangle.
//!
//! Content cells wrap, truncate, or reject text that overflows the width
//! budget. Tree path cells hold connector art and render their own
//! continuation lines instead of word-wrapping.

use std::fmt;

use crate::align::{Alignment, align};
use crate::cells::{cell_len, connector_len, split_by_width, truncate_to_width};
use crate::error::Error;
use crate::style::{OutputKind, Style};
use crate::tree::TreePathStyle;

/// Narrowest content area a width-limited cell accepts, in display cells.
const MIN_CONTENT_WIDTH: usize = 2;

/// Marker appended to a truncated line.
const UNFINISHED_TAILER: &str = " ~";
const UNFINISHED_TAILER_WIDTH: usize = 2;

/// A value ready to be stored in a cell, converted from common scalar types.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellValue(String);

impl CellValue {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<char> for CellValue {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self(value.to_string())
    }
}

macro_rules! cell_value_from_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )+
    };
}

cell_value_from_display!(i8, i16, i32, i64, i128, isize);
cell_value_from_display!(u8, u16, u32, u64, u128, usize);
cell_value_from_display!(f32, f64);

/// What a content cell does with text wider than its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Break the text into as many lines as it takes.
    #[default]
    Wordwrap,
    /// Keep one line per text segment, cut it short, and mark the cut.
    Truncate,
    /// Refuse to render at all.
    Reject,
}

/// One cell of the grid: normalized text plus the renderer that shapes it.
#[derive(Debug, Clone)]
pub struct Cell {
    content: String,
    left_padding: String,
    right_padding: String,
    style: Style,
    renderer: CellRenderer,
}

#[derive(Debug, Clone)]
pub(crate) enum CellRenderer {
    Content(ContentRenderer),
    TreePath(TreePathRenderer),
}

impl Cell {
    pub(crate) fn new(
        value: CellValue,
        left_padding: &str,
        right_padding: &str,
        style: Style,
        renderer: CellRenderer,
    ) -> Self {
        let mut cell = Self {
            content: String::new(),
            left_padding: left_padding.to_string(),
            right_padding: right_padding.to_string(),
            style,
            renderer,
        };
        cell.assign(value);
        cell
    }

    /// The cell's stored text after normalization.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Stores a new value. Tabs become four spaces and Windows line endings
    /// collapse to bare newlines, so later width math sees one glyph class
    /// per control sequence.
    pub fn assign(&mut self, value: impl Into<CellValue>) {
        let raw = value.into().into_string();
        self.content = raw.replace('\t', "    ").replace("\r\n", "\n");
    }

    /// Replaces both side paddings.
    pub fn set_padding(&mut self, left: &str, right: &str) {
        self.left_padding = left.to_string();
        self.right_padding = right.to_string();
    }

    /// Replaces the text style applied to every rendered line.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Measures the cell. With `width_limit == 0` the cell reports its
    /// natural width, the longest produced line plus side paddings. With a
    /// nonzero limit the reported width is the limit itself and the height
    /// grows to whatever the overflow policy needs.
    pub fn stats(&self, width_limit: usize, output: OutputKind) -> Result<(usize, usize), Error> {
        match &self.renderer {
            CellRenderer::Content(r) => r.stats(self, width_limit, output),
            CellRenderer::TreePath(r) => Ok(r.stats(self, output)),
        }
    }

    /// Renders the cell into a `width` by `height` rectangle, one string per
    /// line. Heights beyond the content are filled with padding lines.
    pub fn render(
        &self,
        width: usize,
        height: usize,
        output: OutputKind,
    ) -> Result<Vec<String>, Error> {
        match &self.renderer {
            CellRenderer::Content(r) => r.render(self, width, height, output),
            CellRenderer::TreePath(r) => Ok(r.render(self, height, output)),
        }
    }

    fn side_padding_width(&self) -> usize {
        cell_len(&self.left_padding) + cell_len(&self.right_padding)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Renderer for ordinary text cells.
#[derive(Debug, Clone)]
pub(crate) struct ContentRenderer {
    padding: char,
    align: Alignment,
    overflow: Overflow,
    escape_line_feed: bool,
}

impl ContentRenderer {
    /// Wordwrap treats newlines as hard breaks, so the escape flag is
    /// meaningless there and gets dropped up front.
    pub(crate) fn new(
        padding: char,
        align: Alignment,
        overflow: Overflow,
        escape_line_feed: bool,
    ) -> Self {
        Self {
            padding,
            align,
            overflow,
            escape_line_feed: escape_line_feed && overflow != Overflow::Wordwrap,
        }
    }

    fn stats(
        &self,
        cell: &Cell,
        width_limit: usize,
        output: OutputKind,
    ) -> Result<(usize, usize), Error> {
        let lines = self.split_into_lines(cell, width_limit, output)?;
        let height = lines.len();
        if width_limit != 0 {
            return Ok((width_limit, height));
        }
        let longest = lines.iter().map(|l| cell_len(l)).max().unwrap_or(0);
        let width = longest + cell.side_padding_width() + cell.style.overhead(output);
        Ok((width, height))
    }

    fn render(
        &self,
        cell: &Cell,
        width: usize,
        height: usize,
        output: OutputKind,
    ) -> Result<Vec<String>, Error> {
        let lines = self.split_into_lines(cell, width, output)?;
        let used = cell.side_padding_width() + cell.style.overhead(output);
        let Some(content_width) = width.checked_sub(used) else {
            return Err(Error::InvalidCellWidth);
        };
        if width == 0 {
            return Err(Error::InvalidCellWidth);
        }
        if height == 0 {
            return Err(Error::InvalidCellHeight);
        }
        if lines.len() > height {
            return Err(Error::InsufficientColumnHeight);
        }

        let mut out = Vec::with_capacity(height);
        for i in 0..height {
            let line = lines.get(i).map_or("", String::as_str);
            let padded = format!(
                "{}{}{}",
                cell.left_padding,
                align(line, content_width, self.padding, self.align),
                cell.right_padding
            );
            out.push(cell.style.apply(&padded, output));
        }
        Ok(out)
    }

    /// Breaks the content into renderable lines under the overflow policy.
    ///
    /// Embedded newlines always split first. The remaining budget per line is
    /// the width limit minus side paddings and style overhead; a limit of 0
    /// means unconstrained.
    fn split_into_lines(
        &self,
        cell: &Cell,
        width_limit: usize,
        output: OutputKind,
    ) -> Result<Vec<String>, Error> {
        let content = if self.escape_line_feed {
            cell.content.replace('\n', "\\n")
        } else {
            cell.content.clone()
        };
        let content_width = cell_len(&content);

        let budget = if width_limit == 0 {
            0
        } else {
            let used = cell.side_padding_width() + cell.style.overhead(output);
            match width_limit.checked_sub(used) {
                Some(b) if b >= MIN_CONTENT_WIDTH => b,
                _ => {
                    return Err(Error::InsufficientColumnWidth(
                        "no room left after padding".to_string(),
                    ));
                }
            }
        };

        let mut out = Vec::new();
        for segment in content.split('\n') {
            match self.overflow {
                Overflow::Wordwrap => out.extend(split_by_width(segment, budget)),
                Overflow::Truncate => {
                    if budget != 0 && content_width > budget {
                        let keep = budget - UNFINISHED_TAILER_WIDTH;
                        let (head, head_width) = truncate_to_width(segment, keep);
                        let mut line = head.to_string();
                        for _ in 0..keep - head_width {
                            line.push(self.padding);
                        }
                        line.push_str(UNFINISHED_TAILER);
                        out.push(line);
                    } else {
                        out.push(segment.to_string());
                    }
                }
                Overflow::Reject => {
                    if budget != 0 && content_width > budget {
                        return Err(Error::InsufficientColumnWidth(
                            "content overflows and the overflow policy is reject".to_string(),
                        ));
                    }
                    out.push(segment.to_string());
                }
            }
        }
        Ok(out)
    }
}

/// Renderer for the connector-art column of converted trees.
///
/// The first rendered line is the stored path itself. Every extra line turns
/// the path into its continuation, keeping vertical rails below branches that
/// still have siblings and blanking everything else, so a multi-line row
/// stays visually connected to the rows beneath it.
#[derive(Debug, Clone)]
pub(crate) struct TreePathRenderer {
    pub(crate) style: TreePathStyle,
}

impl TreePathRenderer {
    /// Connector glyphs measure one cell each regardless of how the terminal
    /// fonts stretch them; everything else measures normally.
    fn stats(&self, cell: &Cell, output: OutputKind) -> (usize, usize) {
        let width =
            cell.side_padding_width() + cell.style.overhead(output) + connector_len(&cell.content);
        (width, 1)
    }

    fn render(&self, cell: &Cell, height: usize, output: OutputKind) -> Vec<String> {
        let mut out = Vec::with_capacity(height);
        for i in 0..height {
            let line = if i == 0 {
                cell.content.clone()
            } else {
                self.style.continuation(&cell.content)
            };
            let padded = format!("{}{line}{}", cell.left_padding, cell.right_padding);
            out.push(cell.style.apply(&padded, output));
        }
        out
    }
}
