//! Column definitions: width policy, padding, and the styles that shape the
//! header cell and every body cell created under the column.
//!
//! A column is also the cell factory for its own data. Standard columns make
//! text cells from the body style; tree path columns make connector cells
//! that carry a [`TreePathStyle`].

use crate::align::Alignment;
use crate::cell::{Cell, CellRenderer, CellValue, ContentRenderer, Overflow, TreePathRenderer};
use crate::style::Style;
use crate::tree::TreePathStyle;

/// Rendering rules shared by the cells of one column side (header or body).
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnStyle {
    pub(crate) overflow: Overflow,
    pub(crate) escape_line_feed: bool,
    pub(crate) align: Alignment,
    pub(crate) text: Style,
}

impl ColumnStyle {
    /// Default header look: bold, centered, wordwrapped.
    #[must_use]
    pub fn header_default() -> Self {
        Self {
            overflow: Overflow::Wordwrap,
            escape_line_feed: false,
            align: Alignment::Center,
            text: Style::new().bold(),
        }
    }

    /// Default body look: plain, left-aligned, wordwrapped. Same as
    /// [`ColumnStyle::default`].
    #[must_use]
    pub fn body_default() -> Self {
        Self::default()
    }

    /// Default look for generated tree path columns: plain, left-aligned,
    /// and rejecting overflow, since connector art must never wrap.
    #[must_use]
    pub fn tree_default() -> Self {
        Self {
            overflow: Overflow::Reject,
            escape_line_feed: false,
            align: Alignment::Left,
            text: Style::new(),
        }
    }

    #[must_use]
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// When set, embedded newlines render as a literal `\n`. Wordwrap ignores
    /// this and keeps newlines as hard breaks.
    #[must_use]
    pub fn escape_line_feed(mut self, escape: bool) -> Self {
        self.escape_line_feed = escape;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn text(mut self, style: Style) -> Self {
        self.text = style;
        self
    }
}

#[derive(Debug, Clone)]
enum CellFactory {
    Standard,
    TreePath(TreePathStyle),
}

/// One column of a table.
#[derive(Debug, Clone)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) hidden: bool,
    pub(crate) width_limit: usize,
    pub(crate) auto_width: bool,
    pub(crate) left_padding: String,
    pub(crate) right_padding: String,
    pub(crate) padding: char,
    pub(crate) header: ColumnStyle,
    pub(crate) body: ColumnStyle,
    factory: CellFactory,
}

impl Column {
    /// A text column with default styles, unlimited width, and width
    /// auto-control enabled.
    #[must_use]
    pub fn standard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hidden: false,
            width_limit: 0,
            auto_width: true,
            left_padding: " ".to_string(),
            right_padding: " ".to_string(),
            padding: ' ',
            header: ColumnStyle::header_default(),
            body: ColumnStyle::body_default(),
            factory: CellFactory::Standard,
        }
    }

    /// The connector-art column generated when trees are appended. Named
    /// after the style and excluded from width auto-control so the table
    /// never squeezes the connectors.
    #[must_use]
    pub fn tree_path(style: TreePathStyle) -> Self {
        Self {
            name: style.name.clone(),
            hidden: false,
            width_limit: 0,
            auto_width: false,
            left_padding: " ".to_string(),
            right_padding: " ".to_string(),
            padding: ' ',
            header: ColumnStyle::header_default().text(style.header),
            body: ColumnStyle::tree_default().text(style.body),
            factory: CellFactory::TreePath(style),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Current width limit, 0 meaning unlimited.
    #[must_use]
    pub fn width_limit(&self) -> usize {
        self.width_limit
    }

    /// Whether table-wide width enforcement may resize this column.
    #[must_use]
    pub fn auto_width(&self) -> bool {
        self.auto_width
    }

    /// Hides or shows the column. Hidden columns still take part in
    /// measurement but never appear in output.
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Caps the column at `limit` display cells (0 lifts the cap) and sets
    /// whether width enforcement may still adjust it.
    #[must_use]
    pub fn width(mut self, limit: usize, auto: bool) -> Self {
        self.set_width(limit, auto);
        self
    }

    /// Sets the fill glyph and the side padding strings.
    #[must_use]
    pub fn padding(mut self, glyph: char, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.padding = glyph;
        self.left_padding = left.into();
        self.right_padding = right.into();
        self
    }

    #[must_use]
    pub fn header_style(mut self, style: ColumnStyle) -> Self {
        self.set_header_style(style);
        self
    }

    #[must_use]
    pub fn body_style(mut self, style: ColumnStyle) -> Self {
        self.set_body_style(style);
        self
    }

    /// In-place variant of [`Column::width`] for columns already attached to
    /// a table.
    pub fn set_width(&mut self, limit: usize, auto: bool) {
        self.width_limit = limit;
        self.auto_width = auto;
    }

    /// In-place variant of [`Column::header_style`].
    pub fn set_header_style(&mut self, style: ColumnStyle) {
        self.header = style;
    }

    /// In-place variant of [`Column::body_style`].
    pub fn set_body_style(&mut self, style: ColumnStyle) {
        self.body = style;
    }

    pub(crate) fn is_tree_path(&self) -> bool {
        matches!(self.factory, CellFactory::TreePath(_))
    }

    pub(crate) fn header_cell(&self) -> Cell {
        Cell::new(
            CellValue::from(self.name.as_str()),
            &self.left_padding,
            &self.right_padding,
            self.header.text,
            CellRenderer::Content(ContentRenderer::new(
                self.padding,
                self.header.align,
                self.header.overflow,
                self.header.escape_line_feed,
            )),
        )
    }

    pub(crate) fn data_cell(&self, value: CellValue) -> Cell {
        match &self.factory {
            CellFactory::Standard => Cell::new(
                value,
                &self.left_padding,
                &self.right_padding,
                self.body.text,
                CellRenderer::Content(ContentRenderer::new(
                    self.padding,
                    self.body.align,
                    self.body.overflow,
                    self.body.escape_line_feed,
                )),
            ),
            CellFactory::TreePath(style) => Cell::new(
                value,
                &self.left_padding,
                &self.right_padding,
                self.body.text,
                CellRenderer::TreePath(TreePathRenderer {
                    style: style.clone(),
                }),
            ),
        }
    }
}
