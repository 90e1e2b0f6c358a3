//! Table frame: border glyphs, visibility toggles, and the target width.
//!
//! Horizontal rules are described as 4-character sets, one per rule kind:
//! `[left, horizontal, cross, right]`. Vertical framing uses single glyphs
//! for the two outer edges and the separator between columns. The toggles
//! turn individual rules on and off; the modifiers below flip groups of them
//! into common arrangements.

/// Which horizontal rule of the frame is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Above the header row.
    HeaderTop,
    /// Between header and body.
    HeaderBottom,
    /// Above the first body row.
    BodyTop,
    /// Below the last body row.
    BodyBottom,
    /// Between body rows.
    RowSeparator,
}

/// Frame description for a whole table.
///
/// `width` is the target total width of the rendered grid in display cells;
/// 0 lets every column take its natural width.
#[derive(Debug, Clone)]
pub struct TableLayout {
    /// Rule glyphs as `[left, horizontal, cross, right]`.
    pub header_top: [char; 4],
    pub header_bottom: [char; 4],
    pub body_top: [char; 4],
    pub body_bottom: [char; 4],
    pub row_separator: [char; 4],

    /// Leftmost glyph of every content line.
    pub edge_left: char,
    /// Glyph between adjacent cells on content lines.
    pub column_separator: char,
    /// Rightmost glyph of every content line.
    pub edge_right: char,

    pub show_header: bool,
    pub show_header_top_border: bool,
    pub show_header_bottom_border: bool,
    pub show_body_top_border: bool,
    pub show_body_bottom_border: bool,
    pub show_side_border: bool,
    pub show_column_separator: bool,
    pub show_row_separator: bool,

    /// Target total width, 0 for natural sizing.
    pub width: usize,
}

impl TableLayout {
    /// Plain-ASCII frame.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            header_top: ['+', '-', '+', '+'],
            header_bottom: ['+', '-', '+', '+'],
            body_top: ['+', '-', '+', '+'],
            body_bottom: ['+', '-', '+', '+'],
            row_separator: ['|', '-', '+', '|'],
            edge_left: '|',
            column_separator: '|',
            edge_right: '|',
            show_header: true,
            show_header_top_border: true,
            show_header_bottom_border: true,
            show_body_top_border: false,
            show_body_bottom_border: true,
            show_side_border: true,
            show_column_separator: true,
            show_row_separator: false,
            width: 0,
        }
    }

    /// Unicode box-drawing frame with light lines.
    #[must_use]
    pub fn light() -> Self {
        Self {
            header_top: ['┌', '─', '┬', '┐'],
            header_bottom: ['├', '─', '┼', '┤'],
            body_top: ['┌', '─', '┬', '┐'],
            body_bottom: ['└', '─', '┴', '┘'],
            row_separator: ['│', '─', '┼', '│'],
            edge_left: '│',
            column_separator: '│',
            edge_right: '│',
            show_header: true,
            show_header_top_border: true,
            show_header_bottom_border: true,
            show_body_top_border: false,
            show_body_bottom_border: true,
            show_side_border: true,
            show_column_separator: true,
            show_row_separator: false,
            width: 0,
        }
    }

    /// Removes the header row. The body keeps a top border only if it also
    /// has a bottom border, so the remaining frame stays symmetric.
    #[must_use]
    pub fn hide_header(mut self) -> Self {
        self.show_header = false;
        self.show_header_top_border = false;
        self.show_header_bottom_border = false;
        self.show_body_top_border = self.show_body_bottom_border;
        self
    }

    /// Removes the outermost frame: the top rule, both side edges, and the
    /// bottom rule. Inner rules are untouched.
    #[must_use]
    pub fn hide_outer_border(mut self) -> Self {
        if self.show_header {
            self.show_header_top_border = false;
        } else {
            self.show_body_top_border = false;
        }
        self.show_side_border = false;
        self.show_body_bottom_border = false;
        self
    }

    /// Draws the header and the body as two closed boxes. The header's
    /// bottom rule takes the closing glyph set and the body's top rule the
    /// opening one, then every border is switched on.
    #[must_use]
    pub fn split_header_and_body(mut self) -> Self {
        self.header_bottom[0] = self.body_bottom[0];
        self.header_bottom[2] = self.body_bottom[2];
        self.header_bottom[3] = self.body_bottom[3];
        self.body_top[0] = self.header_top[0];
        self.body_top[2] = self.header_top[2];
        self.body_top[3] = self.header_top[3];
        self.show_header = true;
        self.show_header_top_border = true;
        self.show_header_bottom_border = true;
        self.show_body_top_border = true;
        self.show_body_bottom_border = true;
        self.show_side_border = true;
        self
    }

    /// Overall target width in display cells. 0 keeps natural widths.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub(crate) fn rule_glyphs(&self, kind: RuleKind) -> [char; 4] {
        match kind {
            RuleKind::HeaderTop => self.header_top,
            RuleKind::HeaderBottom => self.header_bottom,
            RuleKind::BodyTop => self.body_top,
            RuleKind::BodyBottom => self.body_bottom,
            RuleKind::RowSeparator => self.row_separator,
        }
    }

    pub(crate) fn rule_shown(&self, kind: RuleKind) -> bool {
        match kind {
            RuleKind::HeaderTop => self.show_header_top_border,
            RuleKind::HeaderBottom => self.show_header_bottom_border,
            RuleKind::BodyTop => self.show_body_top_border,
            RuleKind::BodyBottom => self.show_body_bottom_border,
            RuleKind::RowSeparator => self.show_row_separator,
        }
    }

    /// Draws one horizontal rule across columns of the given widths,
    /// newline-terminated. A hidden rule renders as the empty string.
    pub(crate) fn rule_line(&self, kind: RuleKind, widths: &[usize]) -> String {
        if !self.rule_shown(kind) {
            return String::new();
        }
        let [left, horizontal, cross, right] = self.rule_glyphs(kind);
        let mut line = String::new();
        if self.show_side_border {
            line.push(left);
        }
        for (i, &width) in widths.iter().enumerate() {
            if i > 0 && self.show_column_separator {
                line.push(cross);
            }
            for _ in 0..width {
                line.push(horizontal);
            }
        }
        if self.show_side_border {
            line.push(right);
        }
        line.push('\n');
        line
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_rule_line_with_full_frame() {
        let layout = TableLayout::ascii();
        assert_eq!(
            layout.rule_line(RuleKind::HeaderTop, &[4, 6]),
            "+----+------+\n"
        );
    }

    #[test]
    fn light_rule_line_uses_junction_glyphs() {
        let layout = TableLayout::light();
        assert_eq!(
            layout.rule_line(RuleKind::HeaderBottom, &[4, 6]),
            "├────┼──────┤\n"
        );
        assert_eq!(
            layout.rule_line(RuleKind::BodyBottom, &[2]),
            "└──┘\n"
        );
    }

    #[test]
    fn rule_line_without_side_border() {
        let mut layout = TableLayout::ascii();
        layout.show_side_border = false;
        assert_eq!(layout.rule_line(RuleKind::HeaderTop, &[4, 6]), "----+------\n");
    }

    #[test]
    fn rule_line_without_column_separator() {
        let mut layout = TableLayout::ascii();
        layout.show_column_separator = false;
        assert_eq!(layout.rule_line(RuleKind::HeaderTop, &[4, 6]), "+----------+\n");
    }

    #[test]
    fn hidden_rule_renders_nothing() {
        let layout = TableLayout::ascii();
        assert_eq!(layout.rule_line(RuleKind::BodyTop, &[4]), "");
        assert_eq!(layout.rule_line(RuleKind::RowSeparator, &[4]), "");
    }

    #[test]
    fn hide_header_keeps_body_borders_symmetric() {
        let layout = TableLayout::ascii().hide_header();
        assert!(!layout.show_header);
        assert!(!layout.show_header_top_border);
        assert!(!layout.show_header_bottom_border);
        assert!(layout.show_body_top_border);
        assert!(layout.show_body_bottom_border);

        let mut open = TableLayout::ascii();
        open.show_body_bottom_border = false;
        let open = open.hide_header();
        assert!(!open.show_body_top_border);
    }

    #[test]
    fn hide_outer_border_trims_the_frame() {
        let layout = TableLayout::ascii().hide_outer_border();
        assert!(!layout.show_header_top_border);
        assert!(layout.show_header_bottom_border);
        assert!(!layout.show_side_border);
        assert!(!layout.show_body_bottom_border);
    }

    #[test]
    fn hide_outer_border_after_hide_header_trims_the_body_top() {
        let layout = TableLayout::ascii().hide_header().hide_outer_border();
        assert!(!layout.show_body_top_border);
        assert!(!layout.show_body_bottom_border);
        assert!(!layout.show_side_border);
    }

    #[test]
    fn split_header_and_body_closes_both_boxes() {
        let layout = TableLayout::light().split_header_and_body();
        assert_eq!(layout.header_bottom, ['└', '─', '┴', '┘']);
        assert_eq!(layout.body_top, ['┌', '─', '┬', '┐']);
        assert!(layout.show_body_top_border);
        assert!(layout.show_header_bottom_border);
    }
}
