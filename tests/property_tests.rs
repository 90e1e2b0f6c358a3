//! Property-based tests for textgrid.
//!
//! Uses proptest to verify invariants with 1000+ generated cases per
//! property: lossless wrapping, the measure/render contract, and grids whose
//! lines always share one width.

use proptest::prelude::*;

use textgrid::align::{Alignment, align};
use textgrid::cells::{cell_len, split_by_width};
use textgrid::prelude::*;

// ============================================================================
// Custom Strategies
// ============================================================================

/// Text over a narrow alphabet that still mixes single and double width
/// glyphs.
fn mixed_text() -> impl Strategy<Value = String> {
    "[a-z0-9 你好世界数据]{0,30}"
}

/// Small space-separated words, at least two of them.
fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 2..6)
}

/// A width limit wide enough for the side paddings plus minimal content.
fn column_limit() -> impl Strategy<Value = usize> {
    4usize..40
}

fn plain_column(name: &str) -> Column {
    Column::standard(name)
        .header_style(ColumnStyle::header_default().text(Style::new()))
        .body_style(ColumnStyle::body_default().text(Style::new()))
}

/// Display width of the first rendered line.
fn first_line_width(grid: &str) -> usize {
    cell_len(grid.split('\n').next().unwrap_or(""))
}

// ============================================================================
// Wrapping
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Chunks concatenate back to the input, nothing lost or invented.
    #[test]
    fn prop_split_by_width_is_lossless(text in mixed_text(), budget in 1usize..30) {
        let chunks = split_by_width(&text, budget);
        let rebuilt: String = chunks.concat();
        prop_assert_eq!(rebuilt, text);
    }

    /// No chunk exceeds the budget, except a lone glyph too wide to ever fit.
    #[test]
    fn prop_split_by_width_respects_the_budget(text in mixed_text(), budget in 1usize..30) {
        for chunk in split_by_width(&text, budget) {
            prop_assert!(
                cell_len(&chunk) <= budget || chunk.chars().count() == 1,
                "chunk {chunk:?} wider than {budget}"
            );
        }
    }
}

// ============================================================================
// Alignment
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Left, center and right all pad to exactly the requested width.
    #[test]
    fn prop_align_pads_to_width(text in mixed_text(), extra in 0usize..20) {
        let width = cell_len(&text) + extra;
        for alignment in [Alignment::Left, Alignment::Center, Alignment::Right] {
            let out = align(&text, width, ' ', alignment);
            prop_assert_eq!(cell_len(&out), width, "{:?}", alignment);
            prop_assert!(out.contains(&text), "content lost under {alignment:?}");
        }
    }

    /// Justify spreads padding through the gaps and still hits the width.
    #[test]
    fn prop_justify_hits_the_width_exactly(words in word_list(), extra in 0usize..40) {
        let text = words.join(" ");
        let width = cell_len(&text) + extra;
        let out = align(&text, width, ' ', Alignment::Justify);

        prop_assert_eq!(cell_len(&out), width);

        // Same glyphs in the same order once padding is ignored.
        let stripped: String = out.chars().filter(|c| *c != ' ').collect();
        let expected: String = text.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(stripped, expected);
    }
}

// ============================================================================
// The measure/render contract
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// What stats promises, render delivers: the line count matches the
    /// reported height and every line has the reported width.
    #[test]
    fn prop_stats_and_render_agree(text in mixed_text(), limit in column_limit()) {
        let mut table = Table::new();
        table.append_column(plain_column("C").width(limit, true)).unwrap();
        table.append_row([text.into()]).unwrap();

        let cell = table.cell(0, 0).unwrap();
        let (width, height) = cell.stats(limit, OutputKind::Console).unwrap();
        prop_assert_eq!(width, limit, "limited cells report the limit");

        let lines = cell.render(width, height, OutputKind::Console).unwrap();
        prop_assert_eq!(lines.len(), height);
        for line in &lines {
            prop_assert_eq!(cell_len(line), width, "line {:?}", line);
        }
    }

    /// Truncation keeps one line per text segment regardless of length.
    #[test]
    fn prop_truncate_keeps_one_line_per_segment(
        segments in prop::collection::vec("[a-z ]{0,40}", 1..4),
        limit in 6usize..30,
    ) {
        let text = segments.join("\n");
        let mut table = Table::new();
        table
            .append_column(
                plain_column("C")
                    .width(limit, true)
                    .body_style(ColumnStyle::body_default().overflow(Overflow::Truncate)),
            )
            .unwrap();
        table.append_row([text.into()]).unwrap();

        let cell = table.cell(0, 0).unwrap();
        let (width, height) = cell.stats(limit, OutputKind::Console).unwrap();
        prop_assert_eq!(height, segments.len());

        let lines = cell.render(width, height, OutputKind::Console).unwrap();
        for line in &lines {
            prop_assert_eq!(cell_len(line), width);
        }
    }
}

// ============================================================================
// Whole grids
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every line of a rendered grid has the same display width.
    #[test]
    fn prop_grid_lines_share_one_width(
        rows in prop::collection::vec(
            (mixed_text(), mixed_text()),
            1..5,
        ),
    ) {
        let mut table = Table::with_layout(TableLayout::light());
        table
            .append_columns([plain_column("A"), plain_column("B")])
            .unwrap();
        for (a, b) in rows {
            table.append_row([a.into(), b.into()]).unwrap();
        }

        let out = table.render(OutputKind::Console).unwrap();
        let expected = first_line_width(&out);
        prop_assert!(expected > 0);
        for line in out.split('\n').filter(|l| !l.is_empty()) {
            prop_assert_eq!(cell_len(line), expected, "line {:?}", line);
        }
    }

    /// A reachable width target is met exactly, on every line.
    #[test]
    fn prop_width_target_is_met_exactly(
        data in "[a-z]{1,8}",
        target in 30usize..100,
    ) {
        let mut table = Table::with_layout(TableLayout::light().width(target));
        table
            .append_columns([plain_column("ID"), plain_column("Data")])
            .unwrap();
        table.append_row([1.into(), data.into()]).unwrap();

        let out = table.render(OutputKind::Console).unwrap();
        for line in out.split('\n').filter(|l| !l.is_empty()) {
            prop_assert_eq!(cell_len(line), target, "line {:?}", line);
        }
    }

    /// Flattened forests keep the grid rectangular whatever their shape.
    #[test]
    fn prop_tree_grids_stay_rectangular(
        breadth in 1usize..4,
        labels in prop::collection::vec("[a-z]{1,10}", 1..20),
    ) {
        use std::collections::HashMap;

        struct Node {
            label: String,
            children: Vec<Node>,
        }

        impl TreeNode for Node {
            fn fields(&self) -> HashMap<String, CellValue> {
                HashMap::from([("Label".to_string(), CellValue::from(&self.label))])
            }

            fn children(&self) -> Vec<&dyn TreeNode> {
                self.children.iter().map(|c| c as &dyn TreeNode).collect()
            }
        }

        let mut labels = labels.into_iter().cycle();
        let mut next = || labels.next().unwrap_or_default();

        // A root with `breadth` children, each carrying `breadth` leaves.
        let mut children = Vec::new();
        for _ in 0..breadth {
            let mut leaves = Vec::new();
            for _ in 0..breadth {
                leaves.push(Node {
                    label: next(),
                    children: Vec::new(),
                });
            }
            children.push(Node {
                label: next(),
                children: leaves,
            });
        }
        let root = Node {
            label: next(),
            children,
        };
        let nodes: Vec<&dyn TreeNode> = vec![&root];

        let mut table = Table::new();
        table.append_column(plain_column("Label")).unwrap();
        table.append_trees(TreePathStyle::ascii(), &nodes).unwrap();

        let out = table.render(OutputKind::Console).unwrap();
        let expected = first_line_width(&out);
        for line in out.split('\n').filter(|l| !l.is_empty()) {
            prop_assert_eq!(cell_len(line), expected, "line {:?}", line);
        }
    }
}
