//! Line alignment within a fixed-width cell interior.
//!
//! A rendered cell line is padded out to the column's content width with the
//! column's padding glyph. Empty lines become a solid run of the glyph so that
//! blank filler rows still occupy the full interior.

use crate::cells::cell_len;

/// Horizontal placement of a line inside its content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Text at the left edge, padding to the right.
    #[default]
    Left,
    /// Padding split evenly, leftover glyph on the right.
    Center,
    /// Padding distributed into the gaps between words.
    Justify,
    /// Text at the right edge, padding to the left.
    Right,
}

/// Pads `text` out to `width` display cells using `glyph`.
///
/// Text already at or beyond `width` is returned unchanged; alignment never
/// truncates. An empty line yields `width` repetitions of the glyph.
pub fn align(text: &str, width: usize, glyph: char, alignment: Alignment) -> String {
    let pad_count = width.saturating_sub(cell_len(text));
    if text.is_empty() {
        return pad(glyph, pad_count);
    }
    match alignment {
        Alignment::Left => {
            let mut out = String::with_capacity(text.len() + pad_count);
            out.push_str(text);
            extend(&mut out, glyph, pad_count);
            out
        }
        Alignment::Right => {
            let mut out = pad(glyph, pad_count);
            out.push_str(text);
            out
        }
        Alignment::Center => {
            let left = pad_count / 2;
            let mut out = pad(glyph, left);
            out.push_str(text);
            extend(&mut out, glyph, pad_count - left);
            out
        }
        Alignment::Justify => justify(text, pad_count, glyph),
    }
}

/// Spreads `pad_count` extra glyphs round-robin into the gaps between words,
/// left gaps first. A line with no gap to widen is returned as-is.
fn justify(text: &str, pad_count: usize, glyph: char) -> String {
    let mut words: Vec<String> = text.split(glyph).map(String::from).collect();
    if words.len() < 2 {
        return text.to_string();
    }
    let gaps = words.len() - 1;
    let mut remaining = pad_count;
    while remaining > 0 {
        for word in words.iter_mut().take(gaps) {
            word.push(glyph);
            remaining -= 1;
            if remaining == 0 {
                break;
            }
        }
    }
    words.join(&glyph.to_string())
}

fn pad(glyph: char, count: usize) -> String {
    let mut out = String::with_capacity(count * glyph.len_utf8());
    extend(&mut out, glyph, count);
    out
}

fn extend(out: &mut String, glyph: char, count: usize) {
    for _ in 0..count {
        out.push(glyph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_pads_to_the_right() {
        assert_eq!(align("ab", 5, ' ', Alignment::Left), "ab   ");
    }

    #[test]
    fn right_pads_to_the_left() {
        assert_eq!(align("ab", 5, ' ', Alignment::Right), "   ab");
    }

    #[test]
    fn center_gives_shorter_side_to_the_left() {
        assert_eq!(align("a", 4, ' ', Alignment::Center), " a  ");
        assert_eq!(align("ab", 6, ' ', Alignment::Center), "  ab  ");
    }

    #[test]
    fn empty_line_becomes_solid_padding() {
        assert_eq!(align("", 4, ' ', Alignment::Left), "    ");
        assert_eq!(align("", 3, '*', Alignment::Justify), "***");
    }

    #[test]
    fn width_already_met_returns_text_unchanged() {
        assert_eq!(align("abcd", 4, ' ', Alignment::Left), "abcd");
        assert_eq!(align("abcd", 2, ' ', Alignment::Right), "abcd");
    }

    #[test]
    fn justify_spreads_left_gaps_first() {
        assert_eq!(
            align("ab cd ef gh", 16, ' ', Alignment::Justify),
            "ab   cd   ef  gh"
        );
        assert_eq!(
            align("ab cd ef gh", 17, ' ', Alignment::Justify),
            "ab   cd   ef   gh"
        );
    }

    #[test]
    fn justify_single_word_is_unchanged() {
        assert_eq!(align("abcd", 9, ' ', Alignment::Justify), "abcd");
    }

    #[test]
    fn justify_with_custom_glyph() {
        assert_eq!(align("a*b", 5, '*', Alignment::Justify), "a***b");
    }

    #[test]
    fn wide_characters_count_display_cells() {
        assert_eq!(align("你好", 6, ' ', Alignment::Center), " 你好 ");
        assert_eq!(align("你好", 5, ' ', Alignment::Left), "你好 ");
    }
}
