//! Unicode display width measurement and width-aware splitting.
//!
//! All layout decisions in this crate are made in terminal cells, not
//! characters or bytes. CJK characters and full-width forms occupy 2 cells,
//! control characters occupy 0, everything else occupies 1.

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use unicode_width::UnicodeWidthChar;

/// Minimum string length to cache (shorter strings have minimal overhead).
const CACHE_MIN_LEN: usize = 8;

/// LRU cache for `cell_len` calculations.
static CELL_LEN_CACHE: LazyLock<Mutex<LruCache<String, usize>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

/// Get the cell width of a single character.
///
/// Most characters are 1 cell wide, but CJK characters and full-width forms
/// are 2 cells wide. Control characters have 0 width.
#[must_use]
pub fn char_cell_size(c: char) -> usize {
    c.width().unwrap_or(0)
}

#[inline]
fn compute_cell_width(text: &str) -> usize {
    text.chars().map(char_cell_size).sum()
}

/// Get the total cell width of a string (cached for longer strings).
///
/// Results for strings of 8+ bytes are kept in an LRU cache; table rendering
/// measures the same headers and cell lines repeatedly.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    if text.len() < CACHE_MIN_LEN {
        return compute_cell_width(text);
    }

    if let Ok(mut cache) = CELL_LEN_CACHE.lock()
        && let Some(&cached) = cache.get(text)
    {
        return cached;
    }

    let width = compute_cell_width(text);

    if let Ok(mut cache) = CELL_LEN_CACHE.lock() {
        cache.put(text.to_string(), width);
    }

    width
}

/// Get the cell width of a tree connector string.
///
/// Terminals draw box-drawing, block and geometric glyphs (U+2500 through
/// U+25FF) in a single cell even under East-Asian-ambiguous conventions, so
/// those always count 1 here. Other characters measure as in [`cell_len`],
/// so wide content embedded in a path still counts 2.
#[must_use]
pub fn connector_len(text: &str) -> usize {
    text.chars()
        .map(|c| {
            if ('\u{2500}'..='\u{25FF}').contains(&c) {
                1
            } else {
                char_cell_size(c)
            }
        })
        .sum()
}

/// Truncate a string to a maximum cell width.
///
/// Returns the longest prefix that fits and its actual width. A wide
/// character straddling the limit is left out, so the returned width can be
/// one cell short of `max_width`.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    let mut byte_pos = 0;

    for (i, c) in text.char_indices() {
        let char_width = char_cell_size(c);
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        byte_pos = i + c.len_utf8();
    }

    (&text[..byte_pos], width)
}

/// Split a string at a cell position.
///
/// Returns (left, right) where left has the specified width, or less if a
/// wide character would exceed it.
#[must_use]
pub fn chop_at_width(text: &str, max_width: usize) -> (&str, &str) {
    let (head, _) = truncate_to_width(text, max_width);
    (head, &text[head.len()..])
}

/// Split a string into lines of at most `limit` cells.
///
/// A limit of 0 disables splitting. Each cut takes the longest fitting
/// prefix; a single glyph wider than the limit is taken alone so every cut
/// makes progress.
#[must_use]
pub fn split_by_width(text: &str, limit: usize) -> Vec<String> {
    if limit == 0 || cell_len(text) <= limit {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut rest = text;
    while cell_len(rest) > limit {
        let (head, tail) = chop_at_width(rest, limit);
        if head.is_empty() {
            let first = rest.chars().next().map_or(0, char::len_utf8);
            lines.push(rest[..first].to_string());
            rest = &rest[first..];
        } else {
            lines.push(head.to_string());
            rest = tail;
        }
    }
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }
    lines
}
