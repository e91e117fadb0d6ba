//! Pure text measuring helpers and dimensional constants for the views.
//!
//! Widths are display widths (`unicode-width`), not byte lengths, so
//! "Jan 2021 – Jan 2022" counts its en dash as one column.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::Viewport;

/// Columns reserved for borders and padding around a list row.
pub const HORIZONTAL_OVERHEAD: u16 = 4;
/// Lines one list entry occupies: label, description, spacer.
pub const ROW_HEIGHT: u16 = 3;
/// Lines around the list: title bar, gap under it, help line.
pub const LIST_CHROME: u16 = 3;

const ELLIPSIS: char = '…';

/// Columns available to text inside a row of the given width.
pub fn inner_width(available_width: u16) -> usize {
    available_width.saturating_sub(HORIZONTAL_OVERHEAD) as usize
}

/// Whether `text` renders on a single row of `available_width` columns.
/// Anything that doesn't is shown in the detail view instead.
pub fn measure_fits(text: &str, available_width: u16) -> bool {
    text.width() <= inner_width(available_width)
}

/// Entries visible at once; used as the page size for page up/down.
pub fn page_size(viewport: Viewport) -> usize {
    (viewport.height.saturating_sub(LIST_CHROME) / ROW_HEIGHT).max(1) as usize
}

/// Cut `text` to at most `max_width` columns, ending in "…" when shortened.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // The ellipsis takes one column.
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Build textwrap options for body text of the given inner width.
pub fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width.max(1))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Wrap `text` into owned lines no wider than `width` columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_fits_threshold() {
        // 80 columns leave 76 for text.
        let exact = "x".repeat(76);
        let over = "x".repeat(77);
        assert!(measure_fits(&exact, 80));
        assert!(!measure_fits(&over, 80));
    }

    #[test]
    fn test_measure_fits_tiny_terminal() {
        assert!(measure_fits("", 2));
        assert!(!measure_fits("a", 4));
        assert!(!measure_fits("a", 0));
    }

    #[test]
    fn test_measure_counts_columns_not_bytes() {
        // En dash is 3 bytes but one column.
        let text = "Jan 2021 – Jan 2022";
        assert_eq!(text.width(), 19);
        assert!(measure_fits(text, 23));
        assert!(!measure_fits(text, 22));
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("Native", 10), "Native");
        assert_eq!(truncate("Native", 6), "Native");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let cut = truncate("Python, Go, JavaScript", 10);
        assert_eq!(cut, "Python, G…");
        assert_eq!(cut.width(), 10);
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate("anything", 0), "");
        assert_eq!(truncate("anything", 1), "…");
    }

    #[test]
    fn test_page_size() {
        assert_eq!(page_size(Viewport::new(80, 24)), 7);
        assert_eq!(page_size(Viewport::new(80, 3)), 1);
        assert_eq!(page_size(Viewport::new(80, 0)), 1);
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five six", 9);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.width() <= 9));
        assert_eq!(lines.join(" "), "one two three four five six");
    }
}
