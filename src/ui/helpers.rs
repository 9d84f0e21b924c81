//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning,
//! display-width measurement for glyph-heavy text, width-aware truncation,
//! and substring match highlighting.
//!
//! Widths are terminal cell widths from `unicode-width`, not char or byte
//! counts. Nerd Font glyphs and CJK characters routinely occupy two cells,
//! and the fixed-width grid cells depend on getting that right.

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Positions the cursor at a 1-indexed `(row, col)` using `\x1b[{row};{col}H`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Longest prefix of `text` that fits in `max_width` terminal cells.
///
/// Cuts on a character boundary; a double-width character that would
/// straddle the limit is dropped entirely.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (offset, ch) in text.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            return &text[..offset];
        }
        used += ch_width;
    }
    text
}

/// Prints `text` with an optional highlighted byte range.
///
/// The range comes from the filter's substring match and is expressed in
/// byte offsets of the original name; offsets past the (possibly truncated)
/// text are clamped. Outside the range the current colors are left alone, so
/// the caller controls the base style.
///
/// `resume` is the escape to re-apply after the highlight's reset, restoring
/// the caller's base style for the tail of the text.
pub fn print_highlighted(text: &str, highlight: Option<(usize, usize)>, theme: &Theme, resume: &str) {
    let Some((start, end)) = highlight else {
        print!("{text}");
        return;
    };

    let start = start.min(text.len());
    let end = end.clamp(start, text.len());
    if start == end {
        print!("{text}");
        return;
    }

    print!("{}", &text[..start]);
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{}", &text[start..end]);
    print!("{}", Theme::reset());
    print!("{resume}");
    print!("{}", &text[end..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("folder-open", 6), "folder");
        assert_eq!(truncate_to_width("short", 10), "short");
        // A double-width character never straddles the cut.
        assert_eq!(truncate_to_width("a\u{4e16}b", 2), "a");
        assert_eq!(truncate_to_width("a\u{4e16}b", 3), "a\u{4e16}");
    }

    #[test]
    fn truncation_cuts_on_char_boundaries() {
        let cut = truncate_to_width("héllo", 2);
        assert_eq!(cut, "hé");
        assert!(cut.is_char_boundary(cut.len()));
    }

    #[test]
    fn zero_width_budget_yields_empty() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
