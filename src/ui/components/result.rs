//! Result line component renderer.
//!
//! Shows the glyph and name of the most recently clicked icon. Until the
//! first click it shows a dimmed hint instead.

use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultInfo;

/// Paints the result line at `row`, returning the next row.
pub fn render_result(row: usize, result: &ResultInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    if result.is_placeholder {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.result_fg));
    }

    let text = truncate_to_width(&result.text, cols.saturating_sub(2));
    print!(" {text}");
    print!("{}", " ".repeat(cols.saturating_sub(display_width(text) + 1)));
    print!("{}", Theme::reset());
    row + 1
}
