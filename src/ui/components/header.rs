//! Header component renderer.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Paints the centered title bar at `row`, returning the next row.
///
/// The title carries the icon counts and, when the grid scrolls, the visible
/// row range. The line is padded to the full pane width so an optional header
/// background covers it edge to edge.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_width = display_width(&header.title);
    let padding = cols.saturating_sub(title_width) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_width)));

    print!("{}", Theme::reset());
    row + 1
}
