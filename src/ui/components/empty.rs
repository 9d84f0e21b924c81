//! Empty grid message renderer.
//!
//! Shown in place of the grid when the catalog is empty or the active query
//! matches nothing. The header, search box, and result line stay visible so
//! the user can keep editing the query.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Paints the empty state inside the grid area.
///
/// The whole grid region is blanked first (so no cells from the previous
/// frame survive), then the two centered message lines are drawn near its
/// top.
pub fn render_empty_state(
    origin_row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
    pane_rows: usize,
) {
    let grid_end = pane_rows.saturating_sub(2);
    for line in origin_row..=grid_end {
        position_cursor(line, 1);
        print!("{}", " ".repeat(cols));
    }

    let msg_width = display_width(&empty.message);
    let msg_padding = cols.saturating_sub(msg_width) / 2;

    position_cursor(origin_row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", Theme::reset());

    let sub_width = display_width(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_width) / 2;

    position_cursor(origin_row + 2, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", Theme::reset());
}
