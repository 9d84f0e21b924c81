//! Composable UI component renderers.
//!
//! Each component paints one region of the pane and returns the next free
//! screen row, so the renderer can stack them without duplicated position
//! math. All output is ANSI-styled text on stdout.
//!
//! # Components
//!
//! - [`header`]: Title bar with icon counts and scroll range
//! - [`result`]: The last-clicked-icon line
//! - [`search`]: Search input box
//! - [`grid`]: The icon grid itself
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Message shown when the grid has nothing to paint

mod empty;
mod footer;
mod grid;
mod header;
mod result;
mod search;

pub use empty::render_empty_state;
pub use footer::render_footer;
pub use grid::render_grid;
pub use header::render_header;
pub use result::render_result;
pub use search::render_search_bar;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Paints a horizontal separator line at `row`, returning the next row.
pub fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Blanks a full line at `row`, returning the next row.
///
/// Used for spacer lines whose previous-frame contents would otherwise
/// survive a layout shift (opening or closing the search box moves the grid).
pub fn render_blank_line(row: usize, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(cols));
    row + 1
}
