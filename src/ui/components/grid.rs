//! Icon grid component renderer.
//!
//! Paints the windowed grid rows as fixed-width cells: the glyph in the
//! accent color, a gap, then the icon name with any substring match
//! highlighted. Cell boundaries are pure column arithmetic, which is what
//! lets the click router invert them without consulting the painter.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CellView, GridView};

/// Paints the grid and blanks the rest of the grid area.
///
/// Rows are painted from `grid.origin_row` downward. Lines between the last
/// grid row and the bottom border are blanked so a shrinking result set
/// leaves no stale cells behind.
pub fn render_grid(grid: &GridView, theme: &Theme, cols: usize, pane_rows: usize) {
    let mut line = grid.origin_row;
    for row in &grid.rows {
        render_grid_row(line, row, grid.cell_width, theme, cols);
        line += 1;
    }

    let grid_end = pane_rows.saturating_sub(2);
    while line <= grid_end {
        position_cursor(line, 1);
        print!("{}", " ".repeat(cols));
        line += 1;
    }
}

/// Paints a single grid row at screen row `line`.
///
/// Every cell occupies exactly `cell_width` columns: glyph, one space, the
/// name truncated to the remaining budget, then padding. The row is padded
/// to the full pane width afterwards.
fn render_grid_row(line: usize, cells: &[CellView], cell_width: usize, theme: &Theme, cols: usize) {
    position_cursor(line, 1);

    for cell in cells {
        let glyph_width = helpers::display_width(&cell.glyph).max(1);
        let name_budget = cell_width.saturating_sub(glyph_width + 2);
        let name = helpers::truncate_to_width(&cell.name, name_budget);

        print!("{}", Theme::fg(&theme.colors.glyph_fg));
        print!("{} ", cell.glyph);

        let base = Theme::fg(&theme.colors.text_normal);
        print!("{base}");
        helpers::print_highlighted(name, cell.highlight, theme, &base);

        let used = glyph_width + 1 + helpers::display_width(name);
        print!("{}", " ".repeat(cell_width.saturating_sub(used)));
    }

    let row_width = cells.len() * cell_width;
    print!("{}", " ".repeat(cols.saturating_sub(row_width)));
    print!("{}", Theme::reset());
}
