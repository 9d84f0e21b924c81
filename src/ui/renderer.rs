//! Top-level rendering coordinator.
//!
//! Computes the view model for the frame and stacks the components onto the
//! pane. The chrome painted here must stay in step with the row accounting
//! in [`AppState::grid_origin_row`](crate::app::AppState::grid_origin_row):
//! the first grid line is what the click router inverts.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the viewer to stdout for the current frame.
///
/// Reads the viewport recorded by the frame event; painting is a pure
/// function of the state snapshot.
pub fn render(state: &AppState) {
    let vm = state.compute_viewmodel();
    render_viewmodel(&vm, &state.theme, state.viewport.rows, state.viewport.cols);
}

/// Stacks the components: blank line, header, border, optional search box,
/// result line, spacer, grid (or empty state), border, footer.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut row = 2;

    row = components::render_header(row, &vm.header, theme, cols);
    row = components::render_border(row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        row = components::render_search_bar(row, search, theme, cols);
    }
    row = components::render_result(row, &vm.result, theme, cols);
    let _spacer = components::render_blank_line(row, cols);

    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(vm.grid.origin_row, empty, theme, cols, rows);
    } else {
        components::render_grid(&vm.grid, theme, cols, rows);
    }

    let footer_row = rows;
    components::render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    components::render_footer(footer_row, &vm.footer, theme, cols);
}
