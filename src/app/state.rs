//! Application state and view model computation.
//!
//! This module defines [`AppState`], the single stateful coordinator of the
//! viewer. It owns the load-once catalog, the currently visible subset, the
//! search query, the last-clicked selection, and the scroll/viewport bookkeeping
//! needed to place the grid on screen.
//!
//! # Data flow
//!
//! - Pane size arrives once per frame and is recorded by [`AppState::set_viewport`];
//!   the column count is re-derived from it on demand, never cached.
//! - Query edits go through [`AppState::set_query`], which is edge-triggered:
//!   an unchanged value is a no-op and the filter scan only runs on a real change.
//! - Clicks are routed by [`AppState::route_click`] through a freshly computed
//!   [`GridLayout`], so a click can never resolve against a stale partition.
//!
//! The visible subset is a `Vec<usize>` of catalog indices in catalog order:
//! a view into the catalog, never a copy of its items.

use crate::app::grid::GridLayout;
use crate::app::modes::InputMode;
use crate::domain::Catalog;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CellView, EmptyState, FooterInfo, GridView, HeaderInfo, ResultInfo, SearchBarInfo, UIViewModel,
};

/// Cell width used when the configuration supplies none.
pub const DEFAULT_CELL_WIDTH: usize = 20;

/// Narrowest usable cell: a double-width glyph, a gap, and a few name chars.
pub const MIN_CELL_WIDTH: usize = 8;

/// Last-seen pane dimensions, recorded on every frame.
///
/// A fresh state starts at zero-by-zero; the column derivation clamps that to
/// a single column and the row window to empty, so nothing ever divides by or
/// indexes into a size the host has not reported yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Pane height in character rows.
    pub rows: usize,
    /// Pane width in character columns.
    pub cols: usize,
}

/// The most recently clicked icon, kept for the result line.
///
/// Stored as owned strings rather than a catalog index: the display survives
/// any later filter change, and names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Name of the clicked icon.
    pub name: String,
    /// Glyph payload of the clicked icon.
    pub glyph: String,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full icon catalog, immutable after startup.
    pub catalog: Catalog,

    /// Catalog indices of the icons matching the current query, in catalog
    /// order. Rebuilt wholesale by [`AppState::apply_filter`].
    pub visible: Vec<usize>,

    /// Current search query. Empty means the whole catalog is visible.
    pub search_query: String,

    /// Name and glyph of the last clicked icon, if any.
    pub selection: Option<Selection>,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Grid rows scrolled past the top of the window.
    pub scroll_offset: usize,

    /// Last pane size reported by the host.
    pub viewport: Viewport,

    /// Fixed width of one grid cell in character columns.
    pub cell_width: usize,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the viewer state around a loaded catalog.
    ///
    /// The visible set starts as the full catalog (empty query), the selection
    /// empty, and the viewport unset until the first frame arrives.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, cell_width: usize) -> Self {
        let mut state = Self {
            catalog,
            visible: Vec::new(),
            search_query: String::new(),
            selection: None,
            input_mode: InputMode::Normal,
            scroll_offset: 0,
            viewport: Viewport::default(),
            cell_width: cell_width.max(MIN_CELL_WIDTH),
            theme,
        };
        state.apply_filter();
        state
    }

    /// Swaps in a fully constructed catalog.
    ///
    /// Used by the shim when a configured catalog file becomes readable only
    /// after the host grants filesystem access. The catalog is replaced as a
    /// unit and the visible set rebuilt; a partially loaded catalog is never
    /// observable.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.apply_filter();
    }

    /// Records the pane size delivered with the current frame.
    ///
    /// Also re-clamps the scroll offset, since a taller pane may have made the
    /// previous offset overshoot the last window.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = Viewport { rows, cols };
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Column count derived from the current pane width.
    ///
    /// Recomputed on demand from `viewport.cols / cell_width` and clamped to
    /// at least one column, so a collapsed pane degrades to a single-column
    /// list instead of a division by zero.
    #[must_use]
    pub fn columns(&self) -> usize {
        (self.viewport.cols / self.cell_width).max(1)
    }

    /// Grid partition of the current visible set at the current width.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        GridLayout::partition(self.visible.len(), self.columns())
    }

    /// Whether a non-empty query is active.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// Replaces the query, returning whether it actually changed.
    ///
    /// The text collaborator re-delivers the field contents on every edit;
    /// this setter is the edge detector that keeps the filter scan off the
    /// per-frame path. An unchanged value returns `false` and touches nothing.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.search_query {
            return false;
        }
        tracing::debug!(query = %query, "query changed");
        self.search_query = query;
        self.apply_filter();
        true
    }

    /// Rebuilds the visible set from the catalog and the current query.
    ///
    /// An empty query takes a fast path that restores the full catalog view
    /// without any case folding, guaranteeing the unfiltered order is exactly
    /// the catalog order. A non-empty query keeps every icon whose name
    /// contains it, compared after ASCII lowering.
    ///
    /// ASCII folding is a deliberate choice: catalog names are ASCII
    /// identifiers, and length-preserving folding means the byte offsets found
    /// here line up with the original names for match highlighting. Non-ASCII
    /// characters participate byte-exactly.
    ///
    /// The scan is deterministic and idempotent, and always preserves catalog
    /// order. The scroll window resets to the top of the new result set.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            catalog_len = self.catalog.len(),
            query_len = self.search_query.len()
        )
        .entered();

        self.visible = if self.search_query.is_empty() {
            (0..self.catalog.len()).collect()
        } else {
            let needle = self.search_query.to_ascii_lowercase();
            self.catalog
                .iter()
                .filter(|(_, icon)| icon.name.to_ascii_lowercase().contains(&needle))
                .map(|(index, _)| index)
                .collect()
        };
        self.scroll_offset = 0;

        tracing::debug!(visible = self.visible.len(), "filter applied");
    }

    /// Byte range of the query match inside `name`, for highlighting.
    ///
    /// `None` when no filter is active. Offsets are valid for the original
    /// string because ASCII lowering never changes byte lengths.
    #[must_use]
    pub fn query_match_range(&self, name: &str) -> Option<(usize, usize)> {
        if self.search_query.is_empty() {
            return None;
        }
        let needle = self.search_query.to_ascii_lowercase();
        name.to_ascii_lowercase()
            .find(&needle)
            .map(|start| (start, start + needle.len()))
    }

    /// First screen row (1-indexed) occupied by the grid.
    ///
    /// The chrome above the grid is fixed per mode: blank line, header,
    /// border, result line and a spacer in normal mode, plus the three-row
    /// search box when the search field is open.
    #[must_use]
    pub const fn grid_origin_row(&self) -> usize {
        match self.input_mode {
            InputMode::Normal => 6,
            InputMode::Search => 9,
        }
    }

    /// Number of grid rows that fit in the current pane.
    #[must_use]
    pub const fn visible_grid_rows(&self) -> usize {
        let chrome = match self.input_mode {
            InputMode::Normal => 7,
            InputMode::Search => 10,
        };
        self.viewport.rows.saturating_sub(chrome)
    }

    /// Largest scroll offset that still shows a full window of rows.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.layout()
            .rows()
            .saturating_sub(self.visible_grid_rows().max(1))
    }

    /// Moves the scroll window by `delta` rows, clamped to the grid.
    ///
    /// Returns whether the offset changed.
    pub fn scroll_rows(&mut self, delta: isize) -> bool {
        let max = self.max_scroll();
        let current = self.scroll_offset;
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs()).min(max)
        };
        self.scroll_offset = next;
        next != current
    }

    /// Routes a host click at 0-based pane coordinates to an icon.
    ///
    /// Maps the line to a grid row (compensating for the scroll offset) and
    /// the column to a cell, then resolves the cell through the current
    /// layout. Clicks outside the grid, on padding cells of a short final
    /// row, or against a visible set that shrank since the frame was painted
    /// are ignored without touching the selection.
    ///
    /// Returns whether the selection was updated.
    pub fn route_click(&mut self, line: usize, col: usize) -> bool {
        let origin = self.grid_origin_row() - 1;
        let window = self.visible_grid_rows();
        if line < origin || line >= origin + window {
            return false;
        }

        let layout = self.layout();
        let row = line - origin + self.scroll_offset;
        let cell_col = col / self.cell_width;
        if cell_col >= layout.columns() {
            return false;
        }

        let Some(flat) = layout.flat_index(row, cell_col) else {
            return false;
        };
        let Some(&catalog_index) = self.visible.get(flat) else {
            return false;
        };
        let Some(icon) = self.catalog.get(catalog_index) else {
            return false;
        };

        tracing::info!(icon = %icon.name, "icon clicked");
        self.selection = Some(Selection {
            name: icon.name.clone(),
            glyph: icon.glyph.clone(),
        });
        true
    }

    /// Computes the renderable view model for the current frame.
    ///
    /// Collects the grid rows inside the scroll window, the header with the
    /// visible count and row range, the result line, and the optional search
    /// box and empty state. Pure read of the state; painting happens in the
    /// `ui` layer.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let layout = self.layout();
        let window = self.visible_grid_rows();
        let top = self.scroll_offset.min(self.max_scroll());
        let bottom = (top + window).min(layout.rows());

        let rows: Vec<Vec<CellView>> = (top..bottom)
            .map(|row| {
                layout
                    .row_range(row)
                    .filter_map(|flat| {
                        let icon = self.catalog.get(*self.visible.get(flat)?)?;
                        Some(CellView {
                            glyph: icon.glyph.clone(),
                            name: icon.name.clone(),
                            highlight: self.query_match_range(&icon.name),
                        })
                    })
                    .collect()
            })
            .collect();

        UIViewModel {
            header: self.compute_header(&layout, top, bottom),
            result: self.compute_result(),
            search_bar: self.compute_search_bar(),
            grid: GridView {
                rows,
                origin_row: self.grid_origin_row(),
                cell_width: self.cell_width,
            },
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_header(&self, layout: &GridLayout, top: usize, bottom: usize) -> HeaderInfo {
        let mut title = if self.is_filtered() {
            format!(
                " Glyphgrid Icon Viewer ({} of {} icons) ",
                self.visible.len(),
                self.catalog.len()
            )
        } else {
            format!(" Glyphgrid Icon Viewer ({} icons) ", self.catalog.len())
        };

        if layout.rows() > self.visible_grid_rows() && bottom > top {
            title.push_str(&format!("· rows {}-{}/{} ", top + 1, bottom, layout.rows()));
        }

        HeaderInfo { title }
    }

    fn compute_result(&self) -> ResultInfo {
        self.selection.as_ref().map_or_else(
            || ResultInfo {
                text: "Click an icon to show its name".to_string(),
                is_placeholder: true,
            },
            |selection| ResultInfo {
                text: format!("{}  {}", selection.glyph, selection.name),
                is_placeholder: false,
            },
        )
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search => Some(SearchBarInfo {
                query: self.search_query.clone(),
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "j/k: scroll  /: search  Esc: clear filter  click: select  q: quit".to_string()
            }
            InputMode::Search => {
                "Type to filter  Enter: keep filter  Esc: discard  click: select".to_string()
            }
        };
        FooterInfo { keybindings }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.catalog.is_empty() {
            Some(EmptyState {
                message: "No icons loaded".to_string(),
                subtitle: "the catalog is empty".to_string(),
            })
        } else if self.visible.is_empty() {
            Some(EmptyState {
                message: "No icons match".to_string(),
                subtitle: format!("\"{}\" (press Esc to clear)", self.search_query),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Icon;

    fn state_with(names: &[&str]) -> AppState {
        let icons = names.iter().map(|name| Icon::new(*name, "\u{f015}")).collect();
        let mut state = AppState::new(Catalog::new(icons), Theme::default(), 10);
        // Plenty of room: 2 columns at width 10, tall enough for every row.
        state.set_viewport(30, 20);
        state
    }

    fn visible_names(state: &AppState) -> Vec<String> {
        state
            .visible
            .iter()
            .filter_map(|&index| state.catalog.get(index))
            .map(|icon| icon.name.clone())
            .collect()
    }

    #[test]
    fn empty_query_shows_full_catalog_in_order() {
        let state = state_with(&["Alpha", "Beta", "Gamma", "Delta"]);
        assert_eq!(visible_names(&state), ["Alpha", "Beta", "Gamma", "Delta"]);
    }

    #[test]
    fn filter_is_case_insensitive_and_order_preserving() {
        let mut state = state_with(&["Home", "home-outline", "Search"]);
        state.set_query("HOME");
        assert_eq!(visible_names(&state), ["Home", "home-outline"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let mut state = state_with(&["Home", "home-outline", "Search"]);
        state.set_query("home");
        let first = state.visible.clone();
        state.apply_filter();
        assert_eq!(state.visible, first);
    }

    #[test]
    fn set_query_is_edge_triggered() {
        let mut state = state_with(&["Home", "Search"]);
        assert!(state.set_query("ho"));
        // The collaborator re-delivers the same text every frame; nothing
        // should happen until it actually differs.
        assert!(!state.set_query("ho"));
        assert!(state.set_query(""));
        assert_eq!(visible_names(&state), ["Home", "Search"]);
    }

    #[test]
    fn clearing_query_restores_catalog_order_exactly() {
        let mut state = state_with(&["Zeta", "Alpha", "Mu"]);
        state.set_query("a");
        state.set_query("");
        assert_eq!(visible_names(&state), ["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn columns_clamp_on_degenerate_width() {
        let mut state = state_with(&["Home"]);
        state.set_viewport(30, 0);
        assert_eq!(state.columns(), 1);
        state.set_viewport(30, 7);
        assert_eq!(state.columns(), 1);
    }

    #[test]
    fn click_selects_the_correct_icon() {
        let mut state = state_with(&["Alpha", "Beta", "Gamma", "Delta"]);
        // 2 columns: rows [Alpha, Beta], [Gamma, Delta]. Grid starts on
        // 0-based line 5 in normal mode; row 1 col 0 is Gamma.
        assert!(state.route_click(6, 0));
        assert_eq!(state.selection.as_ref().map(|s| s.name.as_str()), Some("Gamma"));
    }

    #[test]
    fn click_on_padding_cell_is_rejected() {
        let mut state = state_with(&["A", "B", "C", "D", "E"]);
        // Rows of 2, 2, 1: the second cell of the final row is padding.
        assert!(!state.route_click(7, 10));
        assert!(state.selection.is_none());
    }

    #[test]
    fn click_after_filter_uses_filtered_rows() {
        let mut state = state_with(&["Alpha", "Echo", "Gamma", "Delta"]);
        state.set_query("a");
        assert_eq!(visible_names(&state), ["Alpha", "Gamma", "Delta"]);
        // Rows are now [Alpha, Gamma], [Delta]; row 1 col 1 is padding.
        assert!(!state.route_click(6, 10));
        assert!(state.selection.is_none());
        // Row 1 col 0 is Delta.
        assert!(state.route_click(6, 0));
        assert_eq!(state.selection.as_ref().map(|s| s.name.as_str()), Some("Delta"));
    }

    #[test]
    fn stale_click_outside_shrunk_set_is_ignored() {
        let mut state = state_with(&["Alpha", "Beta", "Gamma", "Delta"]);
        assert!(state.route_click(5, 0));
        let before = state.selection.clone();
        // The set shrinks to one row; a click where row 1 used to be misses.
        state.set_query("alpha");
        assert!(!state.route_click(6, 0));
        assert_eq!(state.selection, before);
    }

    #[test]
    fn clicks_above_and_below_the_grid_are_ignored() {
        let mut state = state_with(&["Alpha", "Beta"]);
        assert!(!state.route_click(0, 0));
        assert!(!state.route_click(29, 0));
        assert!(state.selection.is_none());
    }

    #[test]
    fn scroll_is_clamped_to_grid() {
        let mut state = state_with(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        // One column, window of 3 rows: offsets 0..=5 are reachable.
        state.set_viewport(10, 10);
        assert_eq!(state.columns(), 1);
        assert!(!state.scroll_rows(-1));
        assert!(state.scroll_rows(100));
        assert_eq!(state.scroll_offset, state.max_scroll());
        assert!(state.scroll_rows(-1));
        assert_eq!(state.scroll_offset, state.max_scroll() - 1);
    }

    #[test]
    fn scrolled_click_maps_to_offset_row() {
        let mut state = state_with(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        state.set_viewport(10, 10);
        state.scroll_rows(2);
        // First visible grid line now shows row 2, i.e. "c".
        assert!(state.route_click(5, 0));
        assert_eq!(state.selection.as_ref().map(|s| s.name.as_str()), Some("c"));
    }

    #[test]
    fn viewmodel_windows_rows_and_highlights_matches() {
        let mut state = state_with(&["Home", "home-outline", "Search"]);
        state.set_query("home");
        let vm = state.compute_viewmodel();
        assert_eq!(vm.grid.rows.len(), 1);
        let row = &vm.grid.rows[0];
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].highlight, Some((0, 4)));
        assert_eq!(row[1].name, "home-outline");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_reports_empty_match_state() {
        let mut state = state_with(&["Home"]);
        state.set_query("zzz");
        let vm = state.compute_viewmodel();
        assert!(vm.grid.rows.is_empty());
        let empty = vm.empty_state.expect("empty state");
        assert_eq!(empty.message, "No icons match");
    }
}
