//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns host input into state
//! changes and side-effect actions. Events arrive one at a time from the
//! plugin shim; each is processed to completion before the next, so every
//! state transition the UI can observe is the result of exactly one event.
//!
//! # Event categories
//!
//! - **Query editing**: `Char`, `Backspace` (search mode only)
//! - **Mode switching**: `SearchMode`, `AcceptSearch`, `Escape`
//! - **Scrolling**: `ScrollUp`, `ScrollDown`, `PageUp`, `PageDown`
//! - **Selection**: `Click` with 0-based pane coordinates
//! - **Lifecycle**: `CloseFocus`
//!
//! The returned boolean tells the shim whether the UI needs a repaint; the
//! action list carries the side effects the library cannot perform itself.

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events delivered by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search query (search mode only).
    Char(char),
    /// Removes the last character from the search query (search mode only).
    Backspace,
    /// Opens the search box, keeping any existing query for editing.
    SearchMode,
    /// Closes the search box, keeping the active filter.
    AcceptSearch,
    /// Discards the filter: clears the query and returns to browsing.
    Escape,
    /// Closes the plugin pane.
    CloseFocus,
    /// Scrolls the grid up by one row.
    ScrollUp,
    /// Scrolls the grid down by one row.
    ScrollDown,
    /// Scrolls the grid up by one window of rows.
    PageUp,
    /// Scrolls the grid down by one window of rows.
    PageDown,
    /// A pointer click at 0-based pane coordinates.
    Click {
        /// Pane line, 0-based from the top.
        line: usize,
        /// Pane column, 0-based from the left.
        col: usize,
    },
}

/// Processes an event, mutates state, and returns `(should_render, actions)`.
///
/// All failure handling in the viewer is local recovery (out-of-range clicks
/// and degenerate sizes are simply ignored), so the `Result` carries no error
/// in practice; it keeps the seam uniform with the rest of the library.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.search_query.clone();
            query.push(*c);
            let changed = state.set_query(query);
            tracing::trace!(query = %state.search_query, "search query updated");
            Ok((changed, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.search_query.clone();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((state.set_query(query), vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("opening search box");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::AcceptSearch => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "search accepted");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Escape => {
            let was_searching = state.input_mode == InputMode::Search;
            state.input_mode = InputMode::Normal;
            let cleared = state.set_query("");
            Ok((was_searching || cleared, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ScrollUp => Ok((state.scroll_rows(-1), vec![])),
        Event::ScrollDown => Ok((state.scroll_rows(1), vec![])),
        Event::PageUp => {
            let window = page_size(state);
            Ok((state.scroll_rows(-window), vec![]))
        }
        Event::PageDown => {
            let window = page_size(state);
            Ok((state.scroll_rows(window), vec![]))
        }
        Event::Click { line, col } => Ok((state.route_click(*line, *col), vec![])),
    }
}

/// Rows jumped by PageUp/PageDown: one full window, at least one row.
fn page_size(state: &AppState) -> isize {
    isize::try_from(state.visible_grid_rows().max(1)).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Catalog, Icon};
    use crate::ui::theme::Theme;

    fn state_with(names: &[&str]) -> AppState {
        let icons = names.iter().map(|name| Icon::new(*name, "\u{f0a9}")).collect();
        let mut state = AppState::new(Catalog::new(icons), Theme::default(), 10);
        state.set_viewport(30, 20);
        state
    }

    fn fire(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).expect("event handling")
    }

    #[test]
    fn click_on_second_row_selects_third_icon() {
        let mut state = state_with(&["Alpha", "Beta", "Gamma", "Delta"]);
        // Two full rows at 2 columns; grid starts on 0-based line 5.
        let (render, actions) = fire(&mut state, Event::Click { line: 6, col: 0 });
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.selection.as_ref().map(|s| s.name.as_str()), Some("Gamma"));
    }

    #[test]
    fn typing_is_ignored_outside_search_mode() {
        let mut state = state_with(&["Alpha"]);
        let (render, _) = fire(&mut state, Event::Char('x'));
        assert!(!render);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn search_flow_filters_and_keeps_the_filter_on_accept() {
        let mut state = state_with(&["Alpha", "Echo", "Gamma", "Delta"]);
        fire(&mut state, Event::SearchMode);
        fire(&mut state, Event::Char('a'));
        assert_eq!(state.visible.len(), 3);

        // In search mode the grid starts on 0-based line 8; the filtered rows
        // are [Alpha, Gamma] and [Delta], so row 1 col 1 is padding.
        let (render, _) = fire(&mut state, Event::Click { line: 9, col: 10 });
        assert!(!render);
        assert!(state.selection.is_none());

        fire(&mut state, Event::AcceptSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.visible.len(), 3, "filter survives accepting");

        // Back in normal mode the same logical cell sits on line 6.
        let (render, _) = fire(&mut state, Event::Click { line: 6, col: 0 });
        assert!(render);
        assert_eq!(state.selection.as_ref().map(|s| s.name.as_str()), Some("Delta"));
    }

    #[test]
    fn escape_discards_the_filter_entirely() {
        let mut state = state_with(&["Alpha", "Echo"]);
        fire(&mut state, Event::SearchMode);
        fire(&mut state, Event::Char('a'));
        assert_eq!(state.visible.len(), 1);

        let (render, _) = fire(&mut state, Event::Escape);
        assert!(render);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "");
        assert_eq!(state.visible.len(), 2);
    }

    #[test]
    fn escape_in_normal_mode_without_filter_is_a_no_op() {
        let mut state = state_with(&["Alpha"]);
        let (render, _) = fire(&mut state, Event::Escape);
        assert!(!render);
    }

    #[test]
    fn backspace_edits_and_refilters() {
        let mut state = state_with(&["Alpha", "Cargo"]);
        fire(&mut state, Event::SearchMode);
        fire(&mut state, Event::Char('a'));
        fire(&mut state, Event::Char('l'));
        assert_eq!(state.visible.len(), 1);
        fire(&mut state, Event::Backspace);
        assert_eq!(state.search_query, "a");
        assert_eq!(state.visible.len(), 2);

        let (render, _) = fire(&mut state, Event::Backspace);
        assert!(render);
        let (render, _) = fire(&mut state, Event::Backspace);
        assert!(!render, "backspace on an empty query does nothing");
    }

    #[test]
    fn close_focus_emits_the_action() {
        let mut state = state_with(&["Alpha"]);
        let (render, actions) = fire(&mut state, Event::CloseFocus);
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn paging_moves_by_one_window() {
        let names: Vec<String> = (0..40).map(|i| format!("icon-{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = state_with(&refs);
        state.set_viewport(12, 10);
        // One column, window of 5 rows.
        let (render, _) = fire(&mut state, Event::PageDown);
        assert!(render);
        assert_eq!(state.scroll_offset, 5);
        fire(&mut state, Event::ScrollDown);
        assert_eq!(state.scroll_offset, 6);
        fire(&mut state, Event::PageUp);
        assert_eq!(state.scroll_offset, 1);
    }
}
