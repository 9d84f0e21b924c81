//! Input mode state machine for the viewer.
//!
//! The viewer has two interaction modes. They control how keystrokes are
//! interpreted by the plugin shim and which footer hints are shown; the
//! filtered/unfiltered split is not a mode but a property of the query
//! (an empty query always means the full catalog is visible).

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default browsing mode.
    ///
    /// Keys scroll the grid (`j`/`k`, arrows, PageUp/PageDown), `/` opens the
    /// search box, `Esc` clears an active filter, `q` closes the plugin.
    /// Clicks select icons in every mode.
    Normal,

    /// The search box is open and capturing keystrokes.
    ///
    /// Characters and backspace edit the query, `Enter` returns to browsing
    /// with the filter kept, `Esc` discards the query entirely.
    Search,
}
