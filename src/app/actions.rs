//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a list of [`Action`]s after processing each
//! event; the shim in `main.rs` translates them into Zellij API calls. This
//! keeps the library layer free of host calls and therefore testable on any
//! target.
//!
//! The viewer is almost entirely self-contained, so the vocabulary is small:
//! selection and filtering are state changes, not side effects.

/// Commands for the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Emitted when the user explicitly quits (pressing `q` in normal mode).
    CloseFocus,
}
