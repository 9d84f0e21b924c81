//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin shim (`main.rs`) and the domain/catalog
//! layers. It follows a unidirectional flow: host input becomes an [`Event`],
//! [`handle_event`] mutates [`AppState`] and returns [`Action`]s, and the UI
//! layer paints a view model computed from the state each frame.
//!
//! # Modules
//!
//! - [`actions`]: Side-effect commands emitted by the event handler
//! - [`grid`]: Row/column partitioning and click hit-testing
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod grid;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use grid::GridLayout;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::{AppState, Selection, Viewport, DEFAULT_CELL_WIDTH, MIN_CELL_WIDTH};
