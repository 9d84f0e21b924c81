//! User interface rendering layer.
//!
//! Transforms application state into ANSI-styled terminal output through a
//! declarative pipeline:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types computed from state
//! - [`renderer`]: Frame assembly
//! - [`components`]: Individual region painters
//! - [`helpers`]: Width measurement, truncation, highlighting
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CellView, EmptyState, FooterInfo, GridView, HeaderInfo, ResultInfo, SearchBarInfo, UIViewModel,
};
