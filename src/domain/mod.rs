//! Domain layer for the Glyphgrid plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or infrastructure concerns. The catalog and its icons
//! carry no UI or host state; everything above this layer refers to icons by
//! catalog index.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`icon`]: The icon model and the load-once catalog

pub mod error;
pub mod icon;

pub use error::{GlyphgridError, Result};
pub use icon::{Catalog, Icon};
