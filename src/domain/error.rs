//! Error types for the Glyphgrid plugin.
//!
//! This module defines the centralized error type [`GlyphgridError`] and a type
//! alias [`Result`] used throughout the plugin. All errors are implemented with
//! the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Glyphgrid operations.
///
/// Consolidates the failure conditions the plugin can hit: loading the icon
/// catalog, reading files, parsing themes, and configuration problems. Most
/// variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion with `?`.
///
/// Catalog errors are fatal at startup: the plugin refuses to come up with a
/// partial catalog.
#[derive(Debug, Error)]
pub enum GlyphgridError {
    /// The icon catalog could not be loaded or parsed.
    ///
    /// Raised by an [`IconSource`](crate::catalog::IconSource) when its backing
    /// data is missing or malformed. The string describes what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, converted
    /// automatically via `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Raised when required configuration values are missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Glyphgrid operations.
pub type Result<T> = std::result::Result<T, GlyphgridError>;
