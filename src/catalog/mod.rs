//! Catalog loading: the icon-supplying side of the viewer.
//!
//! The catalog is assembled exactly once at startup from an [`IconSource`]
//! and published to the application layer as an immutable [`Catalog`]. A load
//! failure is fatal; the viewer never starts with a partial icon list.
//!
//! # Organization
//!
//! - [`source`]: The `IconSource` trait
//! - [`format`]: The shared JSON document schema
//! - [`builtin`]: The embedded default icon set
//! - [`file`]: User-supplied catalog files

pub mod builtin;
pub mod file;
pub mod format;
pub mod source;

pub use builtin::BuiltinIcons;
pub use file::JsonIconFile;
pub use source::IconSource;

use crate::domain::error::Result;
use crate::domain::Catalog;

/// Loads a catalog from any source, logging the published size.
///
/// # Errors
///
/// Propagates the source's load error untouched; the caller decides that it
/// is fatal.
pub fn load(source: &dyn IconSource) -> Result<Catalog> {
    let icons = source.load_all()?;
    tracing::info!(count = icons.len(), "icon catalog loaded");
    Ok(Catalog::new(icons))
}
