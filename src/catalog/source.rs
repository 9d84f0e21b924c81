//! Icon source abstraction.
//!
//! This module defines the [`IconSource`] trait that abstracts over where the
//! icon catalog comes from. The viewer itself performs no fallible logic
//! around loading: a source either yields the complete ordered icon list or
//! an error, and an error at startup is fatal.

use crate::domain::error::Result;
use crate::domain::Icon;

/// Abstraction over catalog providers.
///
/// Implementations return the full icon list in display order, exactly once,
/// at startup. There is no incremental or partial loading: a caller either
/// gets everything or nothing.
///
/// # Implementations
///
/// - [`BuiltinIcons`](crate::catalog::BuiltinIcons): the embedded default set
/// - [`JsonIconFile`](crate::catalog::JsonIconFile): a user-supplied JSON file
pub trait IconSource {
    /// Loads the complete, ordered icon list.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read or parsed. Callers
    /// treat this as fatal; no partial catalog is ever produced.
    fn load_all(&self) -> Result<Vec<Icon>>;
}
