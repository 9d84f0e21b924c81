//! Icon domain model and the load-once catalog.
//!
//! This module defines the [`Icon`] type, a named glyph the grid can display,
//! and [`Catalog`], the ordered, immutable collection of every icon known to
//! the plugin. The catalog is built exactly once at startup from an
//! [`IconSource`](crate::catalog::IconSource) and never mutated afterwards;
//! every other layer refers to its entries by index.

use serde::{Deserialize, Serialize};

/// A single displayable icon: a name and an opaque glyph payload.
///
/// The `glyph` field is never interpreted by the plugin. It is handed to the
/// terminal verbatim, so it may be a Nerd Font codepoint, an emoji, or any
/// other printable cluster. The `name` is the filter and display key; names
/// are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Display and search name, e.g. `"home-outline"`.
    pub name: String,
    /// Uninterpreted glyph text printed into the grid cell.
    pub glyph: String,
}

impl Icon {
    /// Creates an icon from a name and glyph payload.
    #[must_use]
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
        }
    }
}

/// The full, immutable, ordered collection of icons.
///
/// Insertion order is display order when no filter is active. The catalog is
/// index-stable for the process lifetime: filtering and grid layout hold
/// `usize` indices into it rather than copies, so a visible subset can never
/// diverge from the catalog contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    icons: Vec<Icon>,
}

impl Catalog {
    /// Wraps a loaded icon list into a catalog.
    ///
    /// Called once at startup with the output of an icon source; there are no
    /// mutation operations afterwards.
    #[must_use]
    pub fn new(icons: Vec<Icon>) -> Self {
        Self { icons }
    }

    /// Number of icons in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the catalog holds no icons at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Returns the icon at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Icon> {
        self.icons.get(index)
    }

    /// Iterates over `(index, icon)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Icon)> {
        self.icons.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_preserves_insertion_order() {
        let catalog = Catalog::new(vec![
            Icon::new("alpha", "\u{f015}"),
            Icon::new("beta", "\u{f002}"),
        ]);
        let names: Vec<&str> = catalog.iter().map(|(_, i)| i.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|i| i.name.as_str()), Some("beta"));
        assert!(catalog.get(2).is_none());
    }
}
