//! The embedded default icon set.
//!
//! When no catalog file is configured, the viewer falls back to a curated set
//! of Nerd Font glyphs compiled into the binary from `assets/icons.json`.

use crate::catalog::format::parse_catalog;
use crate::catalog::source::IconSource;
use crate::domain::error::Result;
use crate::domain::Icon;

/// Catalog document embedded at compile time.
const BUILTIN_CATALOG: &str = include_str!("../../assets/icons.json");

/// The compiled-in icon set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinIcons;

impl IconSource for BuiltinIcons {
    fn load_all(&self) -> Result<Vec<Icon>> {
        let icons = parse_catalog(BUILTIN_CATALOG, "built-in catalog")?;
        tracing::debug!(count = icons.len(), "built-in catalog loaded");
        Ok(icons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_and_is_not_empty() {
        let icons = BuiltinIcons.load_all().expect("embedded catalog parses");
        assert!(!icons.is_empty());
        assert!(icons.iter().all(|i| !i.name.is_empty() && !i.glyph.is_empty()));
    }

    #[test]
    fn builtin_catalog_is_stable_across_loads() {
        let first = BuiltinIcons.load_all().expect("first load");
        let second = BuiltinIcons.load_all().expect("second load");
        assert_eq!(first, second);
    }
}
