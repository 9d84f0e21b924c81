//! The JSON catalog document format.
//!
//! Both the embedded default catalog and user-supplied catalog files share
//! one schema: a versioned document wrapping the ordered icon list.
//!
//! ```json
//! {
//!   "version": 1,
//!   "icons": [
//!     { "name": "home", "glyph": "" },
//!     { "name": "search", "glyph": "" }
//!   ]
//! }
//! ```
//!
//! Array order in the document is display order in the grid.

use crate::domain::error::{GlyphgridError, Result};
use crate::domain::Icon;
use serde::Deserialize;

/// Top-level catalog document.
///
/// The version field exists for future migrations; version 1 is the only
/// format so far and unknown versions are rejected rather than guessed at.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    version: u32,
    #[serde(default)]
    icons: Vec<Icon>,
}

/// Highest catalog format version this build understands.
const SUPPORTED_VERSION: u32 = 1;

/// Parses a catalog document, labelling errors with their origin.
///
/// `origin` names the data source ("built-in catalog" or a file path) so load
/// failures at startup say where the bad document came from.
pub fn parse_catalog(source: &str, origin: &str) -> Result<Vec<Icon>> {
    let document: CatalogDocument = serde_json::from_str(source)
        .map_err(|e| GlyphgridError::Catalog(format!("{origin}: {e}")))?;

    if document.version > SUPPORTED_VERSION {
        return Err(GlyphgridError::Catalog(format!(
            "{origin}: unsupported catalog version {}",
            document.version
        )));
    }

    Ok(document.icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_versioned_document_in_order() {
        let icons = parse_catalog(
            r#"{"version":1,"icons":[{"name":"b","glyph":"x"},{"name":"a","glyph":"y"}]}"#,
            "test",
        )
        .expect("valid document");
        let names: Vec<&str> = icons.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn missing_icons_field_defaults_to_empty() {
        let icons = parse_catalog(r#"{"version":1}"#, "test").expect("valid document");
        assert!(icons.is_empty());
    }

    #[test]
    fn rejects_future_versions() {
        let err = parse_catalog(r#"{"version":9,"icons":[]}"#, "test").unwrap_err();
        assert!(err.to_string().contains("unsupported catalog version"));
    }

    #[test]
    fn rejects_malformed_json_with_origin() {
        let err = parse_catalog("not json", "somewhere.json").unwrap_err();
        assert!(err.to_string().contains("somewhere.json"));
    }
}
