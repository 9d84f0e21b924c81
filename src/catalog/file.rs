//! User-supplied catalog files.
//!
//! A `catalog_file` entry in the plugin configuration replaces the built-in
//! icon set with a JSON document from the host filesystem. The path is read
//! once at startup; a missing or malformed file aborts startup rather than
//! leaving the viewer with a partial or mixed catalog.

use crate::catalog::format::parse_catalog;
use crate::catalog::source::IconSource;
use crate::domain::error::Result;
use crate::domain::Icon;
use std::path::PathBuf;

/// An icon catalog backed by a JSON file on the host.
#[derive(Debug, Clone)]
pub struct JsonIconFile {
    /// Location of the catalog document.
    path: PathBuf,
}

impl JsonIconFile {
    /// Creates a source reading from `path`.
    ///
    /// The file is not touched until [`IconSource::load_all`] runs.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IconSource for JsonIconFile {
    fn load_all(&self) -> Result<Vec<Icon>> {
        tracing::debug!(path = ?self.path, "loading catalog file");
        let contents = std::fs::read_to_string(&self.path)?;
        let icons = parse_catalog(&contents, &self.path.to_string_lossy())?;
        tracing::debug!(count = icons.len(), "catalog file loaded");
        Ok(icons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_icons_from_a_file_in_order() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"version":1,"icons":[{{"name":"zig","glyph":"z"}},{{"name":"ada","glyph":"a"}}]}}"#
        )
        .expect("write");

        let icons = JsonIconFile::new(file.path()).load_all().expect("load");
        let names: Vec<&str> = icons.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["zig", "ada"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = JsonIconFile::new("/definitely/not/here.json")
            .load_all()
            .unwrap_err();
        assert!(matches!(err, crate::domain::GlyphgridError::Io(_)));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[1, 2, 3").expect("write");

        let err = JsonIconFile::new(file.path()).load_all().unwrap_err();
        assert!(err.to_string().contains(&*file.path().to_string_lossy()));
    }
}
