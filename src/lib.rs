//! Glyphgrid: a Zellij plugin for browsing a catalog of named glyphs.
//!
//! Glyphgrid shows every icon from its catalog in a responsive grid, filters
//! the catalog as you type, and reports the name of the icon you last
//! clicked. It exists for the daily "what was that Nerd Font glyph called"
//! problem: open the pane, type a fragment, click the icon, read the name.
//!
//! # Architecture
//!
//! The crate is a library with a thin plugin shim:
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Zellij plugin shim (main.rs)                    │  ← host events in,
//! └──────────────────────────────────────────────────┘    actions out
//!                        │
//! ┌──────────────────────────────────────────────────┐
//! │  Application layer (app/)                        │  ← state machine,
//! │  - grid partitioning and click routing           │    filtering, grid
//! │  - substring filtering with change detection     │    layout
//! └──────────────────────────────────────────────────┘
//!         │                       │
//! ┌───────────────┐      ┌───────────────┐
//! │ UI layer      │      │ Catalog layer │
//! │ (ui/)         │      │ (catalog/)    │
//! │ - view models │      │ - built-in set│
//! │ - components  │      │ - JSON files  │
//! │ - themes      │      │               │
//! └───────────────┘      └───────────────┘
//!         │                       │
//! ┌──────────────────────────────────────────────────┐
//! │  Domain, infrastructure, observability           │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Every frame the host reports the pane size; the column count is derived
//! from it on the spot and the visible icons are partitioned into rows. The
//! filter runs only when the query actually changes, never per frame. Clicks
//! are inverted through the same partition that painted the frame, so a
//! click always lands on the icon it visually hit or on nothing.
//!
//! # Configuration
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/glyphgrid.wasm" {
//!         catalog_file "~/.config/glyphgrid/icons.json"
//!         cell_width "22"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - [`app`]: State machine, filtering, grid layout, event handling
//! - [`catalog`]: Icon sources (embedded set, JSON files)
//! - [`domain`]: Core types (icons, catalog, errors)
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: Tracing with file-based OTLP export

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, GridLayout, InputMode};
pub use domain::{Catalog, GlyphgridError, Icon, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// Values arrive as strings from the KDL layout configuration; parsing falls
/// back to defaults rather than failing, except for the catalog file whose
/// load failure is fatal later at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional JSON catalog file replacing the built-in icon set.
    ///
    /// Tilde-prefixed paths are resolved against the sandbox `/host` mount.
    pub catalog_file: Option<String>,

    /// Width of one grid cell in character columns.
    ///
    /// Smaller cells fit more columns but truncate names sooner. Clamped to a
    /// usable minimum by the application state. Default: 20.
    pub cell_width: usize,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`). Ignored if `theme_file`
    /// is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Trace level for the OTLP file exporter (`trace` … `error`).
    /// Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            cell_width: app::DEFAULT_CELL_WIDTH,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's string map.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use glyphgrid::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("cell_width".to_string(), "24".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.cell_width, 24);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let cell_width = config
            .get("cell_width")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(app::DEFAULT_CELL_WIDTH);

        Self {
            catalog_file: config.get("catalog_file").cloned(),
            cell_width,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the viewer state with the built-in icon catalog.
///
/// Resolves the theme (custom file, then named built-in, then default) and
/// publishes the embedded catalog. A configured `catalog_file` is loaded
/// separately by the shim once the host grants filesystem access; see
/// [`catalog::JsonIconFile`].
///
/// # Errors
///
/// Returns an error if the embedded catalog fails to parse, which aborts
/// plugin startup: the viewer never comes up with a partial catalog.
///
/// # Example
///
/// ```
/// use glyphgrid::{initialize, Config};
///
/// let state = initialize(&Config::default()).expect("built-in catalog");
/// assert!(!state.catalog.is_empty());
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing glyphgrid");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let catalog = catalog::load(&catalog::BuiltinIcons)?;
    Ok(AppState::new(catalog, theme, config.cell_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_with_defaults_for_missing_values() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.cell_width, app::DEFAULT_CELL_WIDTH);
        assert!(config.catalog_file.is_none());
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn config_ignores_unparsable_cell_width() {
        let mut map = BTreeMap::new();
        map.insert("cell_width".to_string(), "wide".to_string());
        let config = Config::from_zellij(&map);
        assert_eq!(config.cell_width, app::DEFAULT_CELL_WIDTH);
    }

    #[test]
    fn initialize_publishes_the_builtin_catalog() {
        let state = initialize(&Config::default()).expect("initialize");
        assert!(!state.catalog.is_empty());
        assert_eq!(state.visible.len(), state.catalog.len());
        assert!(state.selection.is_none());
    }

    #[test]
    fn initialize_falls_back_to_default_theme_on_unknown_name() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        let state = initialize(&config).expect("initialize");
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
