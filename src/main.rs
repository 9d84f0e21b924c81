//! Zellij plugin wrapper and entry point.
//!
//! The thin integration layer between the Glyphgrid library and the Zellij
//! plugin runtime. It owns no viewer logic: host events are translated into
//! library events, returned actions become Zellij API calls, and rendering is
//! delegated wholesale.
//!
//! # Plugin lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, publish the built-in
//!    catalog, request filesystem access if a catalog file is configured
//! 2. **Permission grant**: load the configured catalog file, fatally if it
//!    cannot be read or parsed
//! 3. **Update**: translate key/mouse events, delegate to `handle_event`
//! 4. **Render**: record the pane size, paint the frame
//!
//! # Event mapping
//!
//! Normal mode:
//! - `j`/`k`/arrows: scroll by one row, PageUp/PageDown by one window
//! - `/`: open the search box
//! - `Esc`: clear an active filter
//! - `q`: close the plugin
//!
//! Search mode:
//! - printable characters / `Backspace`: edit the query (filtering live)
//! - `Enter`: close the box and keep the filter
//! - `Esc`: discard the query
//!
//! Any mode: left click selects the icon under the pointer; `Hold` and
//! `Release` mouse events are deliberately dropped so a held or dragged
//! button selects exactly once, on the press edge.

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use glyphgrid::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper: the library state plus host-side bookkeeping.
struct State {
    /// Core application state from the library layer.
    app: glyphgrid::AppState,

    /// Parsed plugin configuration, kept for the deferred catalog load.
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        // Placeholder until load() runs; replaced by the real catalog there.
        Self {
            app: glyphgrid::AppState::new(
                glyphgrid::Catalog::new(vec![]),
                glyphgrid::Theme::default(),
                glyphgrid::app::DEFAULT_CELL_WIDTH,
            ),
            config: Config::default(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Publishes the built-in catalog immediately; a configured catalog file
    /// replaces it as soon as the host grants filesystem access. A failure to
    /// load any catalog aborts startup.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        glyphgrid::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(cell_width = config.cell_width, "plugin loading started");
        self.app = match glyphgrid::initialize(&config) {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, "fatal: icon catalog failed to load");
                panic!("glyphgrid: icon catalog failed to load: {e}");
            }
        };

        if config.catalog_file.is_some() {
            tracing::debug!("catalog file configured, requesting filesystem access");
            request_permission(&[PermissionType::FullHdAccess]);
        }

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::PermissionRequestResult,
        ]);

        self.config = config;
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` when the UI needs a repaint.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let span = tracing::debug_span!("plugin_update", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(ref mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// The pane size is the frame input: it is recorded on the state (the
    /// column count derives from it) before the frame is painted.
    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        glyphgrid::ui::render(&self.app);
    }
}

impl State {
    /// Maps keyboard events to library events according to the input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.input_mode {
            InputMode::Normal => match key.bare_key {
                BareKey::Char('q') => Some(Event::CloseFocus),
                BareKey::Char('/') => Some(Event::SearchMode),
                BareKey::Esc => Some(Event::Escape),
                BareKey::Down | BareKey::Char('j') => Some(Event::ScrollDown),
                BareKey::Up | BareKey::Char('k') => Some(Event::ScrollUp),
                BareKey::PageDown => Some(Event::PageDown),
                BareKey::PageUp => Some(Event::PageUp),
                _ => None,
            },
            InputMode::Search => match key.bare_key {
                BareKey::Esc => Some(Event::Escape),
                BareKey::Enter => Some(Event::AcceptSearch),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Down => Some(Event::ScrollDown),
                BareKey::Up => Some(Event::ScrollUp),
                BareKey::PageDown => Some(Event::PageDown),
                BareKey::PageUp => Some(Event::PageUp),
                BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => {
                    Some(Event::Char(c))
                }
                _ => None,
            },
        }
    }

    /// Maps mouse events to library events.
    ///
    /// Only the press edge of the left button selects; `Hold` and `Release`
    /// fall through to `None`.
    fn map_mouse_event(mouse: &Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let line = usize::try_from(*line).ok()?;
                Some(Event::Click { line, col: *col })
            }
            Mouse::ScrollUp(_) => Some(Event::ScrollUp),
            Mouse::ScrollDown(_) => Some(Event::ScrollDown),
            _ => None,
        }
    }

    /// Completes startup once filesystem access is decided.
    ///
    /// On grant, the configured catalog file replaces the built-in set; a
    /// file that cannot be read or parsed aborts startup. On denial the
    /// built-in set stays.
    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted => {
                let Some(path) = self.config.catalog_file.clone() else {
                    return false;
                };
                let path = glyphgrid::infrastructure::expand_tilde(&path);
                tracing::debug!(path = %path, "loading configured catalog file");

                let source = glyphgrid::catalog::JsonIconFile::new(path);
                match glyphgrid::catalog::load(&source) {
                    Ok(catalog) => {
                        self.app.replace_catalog(catalog);
                        true
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "fatal: configured catalog failed to load");
                        panic!("glyphgrid: configured catalog failed to load: {e}");
                    }
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("filesystem access denied, keeping built-in catalog");
                false
            }
        }
    }

    /// Executes an action returned from event handling.
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }

    /// Short event name for span labels.
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }
}
