//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) once per
//! frame and consumed by the renderer. They contain display-ready data only:
//! the windowed grid rows, the header/footer strings, and the optional search
//! box and empty state. No business logic lives here.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar contents.
    pub header: HeaderInfo,

    /// The last-clicked-icon line (or its placeholder).
    pub result: ResultInfo,

    /// Search box contents, present while the search field is open.
    pub search_bar: Option<SearchBarInfo>,

    /// The windowed icon grid.
    pub grid: GridView,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Message shown in place of the grid when nothing is visible.
    pub empty_state: Option<EmptyState>,
}

/// The rows of the grid that fall inside the scroll window.
#[derive(Debug, Clone)]
pub struct GridView {
    /// Ordered rows of cells, top of the window first. Every row is full
    /// except possibly the last, which may be short.
    pub rows: Vec<Vec<CellView>>,

    /// 1-indexed screen row of the first grid line. Must agree with the
    /// chrome the renderer paints above the grid.
    pub origin_row: usize,

    /// Fixed cell width in character columns.
    pub cell_width: usize,
}

/// One icon cell, ready to paint.
#[derive(Debug, Clone)]
pub struct CellView {
    /// Opaque glyph text, printed verbatim.
    pub glyph: String,

    /// Icon name shown next to the glyph.
    pub name: String,

    /// Byte range of the query match inside `name`, if a filter is active.
    pub highlight: Option<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the visible count and scroll range.
    pub title: String,
}

/// The result line under the header.
#[derive(Debug, Clone)]
pub struct ResultInfo {
    /// Either the selected icon's glyph and name, or the idle hint.
    pub text: String,

    /// Whether `text` is the idle hint rather than a real selection.
    pub is_placeholder: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,
}

/// Empty grid message.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message, e.g. "No icons match".
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
