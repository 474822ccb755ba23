//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application
//! state. View models are created via `AppState::compute_viewmodel()` and
//! consumed by the renderer; they contain no business logic, only
//! display-ready data (capitalized names, numbered suggestions, the already
//! chosen status line).

/// Complete view model for one render of the search screen.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar information.
    pub header: HeaderInfo,

    /// Search box state (the live query).
    pub search_bar: SearchBarInfo,

    /// Numbered autocomplete suggestions, in index order.
    pub suggestions: Vec<SuggestionItem>,

    /// Optional status line; an error outranks the loading indicator.
    pub status: Option<StatusLine>,

    /// Detail card of the selected Pokémon, if one is displayed.
    pub card: Option<DetailCard>,
}

/// Title bar display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the index size once it is loaded.
    pub title: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// One autocomplete suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    /// 1-based ordinal, the number the user types to tap the suggestion.
    pub ordinal: usize,
    /// Suggested entity name.
    pub name: String,
}

/// A one-line status message below the search box.
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Message text.
    pub text: String,
    /// How the line should be styled.
    pub kind: StatusKind,
}

/// Styling category for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A fetch failure; rendered in the error color.
    Error,
    /// A fetch is in flight; rendered dimmed.
    Busy,
}

/// Display information for one Pokémon's detail card.
#[derive(Debug, Clone)]
pub struct DetailCard {
    /// Capitalized display name.
    pub name: String,
    /// Sprite image URL, if the API has one.
    pub sprite_url: Option<String>,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Base stat rows in the API's order.
    pub stats: Vec<StatLine>,
}

/// One base-stat row of the detail card.
#[derive(Debug, Clone)]
pub struct StatLine {
    /// Capitalized stat name (e.g. `"Speed"`).
    pub name: String,
    /// Base stat value.
    pub value: u32,
}
