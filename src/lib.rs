//! dexterm: a terminal Pokédex with live autocomplete search.
//!
//! dexterm is a single-screen terminal application that provides:
//! - Name search with substring autocomplete over a pre-fetched catalog of
//!   ~1000 Pokémon names
//! - Detail lookup against PokeAPI (sprite URL, types, base stats)
//! - A pure, event-driven state machine testable without a terminal or a
//!   network
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime Shim (main.rs)                             │  ← Input loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Name Index    │   │ API Layer     │
//! │ (ui/)         │   │ (index/)      │   │ (api/)        │
//! │ - Rendering   │   │ - Catalog     │   │ - PokeApi     │
//! │ - Theming     │   │ - Substring   │   │   trait       │
//! │ - Components  │   │   lookup      │   │ - reqwest     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Observability Layers                      │
//! │  - Wire types (domain/pokemon)                      │
//! │  - Error types (domain/error)                       │
//! │  - Tracing setup (observability/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! 1. **Startup** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, kick off the one-time name index load
//! 2. **Input**: each stdin line maps to an [`Event`]
//! 3. **Handling**: [`handle_event`] mutates state and emits [`Action`]s
//! 4. **Effects**: the shim executes actions — detail fetches join the
//!    in-flight set, and their completions re-enter as events
//! 5. **Rendering**: on state changes the UI layer prints a fresh screen
//!    block
//!
//! Both asynchronous operations (the startup index load and per-search
//! detail fetches) suspend cooperatively; the input loop stays responsive
//! while they are in flight. In-flight fetches are never cancelled — stale
//! completions are discarded by sequence number instead, so the screen
//! always reflects the most recent submission.
//!
//! # Example
//!
//! ```
//! use dexterm::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! state.index.install(vec!["pikachu".to_string(), "pidgey".to_string()]);
//! let (_, actions) = handle_event(&mut state, &Event::QueryChanged("pika".into()))?;
//! assert!(actions.is_empty());
//! assert_eq!(state.suggestions, vec!["pikachu"]);
//! # Ok::<(), dexterm::DextermError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod index;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, NOT_FOUND_MESSAGE};
pub use domain::{DextermError, Pokemon, Result};
pub use index::NameIndex;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Application configuration.
///
/// Values are read from `DEXTERM_`-prefixed environment variables (see
/// [`Config::from_env`]) with per-key fallbacks to the defaults below. The
/// base URL override exists mostly so tests and mirrors can point the client
/// elsewhere.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote API. Default: `https://pokeapi.co/api/v2`
    pub api_base: String,

    /// Maximum number of names fetched for the index. Default: 1000
    pub index_limit: u32,

    /// Cap on the autocomplete suggestion list. Default: 3
    pub suggestion_limit: usize,

    /// Per-request HTTP timeout in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Width in columns of the rendered screen blocks. Default: 64
    pub screen_width: usize,

    /// Built-in theme name to use. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level when `RUST_LOG` is unset (`trace` ... `error`).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://pokeapi.co/api/v2".to_string(),
            index_limit: 1000,
            suggestion_limit: 3,
            request_timeout_secs: 10,
            screen_width: 64,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Keys: `api_base`, `index_limit`, `suggestion_limit`,
    /// `request_timeout_secs`, `screen_width`, `theme`, `theme_file`,
    /// `trace_level`. Unparseable numeric values fall back to the defaults
    /// rather than failing.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use dexterm::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base".to_string(), "http://localhost:8080".to_string());
    /// map.insert("suggestion_limit".to_string(), "5".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_base, "http://localhost:8080");
    /// assert_eq!(config.suggestion_limit, 5);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            api_base: map
                .get("api_base")
                .cloned()
                .unwrap_or(defaults.api_base),
            index_limit: map
                .get("index_limit")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.index_limit),
            suggestion_limit: map
                .get("suggestion_limit")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.suggestion_limit),
            request_timeout_secs: map
                .get("request_timeout_secs")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            screen_width: map
                .get("screen_width")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.screen_width),
            theme_name: map.get("theme").cloned(),
            theme_file: map.get("theme_file").cloned(),
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Reads configuration from `DEXTERM_`-prefixed environment variables.
    ///
    /// `DEXTERM_API_BASE` maps to the `api_base` key, `DEXTERM_THEME` to
    /// `theme`, and so on; parsing then follows [`Config::from_map`].
    #[must_use]
    pub fn from_env() -> Self {
        let map: BTreeMap<String, String> = std::env::vars()
            .filter_map(|(key, value)| {
                key.strip_prefix("DEXTERM_")
                    .map(|stripped| (stripped.to_lowercase(), value))
            })
            .collect();

        Self::from_map(&map)
    }
}

/// Initializes the application state from configuration.
///
/// Resolves the theme (custom file, then built-in name, then the default)
/// and creates a fresh [`AppState`] with an empty index; the index is
/// populated later by the startup fetch.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing dexterm");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.suggestion_limit, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_the_reference_limits() {
        let config = Config::default();
        assert_eq!(config.index_limit, 1000);
        assert_eq!(config.suggestion_limit, 3);
    }

    #[test]
    fn config_falls_back_on_unparseable_numbers() {
        let mut map = BTreeMap::new();
        map.insert("index_limit".to_string(), "lots".to_string());
        let config = Config::from_map(&map);
        assert_eq!(config.index_limit, 1000);
    }

    #[test]
    fn initialize_starts_with_a_blank_screen() {
        let state = initialize(&Config::default());
        assert!(state.index.is_empty());
        assert!(state.query.is_empty());
        assert!(state.suggestions.is_empty());
        assert!(state.selected.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "sky");
    }
}
