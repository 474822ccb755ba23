//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! search screen, along with methods for suggestion derivation, fetch
//! sequencing, and UI view model generation. It serves as the single source
//! of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the installed name index) from derived
//! state (the current suggestion list) to keep state transitions simple. The
//! suggestion list is never edited directly: it is recomputed from the query
//! and the index by [`AppState::apply_suggestions`] after every query change.
//!
//! # State Components
//!
//! - **Index**: Master catalog of known names, installed once at startup
//! - **Query**: The live, user-edited search text
//! - **Suggestions**: Derived subset of the index matching the query
//! - **Selected**: Detail record of the last successfully fetched Pokémon
//! - **Error**: The single user-facing failure message, if any
//! - **Fetch sequencing**: Monotonic counters deciding which asynchronous
//!   fetch completion may be applied
//!
//! # Invariant
//!
//! `selected` and `error` are mutually exclusive outputs of the last applied
//! fetch: at most one of them is set at any time.

use crate::domain::Pokemon;
use crate::index::NameIndex;
use crate::ui::helpers::capitalize;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailCard, HeaderInfo, SearchBarInfo, StatLine, StatusKind, StatusLine, SuggestionItem,
    UIViewModel,
};

/// Central application state container.
///
/// Holds all transient UI state. Mutated by the event handler in response to
/// user input and fetch completions. View models are computed on demand from
/// state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master catalog of known entity names.
    ///
    /// Empty until the startup listing arrives; immutable afterwards.
    /// Suggestions are silently unavailable while it is empty.
    pub index: NameIndex,

    /// Current search query text, mutated on every input line.
    pub query: String,

    /// Names matching the current query, capped at `suggestion_limit`.
    ///
    /// Recomputed by `apply_suggestions()` on query changes, cleared by a
    /// successful fetch. Kept in index order.
    pub suggestions: Vec<String>,

    /// Detail record of the most recently fetched Pokémon, if any.
    ///
    /// Replaced wholesale on each successful fetch, cleared on failure.
    pub selected: Option<Pokemon>,

    /// User-facing error message from the last failed fetch.
    ///
    /// Set on fetch failure, cleared on success and on issuing a new fetch.
    pub error: Option<String>,

    /// Maximum number of suggestions to derive from the index.
    pub suggestion_limit: usize,

    /// Sequence number handed to the most recently issued fetch.
    ///
    /// Zero means no fetch has ever been issued. Incremented by
    /// [`AppState::begin_fetch`].
    pub issued_seq: u64,

    /// Highest sequence number whose completion has been applied.
    ///
    /// A completion with a number at or below this is stale and discarded.
    pub applied_seq: u64,

    /// Sequence number of the fetch the screen is still waiting on.
    ///
    /// Drives the "Searching…" line. Cleared when that fetch (or a newer
    /// one) resolves.
    pub pending_seq: Option<u64>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a fresh state with an empty index and no activity.
    ///
    /// # Parameters
    ///
    /// * `suggestion_limit` - Cap on the derived suggestion list
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(suggestion_limit: usize, theme: Theme) -> Self {
        Self {
            index: NameIndex::new(),
            query: String::new(),
            suggestions: vec![],
            selected: None,
            error: None,
            suggestion_limit,
            issued_seq: 0,
            applied_seq: 0,
            pending_seq: None,
            theme,
        }
    }

    /// Recomputes the suggestion list from the current query and the index.
    ///
    /// An empty query forces an empty list without consulting the index;
    /// otherwise the query is lowercased and matched as a substring against
    /// every name, keeping at most `suggestion_limit` hits in index order.
    pub fn apply_suggestions(&mut self) {
        let _span = tracing::debug_span!(
            "apply_suggestions",
            index_len = self.index.len(),
            query_len = self.query.len()
        )
        .entered();

        self.suggestions = if self.query.is_empty() {
            vec![]
        } else {
            self.index.suggest(&self.query, self.suggestion_limit)
        };

        tracing::debug!(
            suggestion_count = self.suggestions.len(),
            "suggestions recomputed"
        );
    }

    /// Registers a new detail fetch and returns its sequence number.
    ///
    /// Clears any previous error (a fresh attempt supersedes it) and marks
    /// the returned number as pending for the loading indicator.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.pending_seq = Some(self.issued_seq);
        self.error = None;
        self.issued_seq
    }

    /// Decides whether a fetch completion may be applied.
    ///
    /// A completion is accepted only if its sequence number is higher than
    /// everything applied so far; out-of-date responses from rapid double
    /// submissions are rejected. Accepting advances `applied_seq` and clears
    /// the pending marker once the awaited fetch (or a newer one) resolves.
    pub fn accept_fetch(&mut self, seq: u64) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        if self.pending_seq.is_some_and(|pending| pending <= seq) {
            self.pending_seq = None;
        }
        true
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Transforms application state into a structured representation for the
    /// renderer: header with the index size, search bar, numbered
    /// suggestions, an optional status line (error wins over the loading
    /// indicator), and the detail card of the selected Pokémon.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.query.clone(),
            },
            suggestions: self
                .suggestions
                .iter()
                .enumerate()
                .map(|(i, name)| SuggestionItem {
                    ordinal: i + 1,
                    name: name.clone(),
                })
                .collect(),
            status: self.compute_status(),
            card: self.selected.as_ref().map(Self::compute_card),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.index.is_empty() {
            " Pokédex ".to_string()
        } else {
            format!(" Pokédex ({} names) ", self.index.len())
        };
        HeaderInfo { title }
    }

    fn compute_status(&self) -> Option<StatusLine> {
        if let Some(message) = &self.error {
            return Some(StatusLine {
                text: message.clone(),
                kind: StatusKind::Error,
            });
        }
        if self.pending_seq.is_some() {
            return Some(StatusLine {
                text: "Searching…".to_string(),
                kind: StatusKind::Busy,
            });
        }
        None
    }

    /// Builds the detail card for one Pokémon.
    ///
    /// Display names are capitalized the way the search screen shows them;
    /// stats keep the API's order.
    fn compute_card(pokemon: &Pokemon) -> DetailCard {
        DetailCard {
            name: capitalize(&pokemon.name),
            sprite_url: pokemon.sprites.front_default.clone(),
            types: pokemon.types.iter().map(|t| t.kind.name.clone()).collect(),
            stats: pokemon
                .stats
                .iter()
                .map(|s| StatLine {
                    name: capitalize(&s.stat.name),
                    value: s.base_stat,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NamedResource, Sprites, StatEntry, TypeSlot};

    fn state_with_index(names: &[&str]) -> AppState {
        let mut state = AppState::new(3, Theme::default());
        state
            .index
            .install(names.iter().map(ToString::to_string).collect());
        state
    }

    fn pikachu() -> Pokemon {
        Pokemon {
            name: "pikachu".to_string(),
            sprites: Sprites {
                front_default: Some("https://img.example/25.png".to_string()),
            },
            types: vec![TypeSlot {
                kind: NamedResource {
                    name: "electric".to_string(),
                },
            }],
            stats: vec![StatEntry {
                stat: NamedResource {
                    name: "speed".to_string(),
                },
                base_stat: 90,
            }],
        }
    }

    #[test]
    fn apply_suggestions_derives_from_query_and_index() {
        let mut state = state_with_index(&["bulbasaur", "charmander", "charizard", "squirtle"]);
        state.query = "char".to_string();
        state.apply_suggestions();
        assert_eq!(state.suggestions, vec!["charmander", "charizard"]);
    }

    #[test]
    fn apply_suggestions_is_idempotent() {
        let mut state = state_with_index(&["bulbasaur", "charmander"]);
        state.query = "a".to_string();
        state.apply_suggestions();
        let first = state.suggestions.clone();
        state.apply_suggestions();
        assert_eq!(state.suggestions, first);
    }

    #[test]
    fn begin_fetch_is_monotonic_and_clears_error() {
        let mut state = AppState::new(3, Theme::default());
        state.error = Some("Pokémon not found!".to_string());

        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(second > first);
        assert_eq!(state.error, None);
        assert_eq!(state.pending_seq, Some(second));
    }

    #[test]
    fn accept_fetch_rejects_stale_completions() {
        let mut state = AppState::new(3, Theme::default());
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.accept_fetch(second));
        assert!(!state.accept_fetch(first));
        assert_eq!(state.pending_seq, None);
    }

    #[test]
    fn accept_fetch_keeps_pending_while_newest_is_in_flight() {
        let mut state = AppState::new(3, Theme::default());
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // The older fetch resolves first: applied, but the screen still
        // waits on the newer one.
        assert!(state.accept_fetch(first));
        assert_eq!(state.pending_seq, Some(second));
        assert!(state.accept_fetch(second));
        assert_eq!(state.pending_seq, None);
    }

    #[test]
    fn viewmodel_renders_card_with_capitalized_names() {
        let mut state = AppState::new(3, Theme::default());
        state.selected = Some(pikachu());

        let vm = state.compute_viewmodel();
        let card = vm.card.expect("card");
        assert_eq!(card.name, "Pikachu");
        assert_eq!(card.types, vec!["electric"]);
        assert_eq!(card.stats[0].name, "Speed");
        assert_eq!(card.stats[0].value, 90);
        assert!(vm.status.is_none());
    }

    #[test]
    fn viewmodel_error_takes_precedence_over_loading() {
        let mut state = AppState::new(3, Theme::default());
        state.begin_fetch();
        state.error = Some("Pokémon not found!".to_string());

        let vm = state.compute_viewmodel();
        let status = vm.status.expect("status");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Pokémon not found!");
    }
}
