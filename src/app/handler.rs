//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and fetch completions, translating them into state changes and action
//! sequences. It is the search controller of the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the input loop or from resolved fetches
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods and fields
//! 4. Actions are collected and returned for execution
//!
//! # Event Axes
//!
//! The state machine has two independent axes:
//! - the query/suggestion axis (`QueryChanged`) is synchronous, derived
//!   purely from the index, and has no failure mode;
//! - the selected/error axis (`Submit`, `SuggestionTapped`,
//!   `FetchCompleted`) is asynchronous and binary — a completed fetch either
//!   installs a detail card or the fixed error message.
//!
//! Fetch completions carry the sequence number assigned at submit time; a
//! completion that is not newer than the last applied one is discarded, so
//! rapid double submissions always end on the most recently requested name.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Pokemon;

/// The single user-facing message shown for every fetch failure.
///
/// Not-found, transport errors, and malformed payloads all collapse into
/// this; the distinction only survives in the logs.
pub const NOT_FOUND_MESSAGE: &str = "Pokémon not found!";

/// Events triggered by user input or by completed asynchronous work.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search text changed; suggestions are rederived.
    QueryChanged(String),

    /// The user asked to look up a name.
    ///
    /// `name` overrides the current query when set (used by suggestion
    /// taps); otherwise the query itself is submitted. An empty effective
    /// name makes this a strict no-op.
    Submit {
        /// Optional name overriding the current query.
        name: Option<String>,
    },

    /// The user picked a suggestion from the list.
    ///
    /// Equivalent to `QueryChanged(name)` immediately followed by
    /// `Submit { name: Some(name) }`.
    SuggestionTapped(String),

    /// The startup name listing arrived.
    IndexLoaded {
        /// Entity names in the listing's original order.
        names: Vec<String>,
    },

    /// The startup name listing could not be fetched.
    ///
    /// Logged only; the index stays empty and suggestions are silently
    /// unavailable for the session.
    IndexLoadFailed {
        /// Description of the failure, for diagnostics.
        error: String,
    },

    /// A detail fetch resolved.
    FetchCompleted {
        /// Sequence number assigned when the fetch was issued.
        seq: u64,
        /// The fetched record, or the underlying failure rendered for logs.
        outcome: std::result::Result<Pokemon, String>,
    },

    /// The user asked to leave the application.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// A `(should_render, actions)` pair: whether the screen changed, and the
/// side effects the runtime must perform. The vector is empty for purely
/// internal transitions.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the seam uniform
/// with the rest of the crate.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::QueryChanged(text) => {
            state.query.clone_from(text);
            state.apply_suggestions();
            tracing::trace!(query = %state.query, "query updated");
            Ok((true, vec![]))
        }
        Event::Submit { name } => Ok(submit(state, name.clone())),
        Event::SuggestionTapped(name) => {
            tracing::debug!(name = %name, "suggestion tapped");
            state.query.clone_from(name);
            state.apply_suggestions();
            Ok(submit(state, Some(name.clone())))
        }
        Event::IndexLoaded { names } => {
            state.index.install(names.clone());
            // The user may have typed while the listing was in flight.
            state.apply_suggestions();
            Ok((true, vec![]))
        }
        Event::IndexLoadFailed { error } => {
            tracing::warn!(error = %error, "name index load failed - suggestions unavailable");
            Ok((false, vec![]))
        }
        Event::FetchCompleted { seq, outcome } => {
            if !state.accept_fetch(*seq) {
                tracing::debug!(seq = seq, "discarding stale fetch completion");
                return Ok((false, vec![]));
            }

            match outcome {
                Ok(pokemon) => {
                    tracing::debug!(name = %pokemon.name, "detail fetch succeeded");
                    state.selected = Some(pokemon.clone());
                    state.suggestions = vec![];
                    state.error = None;
                }
                Err(cause) => {
                    tracing::debug!(seq = seq, cause = %cause, "detail fetch failed");
                    state.selected = None;
                    state.error = Some(NOT_FOUND_MESSAGE.to_string());
                }
            }
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Issues a detail fetch for the override or the current query.
///
/// An empty effective name changes nothing and emits nothing. Otherwise the
/// name is lowercased, a sequence number is assigned, and a `FetchDetail`
/// action is returned; the query itself is left untouched.
fn submit(state: &mut AppState, name: Option<String>) -> (bool, Vec<Action>) {
    let effective = name.unwrap_or_else(|| state.query.clone());
    if effective.is_empty() {
        tracing::debug!("empty submit ignored");
        return (false, vec![]);
    }

    let seq = state.begin_fetch();
    tracing::debug!(name = %effective, seq = seq, "issuing detail fetch");
    (
        true,
        vec![Action::FetchDetail {
            name: effective.to_lowercase(),
            seq,
        }],
    )
}

/// Short event name for span labels.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::QueryChanged(_) => "QueryChanged",
        Event::Submit { .. } => "Submit",
        Event::SuggestionTapped(_) => "SuggestionTapped",
        Event::IndexLoaded { .. } => "IndexLoaded",
        Event::IndexLoadFailed { .. } => "IndexLoadFailed",
        Event::FetchCompleted { .. } => "FetchCompleted",
        Event::Quit => "Quit",
    }
}
