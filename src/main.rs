//! Runtime shim and entry point.
//!
//! This module provides the thin integration layer between the dexterm
//! library and the terminal: a line-oriented input loop that maps stdin to
//! library events, executes the resulting actions, and renders on state
//! changes.
//!
//! # Input Protocol
//!
//! Every line is either search text or a `:`-prefixed command:
//!
//! - any plain line → live query text (suggestions reprinted as you type)
//! - `:s [name]` → submit the current query, or `name` if given
//! - `:1` / `:2` / `:3` → tap the numbered suggestion
//! - `:q` → quit
//!
//! An empty line clears the query (and with it the suggestions).
//!
//! # Event Loop
//!
//! The shim runs a current-thread tokio runtime and selects between two
//! sources:
//!
//! ```text
//! ┌─────────────┐        ┌──────────────────────────┐
//! │ stdin lines │──┐  ┌──│ in-flight fetches        │
//! └─────────────┘  │  │  │ (FuturesUnordered)       │
//!                  ▼  ▼  └──────────────────────────┘
//!              map to Event
//!                  │
//!            handle_event ──→ Actions ──→ push fetch / quit
//!                  │
//!            render on change
//! ```
//!
//! The startup name-index load is just the first future in the in-flight
//! set; its failure degrades autocomplete and nothing else. Detail fetches
//! are never cancelled — the state layer discards completions that arrive
//! out of date.

use std::io::Write;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};

use dexterm::api::{HttpPokeApi, PokeApi};
use dexterm::{handle_event, initialize, ui, Action, AppState, Config, Event};

#[tokio::main(flavor = "current_thread")]
async fn main() -> dexterm::Result<()> {
    let config = Config::from_env();
    dexterm::observability::init_tracing(&config);

    let mut state = initialize(&config);
    let api: Arc<dyn PokeApi> = Arc::new(HttpPokeApi::new(&config)?);

    // Everything asynchronous lives here; completed futures re-enter the
    // handler as events.
    let mut arrivals: FuturesUnordered<BoxFuture<'static, Event>> = FuturesUnordered::new();

    // One-time index warm-up. Best effort: on failure the index stays empty
    // and suggestions are silently unavailable.
    {
        let api = Arc::clone(&api);
        let limit = config.index_limit;
        arrivals.push(Box::pin(async move {
            match api.list_names(limit).await {
                Ok(names) => Event::IndexLoaded { names },
                Err(e) => Event::IndexLoadFailed {
                    error: e.to_string(),
                },
            }
        }));
    }

    println!("Type a name to search. :1-:3 taps a suggestion, :s submits, :q quits.");
    ui::render(&state, config.screen_width);
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let event = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    break;
                };
                match map_line(&line, &state) {
                    Some(event) => event,
                    None => {
                        prompt()?;
                        continue;
                    }
                }
            }
            Some(event) = arrivals.next() => event,
        };

        let (should_render, actions) = handle_event(&mut state, &event)?;

        let mut quit = false;
        for action in actions {
            match action {
                Action::FetchDetail { name, seq } => {
                    let api = Arc::clone(&api);
                    arrivals.push(Box::pin(async move {
                        let outcome = api.fetch_pokemon(&name).await.map_err(|e| e.to_string());
                        Event::FetchCompleted { seq, outcome }
                    }));
                }
                Action::Quit => quit = true,
            }
        }
        if quit {
            break;
        }

        if should_render {
            ui::render(&state, config.screen_width);
            prompt()?;
        }
    }

    Ok(())
}

/// Prints the input prompt and flushes so it appears before the read.
fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

/// Maps one input line to a library event.
///
/// Returns `None` for unknown commands and out-of-range suggestion taps;
/// those are logged and otherwise ignored.
fn map_line(line: &str, state: &AppState) -> Option<Event> {
    let line = line.trim_end();

    let Some(command) = line.strip_prefix(':') else {
        return Some(Event::QueryChanged(line.to_string()));
    };

    let mut parts = command.splitn(2, ' ');
    let verb = parts.next().unwrap_or_default();
    match verb {
        "q" | "quit" => Some(Event::Quit),
        "s" | "submit" => Some(Event::Submit {
            name: parts
                .next()
                .map(|rest| rest.trim().to_string())
                .filter(|rest| !rest.is_empty()),
        }),
        _ => match verb.parse::<usize>() {
            Ok(ordinal) => {
                let tapped = ordinal
                    .checked_sub(1)
                    .and_then(|i| state.suggestions.get(i))
                    .cloned();
                if tapped.is_none() {
                    tracing::debug!(ordinal = ordinal, "no such suggestion");
                }
                tapped.map(Event::SuggestionTapped)
            }
            Err(_) => {
                tracing::debug!(command = %verb, "unknown command");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexterm::Theme;

    fn state_with_suggestions() -> AppState {
        let mut state = AppState::new(3, Theme::default());
        state.index.install(vec![
            "charmander".to_string(),
            "charizard".to_string(),
        ]);
        state.query = "char".to_string();
        state.apply_suggestions();
        state
    }

    #[test]
    fn plain_text_becomes_a_query_change() {
        let state = AppState::new(3, Theme::default());
        assert_eq!(
            map_line("char", &state),
            Some(Event::QueryChanged("char".to_string()))
        );
        assert_eq!(
            map_line("", &state),
            Some(Event::QueryChanged(String::new()))
        );
    }

    #[test]
    fn submit_command_carries_an_optional_override() {
        let state = AppState::new(3, Theme::default());
        assert_eq!(map_line(":s", &state), Some(Event::Submit { name: None }));
        assert_eq!(
            map_line(":s pikachu", &state),
            Some(Event::Submit {
                name: Some("pikachu".to_string())
            })
        );
    }

    #[test]
    fn numbered_commands_tap_the_matching_suggestion() {
        let state = state_with_suggestions();
        assert_eq!(
            map_line(":2", &state),
            Some(Event::SuggestionTapped("charizard".to_string()))
        );
        // Out of range and zero are ignored.
        assert_eq!(map_line(":3", &state), None);
        assert_eq!(map_line(":0", &state), None);
    }

    #[test]
    fn quit_and_unknown_commands() {
        let state = AppState::new(3, Theme::default());
        assert_eq!(map_line(":q", &state), Some(Event::Quit));
        assert_eq!(map_line(":frobnicate", &state), None);
    }
}
