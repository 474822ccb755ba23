//! Application layer coordinating state, events, and actions.
//!
//! This module defines the search controller: the event-driven core sitting
//! between the runtime shim (`main.rs`) and the domain/index/api layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Completions ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, NOT_FOUND_MESSAGE};
pub use state::AppState;
