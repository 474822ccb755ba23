//! Actions representing side effects to be executed by the runtime shim.
//!
//! This module defines the [`Action`] type: imperative commands produced by
//! the event handler after processing an event. Actions bridge pure state
//! transitions and effectful operations like issuing an HTTP fetch or
//! terminating the input loop.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! runtime shim in `main.rs` executes them in sequence.

/// Commands representing side effects to be executed by the runtime shim.
///
/// Actions are produced by the event handler and executed outside it. They
/// are the only way the state machine reaches the network or the process
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Starts an asynchronous detail fetch for the given name.
    ///
    /// The runtime pushes the request into its in-flight set; the outcome
    /// re-enters the handler as `Event::FetchCompleted` carrying the same
    /// sequence number.
    FetchDetail {
        /// Lowercased entity name to fetch.
        name: String,
        /// Sequence number deciding whether the completion may be applied.
        seq: u64,
    },

    /// Ends the input loop and exits the application.
    Quit,
}
