//! Error types for dexterm.
//!
//! This module defines the centralized error type [`DextermError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Fetch failures are deliberately folded into a single user-facing message at
//! the state layer; the distinct variants here exist so the logs can tell a
//! missing Pokémon apart from an unreachable network or a garbled payload.

use thiserror::Error;

/// The main error type for dexterm operations.
///
/// Consolidates all error conditions that can occur while talking to the
/// remote API or bootstrapping the application. Transport and decode variants
/// wrap underlying errors from external crates using `#[from]` for automatic
/// conversion.
#[derive(Debug, Error)]
pub enum DextermError {
    /// The HTTP transport failed (connection, TLS, timeout, ...).
    ///
    /// Wraps errors from `reqwest`. Automatically converts using the
    /// `#[from]` attribute.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Terminal or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (the stdin loop,
    /// prompt flushing). Automatically converts from `std::io::Error`.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The API has no entity with the requested name (HTTP 404).
    #[error("no Pokémon named {0:?}")]
    NotFound(String),

    /// The API answered with an unexpected non-success status.
    #[error("api error {status}: {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Truncated response body for diagnostics.
        message: String,
    },

    /// The API answered successfully but the payload did not match the
    /// expected shape.
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are malformed. The string
    /// describes the specific configuration problem.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for dexterm operations.
///
/// This is a type alias for `std::result::Result<T, DextermError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, DextermError>;
