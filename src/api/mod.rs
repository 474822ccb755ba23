//! Remote API boundary.
//!
//! [`PokeApi`] is the sole seam between the application and the remote
//! service: two read-only calls, one consumed once at startup and one per
//! search. The controller and its tests only ever see this trait; the
//! `reqwest`-backed [`HttpPokeApi`] lives behind it.

pub mod client;

use crate::domain::{Pokemon, Result};
use async_trait::async_trait;

pub use client::HttpPokeApi;

/// The remote data collaborator consumed by the search screen.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Fetches the name catalog: up to `limit` entity names in the API's
    /// canonical order. Consumed once at startup to populate the index.
    async fn list_names(&self, limit: u32) -> Result<Vec<String>>;

    /// Fetches one entity's full detail record by lowercase name.
    async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon>;
}
