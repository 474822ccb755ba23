//! HTTP client for the two PokeAPI endpoints.
//!
//! [`HttpPokeApi`] is the production implementation of the [`PokeApi`]
//! boundary: a thin `reqwest` wrapper with a configurable base URL and
//! request timeout, a typed GET helper, and explicit status handling so a
//! 404 becomes `NotFound` rather than a generic transport error.
//!
//! Payloads are fetched as text and decoded with `serde_json` in a separate
//! step, so a garbled body surfaces as `Malformed` in the logs instead of
//! disappearing into the transport error bucket.

use crate::api::PokeApi;
use crate::domain::error::{DextermError, Result};
use crate::domain::{NamedResourceList, Pokemon};
use crate::Config;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// How much of an unexpected error body to keep for diagnostics.
const ERROR_BODY_SNIPPET_LEN: usize = 200;

/// PokeAPI client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPokeApi {
    http: Client,
    base_url: String,
}

impl HttpPokeApi {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        if config.api_base.is_empty() {
            return Err(DextermError::Config(
                "api_base must not be empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Makes a GET request and decodes the JSON body into `T`.
    ///
    /// Non-success statuses are mapped before decoding: 404 becomes
    /// [`DextermError::NotFound`] carrying `subject`, everything else
    /// becomes [`DextermError::Api`] with a truncated body snippet.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str, subject: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DextermError::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DextermError::Api {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_SNIPPET_LEN).collect(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PokeApi for HttpPokeApi {
    async fn list_names(&self, limit: u32) -> Result<Vec<String>> {
        let listing: NamedResourceList =
            self.get(&format!("/pokemon?limit={limit}"), "pokemon listing").await?;

        tracing::debug!(name_count = listing.results.len(), "name listing fetched");
        Ok(listing.results.into_iter().map(|r| r.name).collect())
    }

    async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon> {
        self.get(&format!("/pokemon/{name}"), name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let config = Config {
            api_base: "https://pokeapi.co/api/v2/".to_string(),
            ..Config::default()
        };
        let api = HttpPokeApi::new(&config).unwrap();
        assert_eq!(api.base_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = Config {
            api_base: String::new(),
            ..Config::default()
        };
        assert!(matches!(
            HttpPokeApi::new(&config),
            Err(DextermError::Config(_))
        ));
    }
}
