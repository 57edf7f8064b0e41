//! HTTP client for the school directory endpoint.
//!
//! Issues a single GET per call. Non-2xx responses, transport failures, and
//! bodies that are not a directory document all surface as [`NetworkError`].

use std::future::Future;
use std::time::Duration;

use beacon_core::{AppConfig, SchoolRecord};
use reqwest::{Client, Url};

use crate::error::NetworkError;
use crate::types::DirectoryResponse;

/// Anything that can produce the raw school dataset.
///
/// [`DirectoryClient`] is the production implementation; the view runtime is
/// generic over this so it can be driven by in-memory sources.
pub trait DirectorySource {
    fn fetch_directory(&self) -> impl Future<Output = Result<Vec<SchoolRecord>, NetworkError>>;
}

/// Client for the remote school directory.
pub struct DirectoryClient {
    client: Client,
    url: Url,
}

impl DirectoryClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NetworkError::InvalidUrl`] if the
    /// configured directory URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, NetworkError> {
        Self::new(
            &config.directory_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an explicit URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NetworkError::InvalidUrl`] if `url` does
    /// not parse.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(url).map_err(|e| NetworkError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            url: parsed,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches and validates the full directory.
    ///
    /// Entries with unusable coordinates are kept with `coordinates: None`.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::Http`] on network failure.
    /// - [`NetworkError::UnexpectedStatus`] on any non-2xx status.
    /// - [`NetworkError::Deserialize`] if the body is not a directory document.
    pub async fn fetch_directory(&self) -> Result<Vec<SchoolRecord>, NetworkError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.text().await?;
        let document: DirectoryResponse =
            serde_json::from_str(&body).map_err(|e| NetworkError::Deserialize {
                context: self.url.to_string(),
                source: e,
            })?;

        let records: Vec<SchoolRecord> = document
            .schools
            .into_iter()
            .map(crate::types::SchoolEntry::into_record)
            .collect();

        let without_coordinates = records.iter().filter(|r| r.coordinates.is_none()).count();
        if without_coordinates > 0 {
            tracing::debug!(
                without_coordinates,
                "directory entries without usable coordinates"
            );
        }
        tracing::info!(count = records.len(), url = %self.url, "directory fetched");

        Ok(records)
    }
}

impl DirectorySource for DirectoryClient {
    fn fetch_directory(&self) -> impl Future<Output = Result<Vec<SchoolRecord>, NetworkError>> {
        DirectoryClient::fetch_directory(self)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
