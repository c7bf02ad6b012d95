//! Live backend clients for the two feeds.
//!
//! Backends sit behind traits so the feeds can be driven by mocks in tests;
//! the fallback path never goes through a backend at all.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Observation, StatsSnapshot};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
}

// The feeds run on the UI thread's block_on, so no Send bound is needed on
// the returned futures.
#[allow(async_fn_in_trait)]
pub trait StatsBackend {
    async fn fetch(&self) -> Result<StatsSnapshot, BackendError>;
}

#[allow(async_fn_in_trait)]
pub trait ObservationBackend {
    /// Full collection in descending date order
    async fn fetch_all(&self) -> Result<Vec<Observation>, BackendError>;
}

/// Wire shape of the stats endpoint: the snapshot arrives wrapped in a
/// `stats` field.
#[derive(Debug, Deserialize)]
struct StatsResponse {
    stats: StatsSnapshot,
}

/// GET client for the stats endpoint
#[derive(Clone)]
pub struct HttpStatsBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpStatsBackend {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

impl StatsBackend for HttpStatsBackend {
    async fn fetch(&self) -> Result<StatsSnapshot, BackendError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        let body: StatsResponse = response.json().await?;
        Ok(body.stats)
    }
}

/// GET client for the observations collection. The push subscription on the
/// same base URL lives in `feed::subscription`.
#[derive(Clone)]
pub struct HttpObservationBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpObservationBackend {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/observations", self.base_url.trim_end_matches('/'))
    }

    pub fn subscribe_url(&self) -> String {
        format!("{}/subscribe", self.collection_url())
    }

    pub fn client(&self) -> reqwest::Client {
        self.client.clone()
    }
}

impl ObservationBackend for HttpObservationBackend {
    async fn fetch_all(&self) -> Result<Vec<Observation>, BackendError> {
        let response = self.client.get(self.collection_url()).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        let records: Vec<Observation> = response.json().await?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_urls() {
        let backend = HttpObservationBackend::new(
            reqwest::Client::new(),
            "http://localhost:8787/api/".to_string(),
        );
        assert_eq!(
            backend.collection_url(),
            "http://localhost:8787/api/observations"
        );
        assert_eq!(
            backend.subscribe_url(),
            "http://localhost:8787/api/observations/subscribe"
        );
    }
}
