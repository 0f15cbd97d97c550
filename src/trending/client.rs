//! Upstream API client.
//!
//! Issues a single unauthenticated GET to the trending endpoint and parses
//! the body as a JSON array of `TrendingRepo` records. A non-2xx status is
//! `AppError::FetchFailure`; no retries, no backoff.

use crate::error::{AppError, Result};
use crate::models::TrendingRepo;

pub struct TrendingClient {
    http: reqwest::Client,
    url: String,
}

impl TrendingClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Vec<TrendingRepo>> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|source| AppError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchFailure(status));
        }

        response
            .json::<Vec<TrendingRepo>>()
            .await
            .map_err(|source| AppError::Body { source })
    }
}
