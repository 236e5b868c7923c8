// src/submitter.rs

use crate::domain::PlaceholderListing;
use crate::errors::{SeederError, SeederResult};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// Posts placeholder listings to the listings API, one blocking request each.
pub struct ListingSubmitter {
    client: Client,
    url: String,
}

impl ListingSubmitter {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> SeederResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| SeederError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one listing and hand back whatever status the API answered with.
    ///
    /// 4xx/5xx answers are `Ok`; only a failed exchange is an error.
    pub fn submit(&self, listing: &PlaceholderListing) -> SeederResult<StatusCode> {
        let resp = self
            .client
            .post(&self.url)
            .json(listing)
            .send()
            .map_err(|e| SeederError::Network(format!("POST {} failed: {e}", self.url)))?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            tracing::warn!(
                status = status.as_u16(),
                subcategory = %listing.subcategory,
                body = %body,
                "Listings API rejected placeholder"
            );
        }

        Ok(status)
    }
}
