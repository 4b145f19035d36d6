//! Feed retrieval.
//!
//! A `FeedFetcher` produces the raw bytes of one ARPANSA feed document.
//! The live fetcher performs a single blocking HTTP request; the file
//! fetcher replays a saved copy of the feed for offline use.
//!
//! Submodules:
//! - `arpansa`: wire structures and XML parsing for the UV feed.

pub mod arpansa;

#[cfg(test)]
pub(crate) mod fixtures;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::model::FeedError;

/// Source of one feed document.
pub trait FeedFetcher {
    fn fetch(&self) -> Result<Vec<u8>, FeedError>;
}

// ---------------------------------------------------------------------------
// Live HTTP fetcher
// ---------------------------------------------------------------------------

/// Fetches the feed over HTTP with one blocking request and no retries.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("uvmon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedFetcher for HttpFetcher {
    fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        tracing::info!(url = %self.url, "fetching UV feed");

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/xml, text/xml")
            .send()
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .map_err(|e| FeedError::Unreadable(e.to_string()))?;

        tracing::info!(bytes = body.len(), "UV feed received");
        Ok(body.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Replay fetcher
// ---------------------------------------------------------------------------

/// Reads a previously saved feed document from disk.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedFetcher for FileFetcher {
    fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        tracing::info!(path = %self.path.display(), "replaying UV feed from file");
        fs::read(&self.path)
            .map_err(|e| FeedError::Unreadable(format!("{}: {}", self.path.display(), e)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
