//! Best-effort name enrichment through an external guessit-style service.
//!
//! Enrichment never influences a verdict. Lookups that fail or time out are
//! recorded as absent guesses and the analysis carries on.

mod config;
mod enricher;
mod guessit;
mod types;

pub use config::EnrichmentConfig;
pub use enricher::{enrich, Enricher};
pub use guessit::GuessitRestClient;
pub use types::{Enrichment, SampleFileGuess};

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when looking up a name.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Service returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Lookup did not finish in time.
    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),

    /// Client not configured (bad URL, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Guesses structured metadata (title, year, season, ...) from a release name.
#[async_trait]
pub trait NameGuesser: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    async fn guess(&self, text: &str) -> Result<Value, EnrichmentError>;
}
