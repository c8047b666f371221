//! Mock name guesser for testing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::enrichment::{EnrichmentError, NameGuesser};

/// Mock implementation of the NameGuesser trait.
///
/// Names without a configured response guess to `{"title": <text>}`.
#[derive(Debug, Default)]
pub struct MockNameGuesser {
    responses: Arc<RwLock<HashMap<String, Value>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    queries: Arc<RwLock<Vec<String>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockNameGuesser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the guess returned for `text`.
    pub async fn set_response(&self, text: &str, guess: Value) {
        self.responses.write().await.insert(text.to_string(), guess);
    }

    /// Make lookups of `text` fail with an API error.
    pub async fn fail_on(&self, text: &str) {
        self.failing.write().await.insert(text.to_string());
    }

    /// Delay every lookup.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }
}

#[async_trait]
impl NameGuesser for MockNameGuesser {
    fn name(&self) -> &str {
        "mock"
    }

    async fn guess(&self, text: &str) -> Result<Value, EnrichmentError> {
        self.queries.write().await.push(text.to_string());

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.read().await.contains(text) {
            return Err(EnrichmentError::ApiError {
                status: 503,
                message: "mock failure".to_string(),
            });
        }

        Ok(self
            .responses
            .read()
            .await
            .get(text)
            .cloned()
            .unwrap_or_else(|| json!({ "title": text })))
    }
}
