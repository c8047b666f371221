use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, warn};

use super::{
    Enrichment, EnrichmentConfig, EnrichmentError, GuessitRestClient, NameGuesser,
    SampleFileGuess,
};
use crate::metainfo::TorrentMeta;
use crate::metrics::ENRICHMENT_LOOKUPS;

/// Gather best-effort guesses for a title, the torrent's info name and the
/// first `max_sample_files` files of its manifest.
///
/// Without a guesser the result is empty. Files are guessed on their basename.
pub async fn enrich(
    guesser: Option<&dyn NameGuesser>,
    title: &str,
    meta: Option<&TorrentMeta>,
    max_sample_files: usize,
) -> Enrichment {
    match guesser {
        Some(guesser) => gather(guesser, title, meta, max_sample_files, None).await,
        None => Enrichment::default(),
    }
}

/// A configured guesser with a per-lookup deadline.
#[derive(Clone)]
pub struct Enricher {
    guesser: Arc<dyn NameGuesser>,
    timeout: Duration,
    max_sample_files: usize,
}

impl Enricher {
    pub fn new(guesser: Arc<dyn NameGuesser>, timeout: Duration, max_sample_files: usize) -> Self {
        Self {
            guesser,
            timeout,
            max_sample_files,
        }
    }

    /// Build an enricher backed by a guessit-rest service.
    pub fn from_config(config: &EnrichmentConfig) -> Result<Self, EnrichmentError> {
        let client = GuessitRestClient::new(config)?;
        Ok(Self::new(
            Arc::new(client),
            Duration::from_secs(config.timeout_secs),
            config.max_sample_files,
        ))
    }

    pub async fn enrich(&self, title: &str, meta: Option<&TorrentMeta>) -> Enrichment {
        gather(
            self.guesser.as_ref(),
            title,
            meta,
            self.max_sample_files,
            Some(self.timeout),
        )
        .await
    }
}

impl std::fmt::Debug for Enricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enricher")
            .field("guesser", &self.guesser.name())
            .field("timeout", &self.timeout)
            .field("max_sample_files", &self.max_sample_files)
            .finish()
    }
}

async fn gather(
    guesser: &dyn NameGuesser,
    title: &str,
    meta: Option<&TorrentMeta>,
    max_sample_files: usize,
    timeout: Option<Duration>,
) -> Enrichment {
    let info_name = meta.and_then(|m| m.name.as_deref()).unwrap_or("");
    let sample_paths: Vec<&str> = meta
        .map(|m| {
            m.files
                .iter()
                .take(max_sample_files)
                .map(|f| f.path.as_str())
                .collect()
        })
        .unwrap_or_default();

    let file_lookups = sample_paths.iter().map(|&path| {
        let basename = path.rsplit('/').next().unwrap_or(path);
        lookup(guesser, basename, timeout)
    });

    let (title_guess, info_guess, file_guesses) = futures::join!(
        lookup(guesser, title, timeout),
        lookup(guesser, info_name, timeout),
        join_all(file_lookups),
    );

    let sample_files = sample_paths
        .into_iter()
        .zip(file_guesses)
        .map(|(path, guess)| SampleFileGuess {
            path: path.to_string(),
            guess,
        })
        .collect();

    Enrichment {
        title: title_guess,
        torrent_info_name: info_guess,
        sample_files,
    }
}

async fn lookup(guesser: &dyn NameGuesser, text: &str, timeout: Option<Duration>) -> Option<Value> {
    if text.is_empty() {
        return None;
    }

    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, guesser.guess(text)).await {
            Ok(result) => result,
            Err(_) => Err(EnrichmentError::Timeout(limit)),
        },
        None => guesser.guess(text).await,
    };

    match result {
        Ok(value) => {
            ENRICHMENT_LOOKUPS.with_label_values(&["ok"]).inc();
            debug!(backend = guesser.name(), text, "Enrichment lookup succeeded");
            Some(value)
        }
        Err(e) => {
            ENRICHMENT_LOOKUPS.with_label_values(&["error"]).inc();
            warn!(backend = guesser.name(), text, error = %e, "Enrichment lookup failed");
            None
        }
    }
}
