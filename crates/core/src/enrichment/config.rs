use serde::{Deserialize, Serialize};

/// Name enrichment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Base URL of a guessit-rest compatible service (e.g., "http://localhost:5000").
    pub url: String,
    /// Timeout for each lookup in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum number of torrent files to guess individually (default: 10).
    #[serde(default = "default_max_sample_files")]
    pub max_sample_files: usize,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_sample_files() -> usize {
    10
}
