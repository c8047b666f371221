use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Guesses gathered around an analysis. Every entry is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    /// Guess for the effective title.
    #[serde(default)]
    pub title: Option<Value>,
    /// Guess for the torrent's info name.
    #[serde(default)]
    pub torrent_info_name: Option<Value>,
    /// Guesses for the first few files of the torrent.
    #[serde(default)]
    pub sample_files: Vec<SampleFileGuess>,
}

impl Enrichment {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.torrent_info_name.is_none() && self.sample_files.is_empty()
    }
}

/// Guess for one file from the torrent manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleFileGuess {
    pub path: String,
    #[serde(default)]
    pub guess: Option<Value>,
}
