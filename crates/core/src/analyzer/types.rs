use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checks::{AnalysisResult, Category};
use crate::metainfo::TorrentMeta;

/// Errors from [`ReleaseAnalyzer::analyze`](super::ReleaseAnalyzer::analyze).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    /// Neither the caller nor the torrent provided a usable title.
    #[error("Provide a title or upload a torrent with an info name")]
    MissingTitle,
}

/// Input for one analysis.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub category: Category,
    /// Title typed by the caller. Takes precedence over the torrent's name.
    pub title: Option<String>,
    /// Raw `.torrent` bytes.
    pub torrent: Option<Vec<u8>>,
}

impl AnalysisRequest {
    /// Request for a bare title.
    pub fn title(category: Category, title: impl Into<String>) -> Self {
        Self {
            category,
            title: Some(title.into()),
            torrent: None,
        }
    }

    /// Request for an uploaded torrent, optionally with a typed title.
    pub fn torrent(category: Category, title: Option<String>, torrent: Vec<u8>) -> Self {
        Self {
            category,
            title,
            torrent: Some(torrent),
        }
    }
}

/// Outcome of one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub category: Category,
    /// Title the checks ran against.
    pub effective_title: String,
    /// Extracted metadata, when a torrent was supplied.
    pub torrent: Option<TorrentMeta>,
    pub result: AnalysisResult,
}
