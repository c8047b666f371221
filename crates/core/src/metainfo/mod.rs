//! Torrent metadata extraction.
//!
//! Recovers the release name, info hash, trackers and file manifest from raw
//! `.torrent` bytes (BitTorrent v1 metainfo). Payload data is never touched.
//! Decoding and info-hash capture are done by `librqbit-core`.

mod extractor;
mod types;

pub use extractor::{extract, try_extract};
pub use types::{TorrentFile, TorrentMeta};

use thiserror::Error;

/// Errors that can occur when extracting torrent metadata.
#[derive(Debug, Error)]
pub enum MetainfoError {
    #[error("Failed to parse torrent: {0}")]
    ParseError(String),

    #[error("Invalid file path in torrent: {0}")]
    InvalidPath(String),
}
