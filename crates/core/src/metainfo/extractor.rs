use std::panic;

use librqbit_buffers::ByteBufOwned;
use librqbit_core::torrent_metainfo::{torrent_from_bytes, TorrentMetaV1Owned};
use tracing::{debug, warn};

use crate::metrics::TORRENT_EXTRACTIONS;

use super::{MetainfoError, TorrentFile, TorrentMeta};

/// Extract metadata from raw `.torrent` bytes.
///
/// Never fails: undecodable input yields [`TorrentMeta::default()`], which has
/// every optional field absent and empty lists.
pub fn extract(bytes: &[u8]) -> TorrentMeta {
    match try_extract(bytes) {
        Ok(meta) => {
            TORRENT_EXTRACTIONS.with_label_values(&["ok"]).inc();
            debug!(
                "Extracted torrent metadata: name={:?}, info_hash={:?}, files={}, trackers={}",
                meta.name,
                meta.info_hash,
                meta.files.len(),
                meta.trackers.len()
            );
            meta
        }
        Err(e) => {
            TORRENT_EXTRACTIONS.with_label_values(&["invalid"]).inc();
            warn!("Ignoring unreadable torrent ({} bytes): {}", bytes.len(), e);
            TorrentMeta::default()
        }
    }
}

/// Extract metadata from raw `.torrent` bytes, reporting why extraction failed.
///
/// Extraction is all-or-nothing: a type mismatch in any field rejects the whole
/// torrent. The info hash is the SHA-1 of the `info` dictionary bytes as they
/// appear in the input, captured by the decoder while parsing.
pub fn try_extract(bytes: &[u8]) -> Result<TorrentMeta, MetainfoError> {
    // The decoder panics on some truncated inputs, e.g. a list key at end of buffer.
    let parsed = panic::catch_unwind(|| torrent_from_bytes::<ByteBufOwned>(bytes))
        .map_err(|_| MetainfoError::ParseError("truncated torrent".to_string()))?;
    let torrent: TorrentMetaV1Owned =
        parsed.map_err(|e| MetainfoError::ParseError(e.to_string()))?;

    let info = &torrent.info;
    let name = info.name.as_ref().map(|b| bytes_to_string(b.as_ref()));

    let files = parse_files(&torrent, name.as_deref())?;

    Ok(TorrentMeta {
        name,
        info_hash: Some(torrent.info_hash.as_string()),
        trackers: parse_trackers(&torrent),
        files,
        piece_length: Some(u64::from(info.piece_length)),
    })
}

/// `announce` first, then every `announce-list` tier flattened in order.
fn parse_trackers(torrent: &TorrentMetaV1Owned) -> Vec<String> {
    torrent
        .announce
        .iter()
        .chain(torrent.announce_list.iter().flatten())
        .map(|url| bytes_to_string(url.as_ref()))
        .collect()
}

fn parse_files(
    torrent: &TorrentMetaV1Owned,
    name: Option<&str>,
) -> Result<Vec<TorrentFile>, MetainfoError> {
    let info = &torrent.info;

    if let Some(ref files) = info.files {
        // Multi-file torrent
        let mut result = Vec::with_capacity(files.len());

        for file in files {
            if file.path.is_empty() {
                return Err(MetainfoError::InvalidPath(
                    "file entry has no path components".to_string(),
                ));
            }

            let path = file
                .path
                .iter()
                .map(|part| bytes_to_string(part.as_ref()))
                .collect::<Vec<_>>()
                .join("/");

            result.push(TorrentFile {
                path,
                size: Some(file.length),
            });
        }

        Ok(result)
    } else if let Some(length) = info.length {
        // Single-file torrent
        Ok(vec![TorrentFile {
            path: name.unwrap_or_default().to_string(),
            size: Some(length),
        }])
    } else {
        Ok(Vec::new())
    }
}

/// Convert bytes to a UTF-8 string, replacing invalid sequences.
fn bytes_to_string(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
