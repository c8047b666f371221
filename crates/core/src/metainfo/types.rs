use serde::{Deserialize, Serialize};

/// A file entry from a torrent's manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentFile {
    /// Path relative to the torrent root, `/`-separated.
    pub path: String,
    /// Declared size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

/// Metadata recovered from a `.torrent` file.
///
/// When the input could not be decoded every optional field is `None` and both
/// lists are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentMeta {
    /// The info dictionary's `name`.
    #[serde(default)]
    pub name: Option<String>,
    /// Lowercase hex SHA-1 of the exact bytes of the info dictionary.
    #[serde(default)]
    pub info_hash: Option<String>,
    /// `announce` followed by the flattened `announce-list`, in file order.
    #[serde(default)]
    pub trackers: Vec<String>,
    /// Files in manifest order.
    #[serde(default)]
    pub files: Vec<TorrentFile>,
    /// Declared piece length. Read but never validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_length: Option<u64>,
}

impl TorrentMeta {
    /// Whether the metadata came from a decodable torrent.
    pub fn is_valid(&self) -> bool {
        self.info_hash.is_some()
    }

    /// Sum of all declared file sizes. Files without a size count as zero.
    pub fn total_size(&self) -> u64 {
        self.files.iter().filter_map(|f| f.size).sum()
    }

    pub fn file_paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }
}
