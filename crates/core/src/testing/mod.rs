//! Testing utilities: a mock name guesser and `.torrent` builders.
//!
//! # Example
//!
//! ```rust,ignore
//! use gatekeeper_core::testing::{fixtures, MockNameGuesser};
//!
//! let guesser = MockNameGuesser::new();
//! guesser.set_response("Movie.2020.1080p.WEB-GRP", json!({"title": "Movie"})).await;
//!
//! let bytes = fixtures::single_file_torrent("Movie.2020.1080p.WEB-GRP.mkv", 4096);
//! ```

mod mock_name_guesser;

pub use mock_name_guesser::MockNameGuesser;

/// Test fixtures and helper functions.
pub mod fixtures {
    use librqbit_bencode::bencode_serialize_to_writer;
    use librqbit_buffers::ByteBufOwned;
    use librqbit_core::torrent_metainfo::{TorrentMetaV1File, TorrentMetaV1Info, TorrentMetaV1Owned};
    use librqbit_core::Id20;

    pub const TRACKER: &str = "http://tracker.example/announce";

    const PIECES: &str = "AAAAAAAAAAAAAAAAAAAA";
    const PIECE_LENGTH: u32 = 262_144;

    fn buf(text: &str) -> ByteBufOwned {
        ByteBufOwned::from(text.as_bytes())
    }

    fn torrent(info: TorrentMetaV1Info<ByteBufOwned>) -> Vec<u8> {
        let torrent = TorrentMetaV1Owned {
            announce: Some(buf(TRACKER)),
            announce_list: Vec::new(),
            info,
            comment: None,
            created_by: None,
            encoding: None,
            publisher: None,
            publisher_url: None,
            creation_date: None,
            info_hash: Id20::default(),
        };

        let mut bytes = Vec::new();
        bencode_serialize_to_writer(&torrent, &mut bytes).expect("fixture torrent serializes");
        bytes
    }

    /// Build a single-file torrent.
    pub fn single_file_torrent(name: &str, length: u64) -> Vec<u8> {
        torrent(TorrentMetaV1Info {
            name: Some(buf(name)),
            pieces: buf(PIECES),
            piece_length: PIECE_LENGTH,
            length: Some(length),
            ..Default::default()
        })
    }

    /// Build a multi-file torrent from `(path components, length)` pairs.
    pub fn multi_file_torrent(name: &str, files: &[(Vec<&str>, u64)]) -> Vec<u8> {
        let files = files
            .iter()
            .map(|(components, length)| TorrentMetaV1File {
                length: *length,
                path: components.iter().map(|c| buf(c)).collect(),
                attr: None,
                sha1: None,
                symlink_path: None,
            })
            .collect();

        torrent(TorrentMetaV1Info {
            name: Some(buf(name)),
            pieces: buf(PIECES),
            piece_length: PIECE_LENGTH,
            files: Some(files),
            ..Default::default()
        })
    }

    /// A season pack with one `.mkv` per episode and an `.nfo`.
    pub fn season_pack(show: &str, season: u32, episodes: u32) -> Vec<u8> {
        let name = format!("{}.S{:02}.1080p.WEB-DL.H.264-GROUP", show, season);
        let episode_names: Vec<String> = (1..=episodes)
            .map(|e| format!("{}.S{:02}E{:02}.1080p.WEB-DL.H.264-GROUP.mkv", show, season, e))
            .collect();

        let mut files: Vec<(Vec<&str>, u64)> = episode_names
            .iter()
            .map(|n| (vec![n.as_str()], 1_500_000_000))
            .collect();
        files.push((vec!["info.nfo"], 2048));

        multi_file_torrent(&name, &files)
    }
}
