use crate::checks::VIDEO_EXTENSIONS;
use crate::metainfo::TorrentMeta;

/// Pick the title to validate.
///
/// A non-blank caller title wins over the torrent's info name. The result is
/// trimmed and loses a trailing `.torrent` and then a trailing video container
/// extension, both matched case-insensitively. Returns `None` when nothing is left.
pub fn resolve_title(user_title: Option<&str>, meta: Option<&TorrentMeta>) -> Option<String> {
    let candidate = user_title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| meta.and_then(|m| m.name.as_deref()).map(str::trim))?;

    let title = strip_suffix_ignore_case(candidate, ".torrent").trim_end();
    let title = VIDEO_EXTENSIONS
        .iter()
        .find_map(|ext| {
            let stripped = strip_suffix_ignore_case(title, ext);
            (stripped.len() != title.len()).then_some(stripped)
        })
        .unwrap_or(title);

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> &'a str {
    if s.len() < suffix.len() {
        return s;
    }
    let split = s.len() - suffix.len();
    match s.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(suffix) => &s[..split],
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_named(name: &str) -> TorrentMeta {
        TorrentMeta {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_user_title_wins() {
        let meta = meta_named("From.Torrent.2020.1080p.WEB-GRP");
        assert_eq!(
            resolve_title(Some("  Typed.2020.1080p.WEB-GRP  "), Some(&meta)).as_deref(),
            Some("Typed.2020.1080p.WEB-GRP")
        );
    }

    #[test]
    fn test_falls_back_to_info_name() {
        let meta = meta_named("From.Torrent.2020.1080p.WEB-GRP");
        assert_eq!(
            resolve_title(None, Some(&meta)).as_deref(),
            Some("From.Torrent.2020.1080p.WEB-GRP")
        );
        assert_eq!(
            resolve_title(Some("   "), Some(&meta)).as_deref(),
            Some("From.Torrent.2020.1080p.WEB-GRP")
        );
    }

    #[test]
    fn test_strips_container_extension() {
        assert_eq!(
            resolve_title(Some("Movie.2020.1080p.WEB-GRP.MKV"), None).as_deref(),
            Some("Movie.2020.1080p.WEB-GRP")
        );
        assert_eq!(
            resolve_title(Some("Movie.2020.1080p.WEB-GRP.m2ts"), None).as_deref(),
            Some("Movie.2020.1080p.WEB-GRP")
        );
    }

    #[test]
    fn test_strips_torrent_then_container_extension() {
        assert_eq!(
            resolve_title(Some("Movie.2020.1080p.WEB-GRP.mkv.torrent"), None).as_deref(),
            Some("Movie.2020.1080p.WEB-GRP")
        );
        assert_eq!(
            resolve_title(Some("Movie.2020.1080p.WEB-GRP.Torrent"), None).as_deref(),
            Some("Movie.2020.1080p.WEB-GRP")
        );
    }

    #[test]
    fn test_only_one_container_extension_is_stripped() {
        assert_eq!(
            resolve_title(Some("a.mkv.mp4"), None).as_deref(),
            Some("a.mkv")
        );
    }

    #[test]
    fn test_nothing_resolvable() {
        assert_eq!(resolve_title(None, None), None);
        assert_eq!(resolve_title(Some(""), Some(&TorrentMeta::default())), None);
        assert_eq!(resolve_title(Some(".torrent"), None), None);
    }

    #[test]
    fn test_non_ascii_title_is_kept() {
        assert_eq!(
            resolve_title(Some("Película.2020.1080p.WEB-GRP"), None).as_deref(),
            Some("Película.2020.1080p.WEB-GRP")
        );
    }
}
