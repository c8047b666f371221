use super::types::{CheckCode, CheckResult, FileAnalysis, Verdict};

/// Container extensions counted as video content (lowercase, with dot).
pub const VIDEO_EXTENSIONS: &[&str] = &[".mkv", ".mp4", ".avi", ".m2ts", ".ts", ".mov", ".wmv"];

/// Whether the path ends with a video container extension (case-insensitive).
pub fn has_video_extension(path: &str) -> bool {
    let lower = path.to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Inspect a file manifest for plausible video content.
///
/// A manifest without any video file only degrades the result to `warn`.
pub fn analyze_files<S: AsRef<str>>(paths: &[S]) -> FileAnalysis {
    let total = paths.len();
    let video_count = paths
        .iter()
        .filter(|p| has_video_extension(p.as_ref()))
        .count();

    let check = if video_count > 0 {
        CheckResult::new(
            true,
            CheckCode::HasVideo,
            format!("Video files detected: {} / {}", video_count, total),
        )
    } else {
        CheckResult::new(
            false,
            CheckCode::HasVideo,
            "No common video extensions found in torrent file list",
        )
    }
    .with_meta("video_count", video_count)
    .with_meta("total", total);

    let verdict = if check.ok { Verdict::Pass } else { Verdict::Warn };

    FileAnalysis {
        verdict,
        checks: vec![check],
    }
}
