//! End-to-end analysis integration tests.
//!
//! These tests drive the release analyzer from raw `.torrent` bytes and typed
//! titles through to the serialized result:
//! - Title resolution from the torrent's info name
//! - Verdict and reason selection
//! - File manifest warnings
//! - Best-effort enrichment

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use gatekeeper_core::{
    analyzer::{AnalysisRequest, AnalyzeError, ReleaseAnalyzer},
    checks::{CheckCode, FailureReasonKind, Verdict},
    enrichment::Enricher,
    load_config_from_str,
    testing::{fixtures, MockNameGuesser},
    Category, PolicyConfig, TokenLists,
};

fn default_analyzer() -> ReleaseAnalyzer {
    ReleaseAnalyzer::new(PolicyConfig::default(), TokenLists::default())
}

#[tokio::test]
async fn test_season_pack_passes() {
    let bytes = fixtures::season_pack("Show.Name", 1, 3);
    let analysis = default_analyzer()
        .analyze(AnalysisRequest::torrent(Category::Tv, None, bytes))
        .await
        .unwrap();

    assert_eq!(analysis.effective_title, "Show.Name.S01.1080p.WEB-DL.H.264-GROUP");
    assert_eq!(analysis.result.verdict, Verdict::Pass);
    assert!(analysis.result.reason.is_none());

    let meta = analysis.torrent.as_ref().unwrap();
    assert_eq!(meta.files.len(), 4);
    assert_eq!(meta.trackers, vec![fixtures::TRACKER]);
    assert_eq!(meta.info_hash.as_ref().map(String::len), Some(40));
    assert_eq!(meta.total_size(), 3 * 1_500_000_000 + 2048);
}

#[tokio::test]
async fn test_typed_title_overrides_info_name() {
    let bytes = fixtures::season_pack("Show.Name", 1, 2);
    let analysis = default_analyzer()
        .analyze(AnalysisRequest::torrent(
            Category::Tv,
            Some("Show Name Season 1".to_string()),
            bytes,
        ))
        .await
        .unwrap();

    assert_eq!(analysis.effective_title, "Show Name Season 1");
    assert_eq!(analysis.result.verdict, Verdict::Fail);
    assert_eq!(analysis.result.reason_code, Some(CheckCode::DotStyle));
    assert_eq!(
        analysis.result.title_analysis.failure_reason_kind,
        Some(FailureReasonKind::Naming)
    );
}

#[tokio::test]
async fn test_torrent_without_video_warns() {
    let bytes = fixtures::multi_file_torrent(
        "Movie.Title.2020.1080p.BluRay.x264-GROUP",
        &[(vec!["Movie.Title.2020.1080p.BluRay.x264-GROUP.rar"], 1000), (vec!["info.nfo"], 10)],
    );
    let analysis = default_analyzer()
        .analyze(AnalysisRequest::torrent(Category::Movie, None, bytes))
        .await
        .unwrap();

    assert_eq!(analysis.result.title_analysis.verdict, Verdict::Pass);
    assert_eq!(analysis.result.file_analysis.verdict, Verdict::Warn);
    assert_eq!(analysis.result.verdict, Verdict::Warn);
    assert!(analysis.result.reason.is_none());
}

#[tokio::test]
async fn test_objectionable_release_uses_configured_reason() {
    let config = load_config_from_str(
        r#"
[policy]
reason_objectionable = "Not allowed"
"#,
    )
    .unwrap();
    let analyzer = ReleaseAnalyzer::new(config.policy, config.tokens);

    let bytes = fixtures::single_file_torrent("Some.Onlyfans.Clip.2023.1080p.WEB-DL-GRP.mp4", 10);
    let analysis = analyzer
        .analyze(AnalysisRequest::torrent(Category::Movie, None, bytes))
        .await
        .unwrap();

    assert_eq!(analysis.result.verdict, Verdict::Fail);
    assert_eq!(analysis.result.reason.as_deref(), Some("Not allowed"));
    assert_eq!(analysis.result.reason_code, Some(CheckCode::PornBlock));
    assert_eq!(analysis.result.title_analysis.checks.len(), 1);
}

#[tokio::test]
async fn test_garbage_upload_without_title_is_rejected() {
    let result = default_analyzer()
        .analyze(AnalysisRequest::torrent(Category::Movie, None, vec![0xff; 64]))
        .await;
    assert!(matches!(result, Err(AnalyzeError::MissingTitle)));
}

#[tokio::test]
async fn test_result_serializes_with_expected_shape() {
    let analysis = default_analyzer()
        .analyze(AnalysisRequest::title(
            Category::Movie,
            "Movie.Title.2020.720p.WEB-DL.H.264-GROUP",
        ))
        .await
        .unwrap();

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["category"], "Movie");
    assert_eq!(json["result"]["verdict"], "fail");
    assert_eq!(json["result"]["reason_code"], "min_resolution");
    assert_eq!(
        json["result"]["policy_snapshot"],
        json!({"min_resolution_p": 760, "objectionable_block_enabled": true})
    );
    assert_eq!(json["result"]["file_analysis"]["verdict"], "warn");
    assert_eq!(
        json["result"]["enrichment"],
        json!({"title": null, "torrent_info_name": null, "sample_files": []})
    );
}

#[tokio::test]
async fn test_enrichment_covers_title_info_name_and_files() {
    let guesser = Arc::new(MockNameGuesser::new());
    guesser.fail_on("Show.Name.S01E02.1080p.WEB-DL.H.264-GROUP.mkv").await;

    let analyzer = default_analyzer().with_enricher(Enricher::new(
        guesser.clone(),
        Duration::from_secs(1),
        2,
    ));

    let bytes = fixtures::season_pack("Show.Name", 1, 3);
    let analysis = analyzer
        .analyze(AnalysisRequest::torrent(Category::Tv, None, bytes))
        .await
        .unwrap();

    let enrichment = &analysis.result.enrichment;
    assert!(enrichment.title.is_some());
    assert!(enrichment.torrent_info_name.is_some());
    assert_eq!(enrichment.sample_files.len(), 2);
    assert!(enrichment.sample_files[0].guess.is_some());
    assert!(enrichment.sample_files[1].guess.is_none());

    // Title, info name and two sample files.
    assert_eq!(guesser.query_count().await, 4);
    assert_eq!(analysis.result.verdict, Verdict::Pass);
}
