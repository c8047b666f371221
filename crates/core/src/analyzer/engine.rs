use tracing::{debug, info};

use super::{resolve_title, Analysis, AnalysisRequest, AnalyzeError};
use crate::checks::{
    aggregate, analyze_files, validate_title, AnalysisResult, Category, CheckResult,
};
use crate::enrichment::{Enricher, Enrichment};
use crate::metainfo::{extract, TorrentMeta};
use crate::metrics::{ANALYSES_TOTAL, CHECK_FAILURES};
use crate::policy::{PolicyConfig, TokenLists};

/// Stateless release validation engine.
///
/// Holds the policy and token lists it was built with; analyses of different
/// inputs can run concurrently on a shared instance.
#[derive(Debug, Clone)]
pub struct ReleaseAnalyzer {
    policy: PolicyConfig,
    tokens: TokenLists,
    enricher: Option<Enricher>,
}

impl ReleaseAnalyzer {
    pub fn new(policy: PolicyConfig, tokens: TokenLists) -> Self {
        Self {
            policy,
            tokens,
            enricher: None,
        }
    }

    /// Attach a name enricher. Its guesses never affect the verdict.
    pub fn with_enricher(mut self, enricher: Enricher) -> Self {
        self.enricher = Some(enricher);
        self
    }

    /// Run the checks on an already resolved title.
    ///
    /// The returned result carries an empty enrichment.
    pub fn evaluate(
        &self,
        category: Category,
        title: &str,
        meta: Option<&TorrentMeta>,
    ) -> AnalysisResult {
        let title_analysis = validate_title(category.as_str(), title, &self.policy, &self.tokens);
        let paths = meta.map(|m| m.file_paths()).unwrap_or_default();
        let file_analysis = analyze_files(&paths);
        let summary = aggregate(&title_analysis, &file_analysis, &self.policy);

        ANALYSES_TOTAL
            .with_label_values(&[summary.verdict.as_str()])
            .inc();
        for check in failing(&title_analysis.checks).chain(failing(&file_analysis.checks)) {
            CHECK_FAILURES.with_label_values(&[check.code.as_str()]).inc();
        }

        debug!(
            category = %category,
            title,
            verdict = %summary.verdict,
            reason_code = ?summary.reason_code,
            "Evaluated release"
        );

        AnalysisResult {
            verdict: summary.verdict,
            reason: summary.reason,
            reason_code: summary.reason_code,
            policy_snapshot: self.policy.snapshot(),
            title_analysis,
            file_analysis,
            enrichment: Enrichment::default(),
        }
    }

    /// Analyze a release end to end.
    ///
    /// Fails only when no title can be resolved from the request.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<Analysis, AnalyzeError> {
        let meta = request.torrent.as_deref().map(extract);
        let effective_title = resolve_title(request.title.as_deref(), meta.as_ref())
            .ok_or(AnalyzeError::MissingTitle)?;

        let mut result = self.evaluate(request.category, &effective_title, meta.as_ref());

        if let Some(enricher) = &self.enricher {
            result.enrichment = enricher.enrich(&effective_title, meta.as_ref()).await;
        }

        info!(
            category = %request.category,
            title = %effective_title,
            info_hash = meta.as_ref().and_then(|m| m.info_hash.as_deref()),
            verdict = %result.verdict,
            "Analysis complete"
        );

        Ok(Analysis {
            category: request.category,
            effective_title,
            torrent: meta,
            result,
        })
    }
}

fn failing(checks: &[CheckResult]) -> impl Iterator<Item = &CheckResult> {
    checks.iter().filter(|c| !c.ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckCode, Verdict};
    use crate::testing::{fixtures, MockNameGuesser};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    const GOOD_MOVIE: &str = "Movie.Title.2020.1080p.WEB-DL.H.264-GROUP";

    fn analyzer() -> ReleaseAnalyzer {
        ReleaseAnalyzer::new(PolicyConfig::default(), TokenLists::default())
    }

    #[tokio::test]
    async fn test_title_only_analysis_warns_without_video() {
        let analysis = analyzer()
            .analyze(AnalysisRequest::title(Category::Movie, GOOD_MOVIE))
            .await
            .unwrap();

        assert_eq!(analysis.effective_title, GOOD_MOVIE);
        assert!(analysis.torrent.is_none());
        assert!(analysis.result.title_analysis.verdict == Verdict::Pass);
        // No manifest means no video file.
        assert_eq!(analysis.result.verdict, Verdict::Warn);
        assert_eq!(analysis.result.reason, None);
    }

    #[tokio::test]
    async fn test_torrent_name_is_used_when_no_title() {
        let bytes = fixtures::single_file_torrent(&format!("{}.mkv", GOOD_MOVIE), 4096);
        let analysis = analyzer()
            .analyze(AnalysisRequest::torrent(Category::Movie, None, bytes))
            .await
            .unwrap();

        assert_eq!(analysis.effective_title, GOOD_MOVIE);
        assert_eq!(analysis.result.verdict, Verdict::Pass);
        let meta = analysis.torrent.unwrap();
        assert!(meta.is_valid());
        assert_eq!(meta.files.len(), 1);
    }

    #[tokio::test]
    async fn test_failing_title_reports_naming_reason() {
        let analysis = analyzer()
            .analyze(AnalysisRequest::title(Category::Movie, "Movie Title 2020 1080p"))
            .await
            .unwrap();

        assert_eq!(analysis.result.verdict, Verdict::Fail);
        assert_eq!(
            analysis.result.reason.as_deref(),
            Some("Naming wrong - use dots instead of spaces or brackets")
        );
        assert_eq!(analysis.result.reason_code, Some(CheckCode::DotStyle));
    }

    #[tokio::test]
    async fn test_malformed_torrent_without_title_is_rejected() {
        let result = analyzer()
            .analyze(AnalysisRequest::torrent(Category::Tv, None, b"not bencode".to_vec()))
            .await;
        assert_eq!(result.unwrap_err(), AnalyzeError::MissingTitle);
    }

    #[tokio::test]
    async fn test_malformed_torrent_with_title_still_analyzes() {
        let analysis = analyzer()
            .analyze(AnalysisRequest::torrent(
                Category::Movie,
                Some(GOOD_MOVIE.to_string()),
                b"d4:infoi1ee".to_vec(),
            ))
            .await
            .unwrap();

        let meta = analysis.torrent.unwrap();
        assert!(!meta.is_valid());
        assert!(meta.files.is_empty());
        assert_eq!(analysis.result.verdict, Verdict::Warn);
    }

    #[test]
    fn test_policy_snapshot_reflects_configuration() {
        let policy = PolicyConfig {
            min_resolution_p: 720,
            objectionable_block_enabled: false,
            ..Default::default()
        };
        let analyzer = ReleaseAnalyzer::new(policy, TokenLists::default());
        let result = analyzer.evaluate(Category::Movie, "Movie.Title.2020.720p.WEB-DL.H.264-GROUP", None);

        assert_eq!(result.policy_snapshot.min_resolution_p, 720);
        assert!(!result.policy_snapshot.objectionable_block_enabled);
        assert_eq!(result.title_analysis.verdict, Verdict::Pass);
    }

    #[tokio::test]
    async fn test_enrichment_is_attached_but_does_not_change_verdict() {
        let guesser = Arc::new(MockNameGuesser::new());
        guesser.set_response(GOOD_MOVIE, json!({"title": "Movie Title", "year": 2020})).await;

        let plain = analyzer()
            .analyze(AnalysisRequest::title(Category::Movie, GOOD_MOVIE))
            .await
            .unwrap();
        let enriched = analyzer()
            .with_enricher(Enricher::new(guesser, Duration::from_secs(1), 10))
            .analyze(AnalysisRequest::title(Category::Movie, GOOD_MOVIE))
            .await
            .unwrap();

        assert_eq!(plain.result.verdict, enriched.result.verdict);
        assert!(plain.result.enrichment.is_empty());
        assert_eq!(
            enriched.result.enrichment.title,
            Some(json!({"title": "Movie Title", "year": 2020}))
        );
    }

    #[test]
    fn test_failed_checks_are_counted() {
        let before = CHECK_FAILURES.with_label_values(&["dot_style"]).get();
        analyzer().evaluate(Category::Tv, "Show Name S01E01", None);
        let after = CHECK_FAILURES.with_label_values(&["dot_style"]).get();
        assert!(after > before);
    }
}
