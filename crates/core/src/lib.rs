pub mod analyzer;
pub mod checks;
pub mod config;
pub mod enrichment;
pub mod metainfo;
pub mod metrics;
pub mod policy;
pub mod testing;

pub use analyzer::{resolve_title, Analysis, AnalysisRequest, AnalyzeError, ReleaseAnalyzer};
pub use checks::{
    aggregate, analyze_files, validate_title, AnalysisResult, Category, CheckCode, CheckResult,
    FileAnalysis, TitleAnalysis, UnknownCategory, Verdict,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
};
pub use enrichment::{Enricher, Enrichment, EnrichmentError, NameGuesser};
pub use metainfo::{extract, try_extract, TorrentFile, TorrentMeta};
pub use policy::{scan_tokens, PolicyConfig, PolicySnapshot, TokenLists};
