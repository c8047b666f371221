//! Release analysis: ties metadata extraction, title and file checks,
//! verdict aggregation and optional enrichment together.
//!
//! # Example
//!
//! ```ignore
//! use gatekeeper_core::analyzer::{AnalysisRequest, ReleaseAnalyzer};
//! use gatekeeper_core::{Category, PolicyConfig, TokenLists};
//!
//! let analyzer = ReleaseAnalyzer::new(PolicyConfig::default(), TokenLists::default());
//! let request = AnalysisRequest::title(Category::Movie, "Movie.Title.2020.1080p.WEB-DL.H.264-GROUP");
//! let analysis = analyzer.analyze(request).await?;
//! println!("{}", analysis.result.verdict);
//! ```

mod engine;
mod title;
mod types;

pub use engine::ReleaseAnalyzer;
pub use title::resolve_title;
pub use types::{Analysis, AnalysisRequest, AnalyzeError};
