//! Release checks: naming grammar, file manifest and verdict aggregation.
//!
//! Every rule produces a [`CheckResult`]. The order of checks inside a
//! [`TitleAnalysis`] is observable: the aggregator reports the first failing
//! check as the reason.

mod files;
mod title;
mod types;
mod verdict;

pub use files::{analyze_files, has_video_extension, VIDEO_EXTENSIONS};
pub use title::validate_title;
pub use types::*;
pub use verdict::{aggregate, reason_message_for, VerdictSummary, REASON_TABLE};
