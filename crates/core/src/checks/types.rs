//! Types shared by the release checks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::enrichment::Enrichment;
use crate::policy::PolicySnapshot;

/// Release category. Each category has its own naming grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Movie,
    #[serde(rename = "TV")]
    Tv,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movie => "Movie",
            Category::Tv => "TV",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Category names are matched exactly (`Movie`, `TV`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Movie" => Ok(Category::Movie),
            "TV" => Ok(Category::Tv),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Stable identifier of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCode {
    PornBlock,
    DotStyle,
    BannedQuality,
    GroupSuffix,
    PatternMovie,
    PatternTv,
    Category,
    MinResolution,
    HasVideo,
}

impl CheckCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCode::PornBlock => "porn_block",
            CheckCode::DotStyle => "dot_style",
            CheckCode::BannedQuality => "banned_quality",
            CheckCode::GroupSuffix => "group_suffix",
            CheckCode::PatternMovie => "pattern_movie",
            CheckCode::PatternTv => "pattern_tv",
            CheckCode::Category => "category",
            CheckCode::MinResolution => "min_resolution",
            CheckCode::HasVideo => "has_video",
        }
    }
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub ok: bool,
    pub code: CheckCode,
    pub message: String,
    /// Structured evidence (matched token, measured resolution, ...).
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,
}

impl CheckResult {
    pub fn new(ok: bool, code: CheckCode, message: impl Into<String>) -> Self {
        Self {
            ok,
            code,
            message: message.into(),
            meta: None,
        }
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.meta
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }
}

/// Tri-state outcome of an analysis step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Warn => "warn",
            Verdict::Fail => "fail",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a title was blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReasonKind {
    Naming,
    Objectionable,
}

/// Tokens recovered by the naming grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleGrammar {
    /// Whether the category grammar matched.
    pub matched: bool,
    /// Resolution from the grammar, or the first `<digits>p` in the title.
    pub resolution_p: Option<u32>,
    /// Whether the title ends with a `-GROUP` tag.
    pub group_present: bool,
}

/// Result of validating a release title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAnalysis {
    /// `pass` or `fail`.
    pub verdict: Verdict,
    pub checks: Vec<CheckResult>,
    #[serde(default)]
    pub failure_reason_kind: Option<FailureReasonKind>,
    /// Absent when validation stopped at the objectionable-content check.
    #[serde(default)]
    pub grammar: Option<TitleGrammar>,
}

impl TitleAnalysis {
    pub fn first_failure(&self) -> Option<&CheckResult> {
        self.checks.iter().find(|c| !c.ok)
    }
}

/// Result of inspecting a file manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysis {
    /// `pass` or `warn`; `fail` is reserved.
    pub verdict: Verdict,
    pub checks: Vec<CheckResult>,
}

/// The full verdict for a release, returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub reason_code: Option<CheckCode>,
    pub policy_snapshot: PolicySnapshot,
    pub title_analysis: TitleAnalysis,
    pub file_analysis: FileAnalysis,
    #[serde(default)]
    pub enrichment: Enrichment,
}
