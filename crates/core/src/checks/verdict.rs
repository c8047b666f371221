use serde::{Deserialize, Serialize};

use crate::policy::PolicyConfig;

use super::types::{CheckCode, FailureReasonKind, FileAnalysis, TitleAnalysis, Verdict};

/// Staff-facing message for each failing naming check, in evaluation order.
///
/// `porn_block` is answered by the configured objectionable message. Codes not
/// listed here fall back to the configured naming message.
pub const REASON_TABLE: &[(CheckCode, &str)] = &[
    (CheckCode::DotStyle, "Naming wrong - use dots instead of spaces or brackets"),
    (CheckCode::BannedQuality, "Naming wrong - banned quality source"),
    (CheckCode::GroupSuffix, "Naming wrong - missing -GROUP suffix"),
    (CheckCode::PatternMovie, "Naming wrong - does not follow the movie naming scheme"),
    (CheckCode::PatternTv, "Naming wrong - does not follow the TV naming scheme"),
    (CheckCode::MinResolution, "Naming wrong - resolution below the minimum"),
];

/// Look up the fixed message for a failing check code.
pub fn reason_message_for(code: CheckCode) -> Option<&'static str> {
    REASON_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, message)| *message)
}

/// Overall verdict with the single reason shown to staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictSummary {
    pub verdict: Verdict,
    pub reason: Option<String>,
    pub reason_code: Option<CheckCode>,
}

/// Combine the title and file analyses into one verdict.
///
/// A failing title always wins and is explained by its first failing check.
/// Otherwise a file `fail` outranks a file `warn`; neither carries a reason.
pub fn aggregate(
    title: &TitleAnalysis,
    files: &FileAnalysis,
    policy: &PolicyConfig,
) -> VerdictSummary {
    if title.verdict == Verdict::Fail {
        let code = if title.failure_reason_kind == Some(FailureReasonKind::Objectionable) {
            Some(CheckCode::PornBlock)
        } else {
            title.first_failure().map(|check| check.code)
        };

        let reason = match code {
            Some(CheckCode::PornBlock) => policy.reason_objectionable.clone(),
            Some(code) => reason_message_for(code)
                .map(str::to_string)
                .unwrap_or_else(|| policy.reason_naming.clone()),
            None => policy.reason_naming.clone(),
        };

        return VerdictSummary {
            verdict: Verdict::Fail,
            reason: Some(reason),
            reason_code: code,
        };
    }

    VerdictSummary {
        verdict: files.verdict,
        reason: None,
        reason_code: None,
    }
}
