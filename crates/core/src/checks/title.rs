//! Scene-style naming grammar for release titles.

use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};

use crate::policy::{scan_tokens, PolicyConfig, TokenLists};

use super::types::{
    Category, CheckCode, CheckResult, FailureReasonKind, TitleAnalysis, TitleGrammar, Verdict,
};

/// `Title.Words.2020.1080p.[SERVICE.]SOURCE.anything-GROUP`
static MOVIE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?P<title>[A-Za-z0-9]+(?:\.[A-Za-z0-9]+)*)\.",
        r"(?P<year>(?:19|20)\d{2})\.",
        r"(?P<res>\d{3,4})p\.",
        r"(?:(?P<service>[A-Z0-9]{2,6})\.)?",
        r"(?P<source>WEB-DL|WEBRip|WEB|BluRay|BDRip|REMUX|HDTV)\.",
        r".+-",
        r"(?P<group>[A-Za-z0-9]{2,})$",
    ))
    .unwrap()
});

/// `Show.Name.S01E02.1080p.[SERVICE.]SOURCE.anything-GROUP`
static TV_EPISODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?P<show>[A-Za-z0-9]+(?:\.[A-Za-z0-9]+)*)\.",
        r"S(?P<season>\d{2})E(?P<episode>\d{2})\.",
        r"(?P<res>\d{3,4})p\.",
        r"(?:(?P<service>[A-Z0-9]{2,6})\.)?",
        r"(?P<source>WEB-DL|WEBRip|WEB|BluRay|BDRip|REMUX|HDTV)\.",
        r".+-",
        r"(?P<group>[A-Za-z0-9]{2,})$",
    ))
    .unwrap()
});

/// `Show.Name.S01.1080p.[SERVICE.]SOURCE.anything-GROUP` (season pack)
static TV_SEASON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?P<show>[A-Za-z0-9]+(?:\.[A-Za-z0-9]+)*)\.",
        r"S(?P<season>\d{2})\.",
        r"(?P<res>\d{3,4})p\.",
        r"(?:(?P<service>[A-Z0-9]{2,6})\.)?",
        r"(?P<source>WEB-DL|WEBRip|WEB|BluRay|BDRip|REMUX|HDTV)\.",
        r".+-",
        r"(?P<group>[A-Za-z0-9]{2,})$",
    ))
    .unwrap()
});

static GROUP_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"-[A-Za-z0-9]{2,}$").unwrap());

// Heuristic: may pick up digits that are not a resolution token.
static RESOLUTION_FALLBACK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d{3,4})p").unwrap());

/// Validate a release title against the category grammar and the policy.
///
/// Check order is fixed: `porn_block` (only when blocking is enabled),
/// `dot_style`, `banned_quality`, `group_suffix`, `pattern_movie`/`pattern_tv`
/// (or `category` for an unknown category), `min_resolution`.
///
/// A title carrying an objectionable token short-circuits: the analysis then holds
/// only the failing `porn_block` check.
pub fn validate_title(
    category: &str,
    title: &str,
    policy: &PolicyConfig,
    tokens: &TokenLists,
) -> TitleAnalysis {
    let mut checks = Vec::new();

    if policy.objectionable_block_enabled {
        if let Some(hit) = scan_tokens(title, &tokens.objectionable) {
            checks.push(
                CheckResult::new(
                    false,
                    CheckCode::PornBlock,
                    format!("Objectionable keyword detected: {}", hit),
                )
                .with_meta("hit", hit),
            );
            return TitleAnalysis {
                verdict: Verdict::Fail,
                checks,
                failure_reason_kind: Some(FailureReasonKind::Objectionable),
                grammar: None,
            };
        }
        checks.push(CheckResult::new(
            true,
            CheckCode::PornBlock,
            "No objectionable keywords detected",
        ));
    }

    let dotted = !has_spaces_or_parens(title);
    checks.push(if dotted {
        CheckResult::new(true, CheckCode::DotStyle, "No spaces or parentheses")
    } else {
        CheckResult::new(
            false,
            CheckCode::DotStyle,
            "Contains spaces/parentheses (not scene-dot style)",
        )
    });

    checks.push(match scan_tokens(title, &tokens.banned_quality) {
        None => CheckResult::new(true, CheckCode::BannedQuality, "No banned quality tokens"),
        Some(hit) => CheckResult::new(
            false,
            CheckCode::BannedQuality,
            format!("Banned token detected: {}", hit),
        )
        .with_meta("hit", hit),
    });

    let group_present = GROUP_SUFFIX.is_match(title);
    checks.push(if group_present {
        CheckResult::new(true, CheckCode::GroupSuffix, "Ends with -GROUP")
    } else {
        CheckResult::new(false, CheckCode::GroupSuffix, "Missing -GROUP suffix")
    });

    let mut grammar = TitleGrammar {
        group_present,
        ..Default::default()
    };

    match category.parse::<Category>() {
        Ok(category) => {
            let captures = if dotted { match_grammar(category, title) } else { None };
            grammar.matched = captures.is_some();
            checks.push(pattern_check(category, captures.as_ref()));

            grammar.resolution_p = captures
                .as_ref()
                .and_then(|c| c.name("res"))
                .and_then(|m| m.as_str().parse().ok())
                .or_else(|| fallback_resolution(title));
            checks.push(resolution_check(grammar.resolution_p, policy.min_resolution_p));
        }
        Err(e) => {
            checks.push(CheckResult::new(false, CheckCode::Category, e.to_string()));
        }
    }

    let verdict = if checks.iter().all(|c| c.ok) {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    TitleAnalysis {
        verdict,
        checks,
        failure_reason_kind: (verdict == Verdict::Fail).then_some(FailureReasonKind::Naming),
        grammar: Some(grammar),
    }
}

fn has_spaces_or_parens(title: &str) -> bool {
    title
        .chars()
        .any(|c| c.is_whitespace() || c == '(' || c == ')')
}

fn match_grammar(category: Category, title: &str) -> Option<Captures<'_>> {
    match category {
        Category::Movie => MOVIE_PATTERN.captures(title),
        Category::Tv => TV_EPISODE_PATTERN
            .captures(title)
            .or_else(|| TV_SEASON_PATTERN.captures(title)),
    }
}

fn pattern_check(category: Category, captures: Option<&Captures<'_>>) -> CheckResult {
    let (code, ok_message, fail_message) = match category {
        Category::Movie => (
            CheckCode::PatternMovie,
            "Matches Movie pattern",
            "Does not match Movie pattern (needs .YEAR., .RES., source, -GROUP)",
        ),
        Category::Tv => (
            CheckCode::PatternTv,
            "Matches TV Episode/Season pattern",
            "Does not match TV patterns (needs SxxEyy or Sxx, res, source, -GROUP)",
        ),
    };

    let Some(caps) = captures else {
        return CheckResult::new(false, code, fail_message);
    };

    let mut check = CheckResult::new(true, code, ok_message);
    for field in ["year", "season", "episode", "service", "source", "group"] {
        if let Some(m) = caps.name(field) {
            check = check.with_meta(field, m.as_str());
        }
    }
    check
}

fn fallback_resolution(title: &str) -> Option<u32> {
    RESOLUTION_FALLBACK
        .captures(title)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn resolution_check(resolution_p: Option<u32>, min_resolution_p: u32) -> CheckResult {
    match resolution_p {
        None => CheckResult::new(
            false,
            CheckCode::MinResolution,
            "No resolution token found (e.g. 1080p)",
        ),
        Some(res) => {
            let ok = res >= min_resolution_p;
            let message = if ok {
                format!("Resolution token {}p >= {}p", res, min_resolution_p)
            } else {
                format!("Resolution token {}p is below {}p", res, min_resolution_p)
            };
            CheckResult::new(ok, CheckCode::MinResolution, message)
                .with_meta("res_p", res)
                .with_meta("min_res_p", min_resolution_p)
        }
    }
}
