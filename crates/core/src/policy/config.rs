use serde::{Deserialize, Serialize};

/// Policy parameters applied to every analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Minimum vertical resolution (the `1080` in `1080p`).
    #[serde(default = "default_min_resolution_p")]
    pub min_resolution_p: u32,
    /// Whether titles containing objectionable tokens are rejected outright.
    #[serde(default = "default_objectionable_block_enabled")]
    pub objectionable_block_enabled: bool,
    /// Staff-facing reason for naming failures.
    #[serde(default = "default_reason_naming")]
    pub reason_naming: String,
    /// Staff-facing reason for objectionable content.
    #[serde(default = "default_reason_objectionable")]
    pub reason_objectionable: String,
}

fn default_min_resolution_p() -> u32 {
    760
}

fn default_objectionable_block_enabled() -> bool {
    true
}

fn default_reason_naming() -> String {
    "Naming wrong - check you naming".to_string()
}

fn default_reason_objectionable() -> String {
    "No Porn here".to_string()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_resolution_p: default_min_resolution_p(),
            objectionable_block_enabled: default_objectionable_block_enabled(),
            reason_naming: default_reason_naming(),
            reason_objectionable: default_reason_objectionable(),
        }
    }
}

impl PolicyConfig {
    /// Freeze the parameters that determine a verdict.
    pub fn snapshot(&self) -> PolicySnapshot {
        PolicySnapshot {
            min_resolution_p: self.min_resolution_p,
            objectionable_block_enabled: self.objectionable_block_enabled,
        }
    }
}

/// The policy parameters in effect when an analysis ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySnapshot {
    pub min_resolution_p: u32,
    pub objectionable_block_enabled: bool,
}

/// Token lists used by the lexical scans.
///
/// Matching is case-insensitive substring search; the first token in list order
/// that occurs anywhere in the title wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLists {
    /// Telesync/cam/screener-class rips.
    #[serde(default = "default_banned_quality")]
    pub banned_quality: Vec<String>,
    /// Objectionable-content markers.
    #[serde(default = "default_objectionable")]
    pub objectionable: Vec<String>,
}

fn default_banned_quality() -> Vec<String> {
    [
        "TS", "SCREEN", "TELESYNC", "CAM", "HDCAM", "TC", "TELECINE", "SCREENER", "DVDSCR",
        "SCR",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_objectionable() -> Vec<String> {
    [
        "XXX",
        "PORN",
        "HENTAI",
        "ONLYFANS",
        "BRAZZERS",
        "BANGBROS",
        "VIXEN",
        "TUSHY",
        "REALITYKINGS",
        "NAUGHTYAMERICA",
        "DIGITALPLAYGROUND",
        "TEAMSKEET",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for TokenLists {
    fn default() -> Self {
        Self {
            banned_quality: default_banned_quality(),
            objectionable: default_objectionable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let policy = PolicyConfig::default();
        assert_eq!(policy.min_resolution_p, 760);
        assert!(policy.objectionable_block_enabled);
        assert_eq!(policy.reason_naming, "Naming wrong - check you naming");
        assert_eq!(policy.reason_objectionable, "No Porn here");
    }

    #[test]
    fn test_snapshot_copies_verdict_parameters() {
        let policy = PolicyConfig {
            min_resolution_p: 1080,
            objectionable_block_enabled: false,
            ..Default::default()
        };
        assert_eq!(
            policy.snapshot(),
            PolicySnapshot {
                min_resolution_p: 1080,
                objectionable_block_enabled: false,
            }
        );
    }

    #[test]
    fn test_token_lists_partial_override() {
        let toml = r#"
banned_quality = ["CAM"]
"#;
        let lists: TokenLists = toml::from_str(toml).unwrap();
        assert_eq!(lists.banned_quality, vec!["CAM"]);
        assert_eq!(lists.objectionable.first().map(String::as_str), Some("XXX"));
        assert_eq!(lists.objectionable.len(), 12);
    }
}
