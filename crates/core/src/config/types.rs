use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::enrichment::EnrichmentConfig;
use crate::policy::{PolicyConfig, TokenLists};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub tokens: TokenLists,
    #[serde(default)]
    pub enrichment: Option<EnrichmentConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum request body size for uploads, in bytes (default: 32 MiB).
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    32 * 1024 * 1024
}

/// Sanitized config for API responses (token lists summarized)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub policy: PolicyConfig,
    pub tokens: SanitizedTokenLists,
    pub enrichment: SanitizedEnrichmentConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedTokenLists {
    pub banned_quality_count: usize,
    pub objectionable_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedEnrichmentConfig {
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sample_files: Option<usize>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            policy: config.policy.clone(),
            tokens: SanitizedTokenLists {
                banned_quality_count: config.tokens.banned_quality.len(),
                objectionable_count: config.tokens.objectionable.len(),
            },
            enrichment: SanitizedEnrichmentConfig {
                configured: config.enrichment.is_some(),
                url: config.enrichment.as_ref().map(|e| e.url.clone()),
                timeout_secs: config.enrichment.as_ref().map(|e| e.timeout_secs),
                max_sample_files: config.enrichment.as_ref().map(|e| e.max_sample_files),
            },
        }
    }
}
