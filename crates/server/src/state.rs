use gatekeeper_core::{Config, ReleaseAnalyzer, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    analyzer: ReleaseAnalyzer,
}

impl AppState {
    pub fn new(config: Config, analyzer: ReleaseAnalyzer) -> Self {
        Self { config, analyzer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn analyzer(&self) -> &ReleaseAnalyzer {
        &self.analyzer
    }
}
