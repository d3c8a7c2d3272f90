//! Client configuration

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use tracing_subscriber::filter::Directive;

/// Logging output format
#[derive(Debug, Clone, Copy, Deserialize)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::Compact
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Logging {
    /// Additional filtering directives
    #[serde(default, deserialize_with = "Logging::deserialize_filters")]
    pub filters: Vec<Directive>,

    /// Logging format
    #[serde(default)]
    pub format: LogFormat,
}

impl Logging {
    fn deserialize_filters<'de, D>(deserializer: D) -> Result<Vec<Directive>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dirs: Vec<String> = Deserialize::deserialize(deserializer)?;
        dirs.into_iter()
            .map(|dir| dir.parse().map_err(serde::de::Error::custom))
            .collect()
    }
}

/// Navigation guard configuration
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct Guard {
    /// Checks the fine-grained route capabilities in the guard itself
    /// instead of leaving them to the views
    #[serde(default)]
    pub enforce_capabilities: bool,
}

/// Top level client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the panel backend
    pub server: String,

    /// Where the session is persisted between runs
    #[serde(default = "Config::default_state")]
    pub state: PathBuf,

    /// Navigation guard behavior
    #[serde(default)]
    pub guard: Guard,

    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    fn default_state() -> PathBuf {
        PathBuf::from("panel-state.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_only_needs_the_server() {
        let config: Config = toml::from_str(r#"server = "https://panel.example.com""#).unwrap();

        assert_eq!(config.server, "https://panel.example.com");
        assert_eq!(config.state, PathBuf::from("panel-state.json"));
        assert!(!config.guard.enforce_capabilities);
        assert!(config.logging.filters.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let config: Config = toml::from_str(
            r#"
                server = "http://localhost:5312"
                state = "/var/lib/panel/state.json"

                [guard]
                enforce_capabilities = true

                [logging]
                filters = ["panel_client=debug"]
                format = "Pretty"
            "#,
        )
        .unwrap();

        assert_eq!(config.state, PathBuf::from("/var/lib/panel/state.json"));
        assert!(config.guard.enforce_capabilities);
        assert_eq!(config.logging.filters.len(), 1);
        assert!(matches!(config.logging.format, LogFormat::Pretty));
    }

    #[test]
    fn invalid_filter_directive_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
                server = "http://localhost:5312"

                [logging]
                filters = ["=!nonsense!="]
            "#,
        );

        assert!(result.is_err());
    }
}
