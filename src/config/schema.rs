//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::RedirectRule;

/// Root configuration for the redirect service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RedirectorConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Redirect rules declared inline in the config file.
    pub rules: Vec<RedirectRule>,

    /// Optional path to a YAML file holding additional rules.
    ///
    /// File rules are appended after the inline ones, so on duplicate
    /// paths the file wins.
    pub rules_file: Option<String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Whether to expose a Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: RedirectorConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
        assert!(config.rules.is_empty());
        assert!(config.rules_file.is_none());
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_full_config_parses() {
        let raw = r#"
            rules_file = "rules.yaml"

            [listener]
            bind_address = "127.0.0.1:9000"

            [[rules]]
            path = "/docs"
            url = "https://docs.rs/axum"

            [observability]
            metrics_enabled = true
            metrics_address = "127.0.0.1:9191"
        "#;

        let config: RedirectorConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].path, "/docs");
        assert_eq!(config.rules_file.as_deref(), Some("rules.yaml"));
        assert!(config.observability.metrics_enabled);
    }
}
