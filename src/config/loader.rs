//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RedirectorConfig;
use crate::routing::rules::{decode_rules, DecodeError, RedirectRule};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Rules(DecodeError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Rules(e) => write!(f, "Rule decode error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RedirectorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RedirectorConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

/// Assemble the complete rule list for a config.
///
/// Inline rules come first, followed by the contents of `rules_file` when
/// one is set, so file rules win on duplicate paths once the table applies
/// last-write-wins.
pub fn load_rules(config: &RedirectorConfig) -> Result<Vec<RedirectRule>, ConfigError> {
    let mut rules = config.rules.clone();
    if let Some(path) = &config.rules_file {
        let raw = fs::read(path).map_err(ConfigError::Io)?;
        rules.extend(decode_rules(&raw).map_err(ConfigError::Rules)?);
    }
    Ok(rules)
}
