use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Typeahead behaviour settings, persisted as TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeaheadConfig {
    /// Quiet period after the last keystroke before a search is sent.
    pub debounce_ms: u64,
    /// Trimmed queries shorter than this (in characters) are treated as blank.
    pub min_query_len: usize,
    /// Results beyond this count are dropped.
    pub max_results: usize,
    /// A request without a response after this long is failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
            request_timeout_ms: None,
        }
    }
}

impl TypeaheadConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("typeahead.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the list of validation errors, empty if the config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.min_query_len == 0 {
            errors.push("min_query_len must be at least 1".to_string());
        }

        if self.max_results == 0 {
            errors.push("max_results must be at least 1".to_string());
        }

        if self.request_timeout_ms == Some(0) {
            errors.push("request_timeout_ms must be at least 1 when set".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            debounce_ms: self.debounce_ms,
            min_query_len: if self.min_query_len == 0 {
                defaults.min_query_len
            } else {
                self.min_query_len
            },
            max_results: if self.max_results == 0 {
                defaults.max_results
            } else {
                self.max_results
            },
            request_timeout_ms: self.request_timeout_ms.filter(|ms| *ms > 0),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_len() -> usize {
    1
}

fn default_max_results() -> usize {
    50
}

#[cfg(test)]
mod tests;
