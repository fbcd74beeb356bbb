use crate::env::{env_flag, EXCHANGE_LOG_COLOR_ENV, EXCHANGE_LOG_JSON_ENV};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only per-call settings for the context builder.
///
/// **Fields**
/// - `color`: wrap the `status` field in an ANSI color directive.
/// - `json`: records are rendered as structured JSON downstream; when
///   `true`, coloring is suppressed regardless of `color`.
/// - `options`: adapter-specific passthrough settings. The builder never
///   looks at them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub color: bool,
    pub json: bool,
    pub options: BTreeMap<String, serde_json::Value>,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
            options: BTreeMap::new(),
        }
    }
}

impl ContextConfig {
    /// Plain-text configuration: no color, no JSON.
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Whether status strings should carry a color directive.
    pub fn colorize(&self) -> bool {
        self.color && !self.json
    }

    /// Look up an adapter passthrough option.
    pub fn option(&self, key: &str) -> Option<&serde_json::Value> {
        self.options.get(key)
    }

    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Build a configuration from `EXCHANGE_LOG_COLOR` / `EXCHANGE_LOG_JSON`,
    /// falling back to [`ContextConfig::default`] for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            color: env_flag(EXCHANGE_LOG_COLOR_ENV, defaults.color)?,
            json: env_flag(EXCHANGE_LOG_JSON_ENV, defaults.json)?,
            options: defaults.options,
        })
    }
}
