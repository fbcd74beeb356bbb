//! Environment variable names used by this crate for convenient
//! configuration of the context builder from services.
//!
//! These are purely helpers; the builder itself never reads the
//! environment and only sees the resulting [`ContextConfig`].
//!
//! [`ContextConfig`]: crate::config::ContextConfig

use crate::error::ConfigError;

/// Enable ANSI coloring of the `status` field.
pub const EXCHANGE_LOG_COLOR_ENV: &str = "EXCHANGE_LOG_COLOR";

/// Produce records destined for structured JSON output (suppresses color).
pub const EXCHANGE_LOG_JSON_ENV: &str = "EXCHANGE_LOG_JSON";

/// Read a boolean flag, falling back to `default` when the variable is unset.
pub fn env_flag(key: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => parse_flag(key, &raw),
        Err(_) => Ok(default),
    }
}

pub(crate) fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert!(parse_flag("K", "TRUE").unwrap());
        assert!(parse_flag("K", " on ").unwrap());
        assert!(!parse_flag("K", "0").unwrap());
        assert!(!parse_flag("K", "No").unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_flag("EXCHANGE_LOG_JSON", "maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid boolean value \"maybe\" for EXCHANGE_LOG_JSON"
        );
    }

    #[test]
    fn unset_flag_uses_default() {
        assert!(env_flag("EXCHANGE_LOG_TEST_SURELY_UNSET", true).unwrap());
    }
}
