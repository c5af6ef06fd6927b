//! Keytool configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Runtime settings for the key tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeytoolConfig {
    /// Log filter directive (trace, debug, info, warn, error, or EnvFilter syntax)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Directory `generate --write` stores PEM files in
    pub key_dir: PathBuf,
}

impl Default for KeytoolConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
            key_dir: PathBuf::from("."),
        }
    }
}

impl KeytoolConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `NORSH_LOG_LEVEL` or `RUST_LOG`: Log filter (default: warn)
    /// - `NORSH_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `NORSH_KEY_DIR`: Output directory for generated keys (default: .)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Same as [`KeytoolConfig::from_env`] with a custom variable source.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            log_level: lookup("NORSH_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("NORSH_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            key_dir: lookup("NORSH_KEY_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.key_dir),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, log_level: Option<String>, json_logs: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self.json_logs |= json_logs;
        self
    }
}
