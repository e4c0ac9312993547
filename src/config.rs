//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Command-line flags override whatever is loaded here.

use dotenv::dotenv;
use std::env;
use crate::error::{Error, Result};

/// Environment variable enabling JSON output.
pub const ENV_JSON: &str = "VERSEFLOW_JSON";
/// Environment variable enabling indented JSON.
pub const ENV_PRETTY: &str = "VERSEFLOW_PRETTY";
/// Environment variable enabling parallel stanza analysis.
pub const ENV_PARALLEL: &str = "VERSEFLOW_PARALLEL";
/// Environment variable holding a tracing filter directive.
pub const ENV_LOG: &str = "VERSEFLOW_LOG";

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Emit JSON instead of the text report
    pub json: bool,
    /// Indent JSON output
    pub pretty: bool,
    /// Analyze stanzas in parallel
    pub parallel: bool,
    /// Tracing filter, e.g. `verseflow=debug`
    pub log_filter: Option<String>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            json: false,
            pretty: false,
            parallel: false,
            log_filter: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_JSON) {
            config.json = parse_flag(ENV_JSON, &value)?;
        }

        if let Some(value) = lookup(ENV_PRETTY) {
            config.pretty = parse_flag(ENV_PRETTY, &value)?;
        }

        if let Some(value) = lookup(ENV_PARALLEL) {
            config.parallel = parse_flag(ENV_PARALLEL, &value)?;
        }

        config.log_filter = lookup(ENV_LOG).filter(|f| !f.trim().is_empty());

        Ok(config)
    }
}

/// Parse a boolean environment value.
fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::config(
            format!("{key} has unrecognized value {other:?}"),
            "Use one of 1/0, true/false, yes/no, on/off",
        )),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert!(!config.json);
        assert!(!config.parallel);
        assert!(config.log_filter.is_none());
        assert_eq!(config.app_name(), "verseflow");
    }

    #[test]
    fn reads_flags() {
        let config = Config::from_lookup(lookup(&[
            (ENV_JSON, "yes"),
            (ENV_PRETTY, "1"),
            (ENV_PARALLEL, "off"),
            (ENV_LOG, "verseflow=trace"),
        ]))
        .unwrap();
        assert!(config.json);
        assert!(config.pretty);
        assert!(!config.parallel);
        assert_eq!(config.log_filter.as_deref(), Some("verseflow=trace"));
    }

    #[test]
    fn rejects_bad_flag() {
        let err = Config::from_lookup(lookup(&[(ENV_JSON, "maybe")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains(ENV_JSON));
    }

    #[test]
    fn blank_log_filter_is_ignored() {
        let config = Config::from_lookup(lookup(&[(ENV_LOG, "  ")])).unwrap();
        assert!(config.log_filter.is_none());
    }
}
