//! Application configuration
//!
//! Three base addresses: the primary API, the auth endpoints, and the
//! remote permission authority. Values come from defaults, then an
//! optional TOML file, then `BACKLOG_`-prefixed environment variables,
//! later layers winning.

use backlog_core::{BacklogError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "BACKLOG_";

/// Base addresses the application core points its clients at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base address for primary API requests
    pub api_base: String,
    /// Base address for login and register requests
    pub auth_base: String,
    /// Base address for permission authority requests
    pub authority_base: String,
    /// Base address for the authority's live-update socket
    ///
    /// Carried for the host shell; the core itself opens no socket.
    pub authority_ws_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/".to_string(),
            auth_base: "/".to_string(),
            authority_base: "/authority/".to_string(),
            authority_ws_base: "/authority-ws/".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing keys fall back to defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BacklogError::storage(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| BacklogError::invalid(format!("Invalid config file: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `BACKLOG_API_BASE`, `BACKLOG_AUTH_BASE`,
    /// `BACKLOG_AUTHORITY_BASE`, and `BACKLOG_AUTHORITY_WS_BASE` from
    /// the environment
    pub fn merge_with_env(&mut self) -> Result<()> {
        for (name, slot) in [
            ("API_BASE", &mut self.api_base),
            ("AUTH_BASE", &mut self.auth_base),
            ("AUTHORITY_BASE", &mut self.authority_base),
            ("AUTHORITY_WS_BASE", &mut self.authority_ws_base),
        ] {
            if let Ok(value) = std::env::var(format!("{ENV_PREFIX}{name}")) {
                *slot = value;
            }
        }
        self.validate()
    }

    /// Check that every base address is non-empty and slash-terminated
    ///
    /// Request URLs are built as `base + path`, so a base missing its
    /// trailing slash would silently fuse with the first path segment.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("api_base", &self.api_base),
            ("auth_base", &self.auth_base),
            ("authority_base", &self.authority_base),
            ("authority_ws_base", &self.authority_ws_base),
        ] {
            if value.is_empty() {
                return Err(BacklogError::invalid(format!("{name} must not be empty")));
            }
            if !value.ends_with('/') {
                return Err(BacklogError::invalid(format!(
                    "{name} must end with '/': {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base, "/api/");
        assert_eq!(config.auth_base, "/");
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"api_base = "https://backlog.test/api/""#).unwrap();
        file.flush().unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.api_base, "https://backlog.test/api/");
        // Keys absent from the file keep their defaults.
        assert_eq!(config.auth_base, "/");
    }

    #[test]
    fn test_load_rejects_base_without_trailing_slash() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"api_base = "https://backlog.test/api""#).unwrap();
        file.flush().unwrap();

        assert!(AppConfig::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file_is_storage_error() {
        let result = AppConfig::load_from_file(Path::new("/nonexistent/backlog.toml"));
        assert!(matches!(result, Err(BacklogError::Storage { .. })));
    }

    #[test]
    fn test_ws_base_loads_and_validates_like_the_others() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"authority_ws_base = "wss://authority.test/live/""#).unwrap();
        file.flush().unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.authority_ws_base, "wss://authority.test/live/");

        let bad = AppConfig {
            authority_ws_base: "wss://authority.test/live".into(),
            ..AppConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    // The env overlay reads process-global variables, so one test owns
    // both the override and the rejection path.
    #[test]
    fn test_env_overlay_overrides_then_rejects_bad_value() {
        std::env::set_var("BACKLOG_API_BASE", "https://env.test/api/");
        let mut config = AppConfig::default();
        config.merge_with_env().unwrap();
        assert_eq!(config.api_base, "https://env.test/api/");
        // Variables that are not set leave their slots alone.
        assert_eq!(config.auth_base, "/");

        std::env::set_var("BACKLOG_API_BASE", "https://env.test/api");
        let mut config = AppConfig::default();
        assert!(config.merge_with_env().is_err());
        std::env::remove_var("BACKLOG_API_BASE");
    }

    #[test]
    fn test_validate_rejects_empty_base() {
        let config = AppConfig {
            api_base: String::new(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
