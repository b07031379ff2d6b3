use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_PATH_VAR: &str = "PROJECTBOARD_CONFIG";
pub const AUTH_URL_VAR: &str = "PROJECTBOARD_AUTH_URL";
pub const AUTH_KEY_VAR: &str = "PROJECTBOARD_AUTH_KEY";
pub const LOG_VAR: &str = "PROJECTBOARD_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,

    /// `tracing` filter directive, e.g. `projectboard=debug`
    pub log_filter: String,

    /// Simulated latency of the reports "refresh" action
    pub refresh_delay_ms: u64,

    /// How long a toast stays on screen
    pub toast_ttl_ms: u64,

    /// Directory exported reports are written to
    pub export_dir: PathBuf,

    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Base URL of the auth provider, e.g. `https://xyz.supabase.co`
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Projectboard".to_string(),
            window_width: 1400.0,
            window_height: 900.0,
            log_filter: "projectboard=info".to_string(),
            refresh_delay_ms: 1000,
            toast_ttl_ms: 4000,
            export_dir: PathBuf::from("."),
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the file named by `PROJECTBOARD_CONFIG` (defaults when unset or
    /// missing), then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(AUTH_URL_VAR) {
            self.auth.base_url = Some(url);
        }
        if let Some(key) = lookup(AUTH_KEY_VAR) {
            self.auth.api_key = Some(key);
        }
        if let Some(filter) = lookup(LOG_VAR) {
            self.log_filter = filter;
        }
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            refresh_delay_ms = 250

            [auth]
            base_url = "https://auth.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.refresh_delay(), Duration::from_millis(250));
        assert_eq!(config.auth.base_url.as_deref(), Some("https://auth.example.com"));
        assert_eq!(config.auth.api_key, None);
        assert_eq!(config.window_title, "Projectboard");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(AUTH_KEY_VAR, "anon-key"), (LOG_VAR, "projectboard=debug")].into();
        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.auth.api_key.as_deref(), Some("anon-key"));
        assert_eq!(config.log_filter, "projectboard=debug");
        assert_eq!(config.auth.base_url, None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "refresh_delay_ms = \"soon\"").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }
}
