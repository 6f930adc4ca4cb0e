//! Configuration file handling
//!
//! The app runs fine with no configuration at all. A JSON file can change the
//! endpoint, the settling delay, the request timeout and the wheel's names;
//! command-line flags override file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::submission::DEFAULT_ENDPOINT;
use crate::wheel::{DEFAULT_CANDIDATES, DEFAULT_SETTLE_DELAY};

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Alias endpoint receiving `POST {email, name}`
    pub endpoint: String,
    /// Wheel settling delay in milliseconds
    pub settle_delay_ms: u64,
    /// Whole-request timeout in seconds; absent means wait indefinitely
    pub request_timeout_secs: Option<u64>,
    /// Names on the wheel shown after a successful submission
    pub candidates: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
            request_timeout_secs: None,
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file; missing keys take their defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Apply command-line overrides on top of file/default values
    pub fn apply_overrides(&mut self, endpoint: Option<String>, settle_delay_ms: Option<u64>) {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(ms) = settle_delay_ms {
            self.settle_delay_ms = ms;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            anyhow::bail!("Endpoint must be specified");
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            anyhow::bail!("Endpoint must be an http:// or https:// URL");
        }

        if self.request_timeout_secs == Some(0) {
            anyhow::bail!("Request timeout must be at least one second");
        }

        validate_candidates(&self.candidates)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Check a wheel's names: at least one, none blank, no duplicates
pub fn validate_candidates(candidates: &[String]) -> Result<()> {
    if candidates.is_empty() {
        anyhow::bail!("Wheel needs at least one candidate name");
    }
    let mut seen = HashSet::new();
    for name in candidates {
        if name.trim().is_empty() {
            anyhow::bail!("Wheel candidate names cannot be blank");
        }
        if !seen.insert(name.as_str()) {
            anyhow::bail!("Duplicate wheel candidate: {}", name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.candidates.len(), 8);
        assert_eq!(config.settle_delay(), Duration::from_millis(3000));
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_load_full_file() {
        let mut config = AppConfig::default();
        config.endpoint = "https://santa.example/api/users".to_string();
        config.request_timeout_secs = Some(10);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"settle_delay_ms": 500}}"#).unwrap();

        let loaded = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.settle_delay_ms, 500);
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(loaded.candidates.len(), 8);
    }

    #[test]
    fn test_load_nonexistent_file() {
        assert!(AppConfig::load_from_file("/nonexistent/santa.json").is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(AppConfig::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_endpoint() {
        let mut config = AppConfig::default();
        config.endpoint = "  ".to_string();
        assert!(config.validate().is_err());

        config.endpoint = "ftp://santa".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_candidates() {
        let mut config = AppConfig::default();
        config.candidates.clear();
        assert!(config.validate().is_err());

        config.candidates = vec!["Rudolph".to_string(), "Rudolph".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate"));

        config.candidates = vec!["Rudolph".to_string(), " ".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_candidates_standalone() {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert!(validate_candidates(&names(&["A", "B"])).is_ok());
        assert!(validate_candidates(&names(&["A", "A"])).is_err());
        assert!(validate_candidates(&names(&["A", ""])).is_err());
        assert!(validate_candidates(&[]).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.request_timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("http://127.0.0.1:9/api".to_string()), Some(10));
        assert_eq!(config.endpoint, "http://127.0.0.1:9/api");
        assert_eq!(config.settle_delay_ms, 10);

        config.apply_overrides(None, None);
        assert_eq!(config.settle_delay_ms, 10);
        assert_eq!(config.settle_delay(), Duration::from_millis(10));
    }
}
