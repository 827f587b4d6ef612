//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::{ControllerSettings, FormBindings};

/// User configuration; every field falls back to the built-in default
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Simulated submission latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long the success acknowledgment stays up
    pub toast_duration_ms: Option<u64>,
    /// How long an announcement node lives
    pub announcement_ttl_ms: Option<u64>,
    /// Submit control label
    pub submit_label: Option<String>,
    /// Submit control label while a submission is in flight
    pub submitting_label: Option<String>,
    /// Element handles the controller binds to
    pub bindings: Option<FormBindings>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-form", "contact-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::info!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Controller labels and delays with defaults filled in
    pub fn settings(&self) -> ControllerSettings {
        let defaults = ControllerSettings::default();
        let millis = |value: Option<u64>, default: Duration| {
            value.map(Duration::from_millis).unwrap_or(default)
        };
        ControllerSettings {
            submit_delay: millis(self.submit_delay_ms, defaults.submit_delay),
            toast_duration: millis(self.toast_duration_ms, defaults.toast_duration),
            announcement_ttl: millis(self.announcement_ttl_ms, defaults.announcement_ttl),
            submit_label: self
                .submit_label
                .clone()
                .unwrap_or(defaults.submit_label),
            submitting_label: self
                .submitting_label
                .clone()
                .unwrap_or(defaults.submitting_label),
        }
    }

    pub fn bindings(&self) -> FormBindings {
        self.bindings.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.toast_duration_ms.is_none());
        assert!(config.announcement_ttl_ms.is_none());
        assert!(config.submit_label.is_none());
        assert!(config.bindings.is_none());
    }

    #[test]
    fn test_default_settings() {
        let settings = FormConfig::default().settings();
        assert_eq!(settings, ControllerSettings::default());
        assert_eq!(settings.submit_delay, Duration::from_millis(1500));
        assert_eq!(settings.toast_duration, Duration::from_millis(5000));
        assert_eq!(settings.announcement_ttl, Duration::from_millis(1000));
        assert_eq!(settings.submit_label, "Submit");
        assert_eq!(settings.submitting_label, "Submitting...");
    }

    #[test]
    fn test_partial_overrides() {
        let json = r#"{"submit_delay_ms": 10, "submitting_label": "Sending"}"#;
        let config: FormConfig = serde_json::from_str(json).unwrap();
        let settings = config.settings();
        assert_eq!(settings.submit_delay, Duration::from_millis(10));
        assert_eq!(settings.submitting_label, "Sending");
        assert_eq!(settings.toast_duration, Duration::from_millis(5000));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submit_delay_ms.is_none());
        assert_eq!(parsed.bindings(), FormBindings::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"toast_duration_ms": 2000, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.toast_duration_ms, Some(2000));
    }

    #[test]
    fn test_custom_bindings_round_trip() {
        let mut bindings = FormBindings::default();
        bindings.submit = "send".into();
        let config = FormConfig {
            bindings: Some(bindings.clone()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.bindings(), bindings);
    }

    #[test]
    fn test_load_returns_ok() {
        // Falls back to defaults when no config file exists
        let result = FormConfig::load();
        assert!(result.is_ok());
    }
}
