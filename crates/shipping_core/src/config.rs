//! Wizard timing and startup configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generated::WIZARD_CONFIG_JSON;

#[derive(Debug, Error)]
/// Failure to read a configuration override.
pub enum ConfigError {
    /// Override JSON did not match the config shape.
    #[error("invalid wizard config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Runtime-tunable wizard settings.
///
/// [`WizardConfig::default`] is compiled from `catalog/wizard.toml`.
pub struct WizardConfig {
    /// Simulated payment latency before the success notice.
    pub processing_delay_ms: u64,
    /// Delay between the success notice and the redirect to the shipments page.
    pub redirect_delay_ms: u64,
    /// Whether the app opens on the welcome screen.
    pub show_welcome: bool,
    /// How long a toast stays visible.
    pub toast_lifetime_ms: u64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        compiled_defaults()
    }
}

fn compiled_defaults() -> WizardConfig {
    #[derive(Deserialize)]
    struct Compiled {
        processing_delay_ms: u64,
        redirect_delay_ms: u64,
        show_welcome: bool,
        toast_lifetime_ms: u64,
    }

    let compiled: Compiled =
        serde_json::from_str(WIZARD_CONFIG_JSON).expect("generated wizard config should parse");
    WizardConfig {
        processing_delay_ms: compiled.processing_delay_ms,
        redirect_delay_ms: compiled.redirect_delay_ms,
        show_welcome: compiled.show_welcome,
        toast_lifetime_ms: compiled.toast_lifetime_ms,
    }
}

impl WizardConfig {
    /// Parses a JSON override; missing keys keep their compiled defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not a JSON object of the config shape.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Processing delay as a [`Duration`].
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Redirect delay as a [`Duration`].
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    /// Toast lifetime as a [`Duration`].
    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn compiled_defaults_match_catalog() {
        let config = WizardConfig::default();
        assert_eq!(config.processing_delay(), Duration::from_secs(2));
        assert_eq!(config.redirect_delay(), Duration::from_secs(2));
        assert!(config.show_welcome);
        assert_eq!(config.toast_lifetime_ms, 5000);
    }

    #[test]
    fn overrides_keep_unspecified_defaults() {
        let config =
            WizardConfig::from_json_str(r#"{"processing_delay_ms": 10, "show_welcome": false}"#)
                .expect("parse override");
        assert_eq!(config.processing_delay_ms, 10);
        assert!(!config.show_welcome);
        assert_eq!(config.redirect_delay_ms, 2000);
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        let err = WizardConfig::from_json_str(r#"{"processing_delay_ms": "soon"}"#)
            .expect_err("string delay");
        assert!(err.to_string().starts_with("invalid wizard config"));
    }
}
