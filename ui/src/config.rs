//! Deployment settings for the landing page (`ui/landing.json`).

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::content::Variant;

const EMBEDDED: &str = include_str!("../landing.json");

pub const DEFAULT_HANDOFF_URL: &str = "https://hange-ai.streamlit.app/";
pub const DEFAULT_SIGN_IN_URL: &str = "https://hange.onrender.com/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LandingConfig {
    /// External application receiving `?email=`.
    pub handoff_url: String,
    /// Parameterless link behind "Sign In".
    pub sign_in_url: String,
    /// Variant served at `/`.
    pub default_variant: Variant,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            handoff_url: DEFAULT_HANDOFF_URL.to_string(),
            sign_in_url: DEFAULT_SIGN_IN_URL.to_string(),
            default_variant: Variant::Classic,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("landing config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be an https URL, got {value:?}")]
    InsecureUrl { field: &'static str, value: String },
}

static CONFIG: Lazy<LandingConfig> = Lazy::new(|| match LandingConfig::parse(EMBEDDED) {
    Ok(config) => config,
    Err(err) => {
        tracing::warn!(%err, "falling back to built-in landing config");
        LandingConfig::default()
    }
});

/// Settings compiled into this build.
pub fn config() -> &'static LandingConfig {
    &CONFIG
}

impl LandingConfig {
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let config: LandingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("handoff_url", &self.handoff_url),
            ("sign_in_url", &self.sign_in_url),
        ] {
            let host = value.strip_prefix("https://").unwrap_or_default();
            if host.is_empty() || host.starts_with('/') {
                return Err(ConfigError::InsecureUrl {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
