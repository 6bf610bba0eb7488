//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Name filled into the `{yourName}` placeholder when none is configured.
pub const DEFAULT_SIGNATURE: &str = "Your Name";

/// Default port for `reply-drafter serve`.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the drafter and its HTTP API.
#[derive(Debug, Clone)]
pub struct ReplyConfig {
    /// Signature substituted for `{yourName}`.
    pub signature: String,
    /// JSON template table replacing the built-in one.
    pub templates_path: Option<PathBuf>,
    /// Port the HTTP API listens on.
    pub port: u16,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            signature: DEFAULT_SIGNATURE.to_string(),
            templates_path: None,
            port: DEFAULT_PORT,
        }
    }
}

impl ReplyConfig {
    /// Load configuration from `REPLY_DRAFTER_*` environment variables.
    ///
    /// Unset or blank variables keep their defaults. A port that does not
    /// parse is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(signature) = get("REPLY_DRAFTER_SIGNATURE") {
            config.signature = signature;
        }

        config.templates_path = get("REPLY_DRAFTER_TEMPLATES").map(PathBuf::from);

        if let Some(port) = get("REPLY_DRAFTER_PORT") {
            config.port = port.parse().map_err(|e| ConfigError::InvalidValue {
                key: "REPLY_DRAFTER_PORT".into(),
                message: format!("{port:?}: {e}"),
            })?;
        }

        Ok(config)
    }
}
