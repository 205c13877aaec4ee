//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOKEN_TTL_HOURS;
use crate::errors::ConfigError;

#[derive(Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// Token signing secret. No default.
    pub secret: Option<String>,
    /// Bearer token lifetime. Default: 24.
    pub token_ttl_hours: Option<u32>,
}

impl AuthConfig {
    /// The signing secret. Missing or blank secrets are a hard error.
    pub fn require_secret(&self) -> Result<&str, ConfigError> {
        self.secret
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingValue {
                field: "auth.secret".to_string(),
            })
    }

    pub fn effective_token_ttl_hours(&self) -> u32 {
        self.token_ttl_hours.unwrap_or(DEFAULT_TOKEN_TTL_HOURS)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}
