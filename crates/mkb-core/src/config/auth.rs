//! Bearer credential configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Secret values that must never be used to sign or verify tokens.
const PLACEHOLDER_SECRETS: &[&str] = &["CHANGE_ME_IN_PRODUCTION", "changeme", "secret"];

/// Settings for validating the bearer tokens issued by the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC-SHA256 secret the identity provider signs tokens with.
    /// Empty by default; [`AuthConfig::validate`] rejects it until set.
    #[serde(default)]
    pub jwt_secret: String,
    /// Expected `aud` claim.
    #[serde(default = "default_audience")]
    pub jwt_audience: String,
    /// Allowed clock skew in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// TTL for tokens minted locally by the CLI, in minutes.
    #[serde(default = "default_dev_ttl")]
    pub dev_token_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_audience: default_audience(),
            leeway_seconds: default_leeway(),
            dev_token_ttl_minutes: default_dev_ttl(),
        }
    }
}

impl AuthConfig {
    /// Rejects a missing or placeholder signing secret.
    pub fn validate(&self) -> Result<(), AppError> {
        let secret = self.jwt_secret.trim();
        if secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must be set"));
        }
        if PLACEHOLDER_SECRETS
            .iter()
            .any(|p| secret.eq_ignore_ascii_case(p))
        {
            return Err(AppError::configuration(
                "auth.jwt_secret is a placeholder value, set the identity provider's secret",
            ));
        }
        Ok(())
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}

fn default_leeway() -> u64 {
    5
}

fn default_dev_ttl() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_secret_is_rejected() {
        let err = AuthConfig::default().validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_placeholder_secret_is_rejected() {
        for secret in ["CHANGE_ME_IN_PRODUCTION", " change_me_in_production ", "   "] {
            let config = AuthConfig {
                jwt_secret: secret.to_string(),
                ..AuthConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {secret:?}");
        }
    }

    #[test]
    fn test_real_secret_is_accepted() {
        let config = AuthConfig {
            jwt_secret: "super-secret-jwt-token-with-at-least-32-characters".to_string(),
            ..AuthConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
