//! Local token minting.
//!
//! Production tokens come from the identity provider. This encoder signs
//! tokens with the same shared secret so operators and tests can call the
//! API without going through the provider's sign-in flow.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use mkb_core::config::AuthConfig;
use mkb_core::error::AppError;
use mkb_core::types::UserId;

use super::claims::Claims;

/// Creates signed HS256 access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    audience: String,
    ttl_minutes: u64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("audience", &self.audience)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            audience: config.jwt_audience.clone(),
            ttl_minutes: config.dev_token_ttl_minutes,
        }
    }

    /// Converts a lifetime in minutes to a duration, rejecting values chrono
    /// cannot represent.
    pub fn ttl_from_minutes(minutes: u64) -> Result<chrono::Duration, AppError> {
        i64::try_from(minutes)
            .ok()
            .and_then(chrono::Duration::try_minutes)
            .ok_or_else(|| {
                AppError::validation(format!("Token lifetime of {minutes} minutes is too large"))
            })
    }

    /// Mints a token for `user_id` with the configured TTL.
    pub fn mint(&self, user_id: UserId, email: Option<&str>) -> Result<String, AppError> {
        let ttl = Self::ttl_from_minutes(self.ttl_minutes)?;
        self.mint_with_ttl(user_id, email, ttl)
    }

    /// Mints a token for `user_id` expiring `ttl` from now.
    pub fn mint_with_ttl(
        &self,
        user_id: UserId,
        email: Option<&str>,
        ttl: chrono::Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::validation("Token expiry is out of range"))?;
        let claims = Claims {
            sub: user_id.into_uuid(),
            aud: self.audience.clone(),
            exp: expires.timestamp(),
            iat: now.timestamp(),
            email: email.map(String::from),
            role: Some("authenticated".to_string()),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkb_core::error::ErrorKind;

    fn config(ttl_minutes: u64) -> AuthConfig {
        AuthConfig {
            jwt_secret: "encoder-test-secret".to_string(),
            dev_token_ttl_minutes: ttl_minutes,
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_ttl_from_minutes() {
        assert_eq!(
            JwtEncoder::ttl_from_minutes(90).unwrap(),
            chrono::Duration::minutes(90)
        );
        for minutes in [u64::MAX, i64::MAX as u64, i64::MAX as u64 / 60 + 1] {
            let err = JwtEncoder::ttl_from_minutes(minutes).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "minutes {minutes}");
        }
    }

    #[test]
    fn test_huge_configured_ttl_is_an_error() {
        let err = JwtEncoder::new(&config(u64::MAX))
            .mint(UserId::new(), None)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_expiry_past_calendar_range_is_an_error() {
        let encoder = JwtEncoder::new(&config(60));
        let ttl = chrono::Duration::try_days(100_000_000).unwrap();
        let err = encoder.mint_with_ttl(UserId::new(), None, ttl).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
