//! Bearer token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use mkb_core::config::AuthConfig;
use mkb_core::error::AppError;

use super::claims::Claims;

/// Validates HS256 tokens signed with the identity provider's shared secret.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        validation.set_audience(&[config.jwt_audience.as_str()]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks signature, expiration, and audience. Every failure is an
    /// `Unauthorized` error.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                    AppError::unauthorized("Invalid token audience")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            })
    }

    /// Extracts and decodes the token from an `Authorization` header value.
    pub fn decode_bearer(&self, header_value: &str) -> Result<Claims, AppError> {
        let token = header_value
            .strip_prefix("Bearer ")
            .or_else(|| header_value.strip_prefix("bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;
        self.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use mkb_core::error::ErrorKind;
    use mkb_core::types::UserId;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_decodes_minted_token() {
        let cfg = config("test-secret");
        let user = UserId::new();
        let token = JwtEncoder::new(&cfg)
            .mint(user, Some("ops@mkb.example"))
            .unwrap();

        let claims = JwtDecoder::new(&cfg).decode(&token).unwrap();
        assert_eq!(claims.user_id(), user);
        assert_eq!(claims.email.as_deref(), Some("ops@mkb.example"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let token = JwtEncoder::new(&config("one"))
            .mint(UserId::new(), None)
            .unwrap();
        let err = JwtDecoder::new(&config("two")).decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_rejects_wrong_audience() {
        let cfg = config("shared");
        let token = JwtEncoder::new(&cfg).mint(UserId::new(), None).unwrap();
        let strict = AuthConfig {
            jwt_audience: "service_role".to_string(),
            ..cfg
        };
        assert!(JwtDecoder::new(&strict).decode(&token).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let cfg = config("shared");
        let token = JwtEncoder::new(&cfg)
            .mint_with_ttl(UserId::new(), None, chrono::Duration::minutes(-10))
            .unwrap();
        let err = JwtDecoder::new(&cfg).decode(&token).unwrap_err();
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_decode_bearer_header() {
        let cfg = config("shared");
        let token = JwtEncoder::new(&cfg).mint(UserId::new(), None).unwrap();
        let decoder = JwtDecoder::new(&cfg);
        assert!(decoder.decode_bearer(&format!("Bearer {token}")).is_ok());
        assert!(decoder.decode_bearer(&token).is_err());
        assert!(decoder.decode_bearer("Bearer ").is_err());
    }
}
