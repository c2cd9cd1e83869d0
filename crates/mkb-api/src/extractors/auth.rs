//! Bearer credential extractors.
//!
//! [`AuthUser`] rejects requests without a valid token. [`MaybeAuthUser`]
//! never rejects: a missing, malformed, expired, or mis-signed token all
//! yield `None`, which the access handlers treat as "no access".

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use mkb_core::error::AppError;
use mkb_core::result::AppResult;
use mkb_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

impl AuthUser {
    /// Returns the caller's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.0
    }
}

/// Caller identity when a valid credential is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeAuthUser(pub Option<UserId>);

impl MaybeAuthUser {
    /// Returns the caller's user ID, if authenticated.
    pub fn user_id(&self) -> Option<&UserId> {
        self.0.as_ref()
    }
}

fn authenticate(parts: &Parts, state: &AppState) -> AppResult<UserId> {
    let auth_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    let claims = state.jwt_decoder.decode_bearer(auth_header)?;
    Ok(claims.user_id())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).map(AuthUser).map_err(ApiError)
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match authenticate(parts, state) {
            Ok(user_id) => Ok(MaybeAuthUser(Some(user_id))),
            Err(e) => {
                debug!(reason = %e.message, "Request carries no usable credential");
                Ok(MaybeAuthUser(None))
            }
        }
    }
}
