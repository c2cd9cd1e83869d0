//! Pole access handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mkb_entity::access::{Capability, PoleAccess, PoleGrant};

use crate::dto::request::{AccessQuery, CheckQuery};
use crate::dto::response::CheckResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// GET /api/access?pole=
///
/// Without a usable credential, responds `401` with the all-false triple.
pub async fn get_access(
    State(state): State<AppState>,
    caller: MaybeAuthUser,
    Query(query): Query<AccessQuery>,
) -> ApiResult<Response> {
    let Some(user_id) = caller.user_id() else {
        return Ok((StatusCode::UNAUTHORIZED, Json(PoleAccess::denied())).into_response());
    };

    let access = state
        .resolver
        .resolve_access(Some(user_id), &query.pole)
        .await?;
    Ok(Json(access).into_response())
}

/// GET /api/access/poles
///
/// Without a usable credential, responds `401` with an empty array.
pub async fn list_poles(
    State(state): State<AppState>,
    caller: MaybeAuthUser,
) -> ApiResult<Response> {
    let Some(user_id) = caller.user_id() else {
        return Ok((StatusCode::UNAUTHORIZED, Json(Vec::<PoleGrant>::new())).into_response());
    };

    let grants = state.resolver.list_accessible_poles(Some(user_id)).await?;
    Ok(Json(grants).into_response())
}

/// GET /api/access/check?pole=&capability=
pub async fn check(
    State(state): State<AppState>,
    caller: AuthUser,
    Query(query): Query<CheckQuery>,
) -> ApiResult<Json<CheckResponse>> {
    let capability: Capability = query.capability.parse()?;

    let access = state
        .resolver
        .resolve_access(Some(caller.user_id()), &query.pole)
        .await?;

    Ok(Json(CheckResponse {
        pole_name: query.pole.trim().to_string(),
        capability,
        allowed: access.allows(capability),
        role_level: access.role_level,
    }))
}
