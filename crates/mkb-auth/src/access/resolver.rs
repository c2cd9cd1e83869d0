//! Pole access resolution.
//!
//! Resolution order:
//! 1. No authenticated user: deny without touching the store.
//! 2. Look up the user's assignment for the pole.
//! 3. No assignment: deny.
//! 4. Map the stored role level through the [`AccessMatrix`].
//!
//! Store failures propagate to the caller. They are never turned into a
//! denial, so callers can tell "not allowed" apart from "could not check".

use std::sync::Arc;

use tracing::{debug, warn};

use mkb_core::error::AppError;
use mkb_core::result::AppResult;
use mkb_core::traits::AssignmentStore;
use mkb_core::types::UserId;
use mkb_entity::access::{Capability, PoleAccess, PoleGrant};

use super::matrix::AccessMatrix;

/// Computes a user's capabilities within poles from their stored
/// assignments. Holds no state between calls.
#[derive(Clone)]
pub struct PoleAccessResolver {
    store: Arc<dyn AssignmentStore>,
}

impl std::fmt::Debug for PoleAccessResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoleAccessResolver").finish()
    }
}

impl PoleAccessResolver {
    /// Creates a resolver over the given assignment store.
    pub fn new(store: Arc<dyn AssignmentStore>) -> Self {
        Self { store }
    }

    /// Resolves what `user_id` may do in `pole_name`.
    ///
    /// Returns [`PoleAccess::denied`] for an absent user (no store call) and
    /// for a user with no assignment in the pole. An empty pole name is a
    /// validation error for authenticated callers.
    pub async fn resolve_access(
        &self,
        user_id: Option<&UserId>,
        pole_name: &str,
    ) -> AppResult<PoleAccess> {
        let Some(user_id) = user_id else {
            debug!(pole = %pole_name, "No authenticated user, denying pole access");
            return Ok(PoleAccess::denied());
        };

        let pole_name = normalize_pole_name(pole_name)?;

        let record = self
            .store
            .find_assignment(user_id, pole_name)
            .await
            .inspect_err(|e| {
                warn!(user_id = %user_id, pole = %pole_name, error = %e, "Assignment lookup failed");
            })?;

        let access = match record {
            Some(record) => AccessMatrix::access(record.role_level),
            None => PoleAccess::denied(),
        };

        debug!(
            user_id = %user_id,
            pole = %pole_name,
            role_level = ?access.role_level,
            can_read = access.can_read(),
            can_write = access.can_write(),
            can_manage = access.can_manage(),
            "Resolved pole access"
        );

        Ok(access)
    }

    /// Lists every pole `user_id` has an assignment in, with the derived
    /// capabilities, ordered by pole name.
    ///
    /// Assignments whose level grants nothing are still listed. An absent
    /// user gets an empty list without a store call.
    pub async fn list_accessible_poles(
        &self,
        user_id: Option<&UserId>,
    ) -> AppResult<Vec<PoleGrant>> {
        let Some(user_id) = user_id else {
            debug!("No authenticated user, returning no poles");
            return Ok(Vec::new());
        };

        let records = self
            .store
            .list_assignments(user_id)
            .await
            .inspect_err(|e| {
                warn!(user_id = %user_id, error = %e, "Assignment listing failed");
            })?;

        let mut grants: Vec<PoleGrant> = records
            .into_iter()
            .map(|record| {
                let access = AccessMatrix::access(record.role_level);
                PoleGrant::new(record.pole_name, access)
            })
            .collect();
        grants.sort_by(|a, b| a.pole_name.cmp(&b.pole_name));

        debug!(user_id = %user_id, count = grants.len(), "Listed accessible poles");
        Ok(grants)
    }

    /// Resolves access and fails with `Forbidden` unless it includes
    /// `capability`. Unauthenticated callers are always refused.
    pub async fn require(
        &self,
        user_id: Option<&UserId>,
        pole_name: &str,
        capability: Capability,
    ) -> AppResult<PoleAccess> {
        let access = self.resolve_access(user_id, pole_name).await?;
        if access.allows(capability) {
            Ok(access)
        } else {
            Err(AppError::forbidden(format!(
                "Missing '{capability}' capability in pole '{}'",
                pole_name.trim()
            )))
        }
    }

    /// Checks that the underlying store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.store.health_check().await
    }
}

/// Trims a pole name and rejects empty ones. Matching is otherwise exact.
fn normalize_pole_name(pole_name: &str) -> AppResult<&str> {
    let trimmed = pole_name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Pole name must not be empty"));
    }
    Ok(trimmed)
}
