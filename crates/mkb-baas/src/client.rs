//! REST client for the assignment table.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, warn};

use mkb_core::config::RestStoreConfig;
use mkb_core::error::{AppError, ErrorKind};
use mkb_core::result::AppResult;
use mkb_core::traits::{AssignmentRecord, AssignmentStore};
use mkb_core::types::UserId;

use crate::models::RestAssignmentRow;

/// Columns requested for every assignment query.
const ASSIGNMENT_SELECT: &str = "role_level,poles!inner(name)";

/// Reads user–pole assignments over the hosted backend's REST interface.
///
/// No retries: a transport error or non-2xx status is returned as an
/// [`ErrorKind::ExternalService`] error.
#[derive(Clone)]
pub struct RestAssignmentStore {
    endpoint: Url,
    api_key: String,
    schema: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for RestAssignmentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestAssignmentStore")
            .field("endpoint", &self.endpoint.as_str())
            .field("schema", &self.schema)
            .finish()
    }
}

impl RestAssignmentStore {
    /// Build a store from configuration.
    pub fn new(config: &RestStoreConfig) -> AppResult<Self> {
        if config.url.trim().is_empty() {
            return Err(AppError::configuration("store.rest.url must be set"));
        }
        if config.api_key.is_empty() {
            return Err(AppError::configuration("store.rest.api_key must be set"));
        }

        let endpoint = assignments_endpoint(&config.url, &config.assignments_table)?;
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            endpoint,
            api_key: config.api_key.clone(),
            schema: config.schema.clone(),
            http_client,
        })
    }

    /// The fully resolved assignments URL (without query string).
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch_rows(&self, filters: &[(&str, String)]) -> AppResult<Vec<RestAssignmentRow>> {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", ASSIGNMENT_SELECT);
            for (key, value) in filters {
                query.append_pair(key, value);
            }
        }

        let started = Instant::now();
        let response = self
            .http_client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept-Profile", &self.schema)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Assignment request failed");
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Backend request failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        debug!(
            status = status.as_u16(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Assignment response received"
        );

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            warn!(status = status.as_u16(), body = %body, "Backend rejected assignment query");
            return Err(AppError::external_service(format!(
                "Backend returned {status}: {body}"
            )));
        }

        response.json::<Vec<RestAssignmentRow>>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Malformed backend response: {e}"),
                e,
            )
        })
    }
}

#[async_trait]
impl AssignmentStore for RestAssignmentStore {
    async fn find_assignment(
        &self,
        user_id: &UserId,
        pole_name: &str,
    ) -> AppResult<Option<AssignmentRecord>> {
        let rows = self
            .fetch_rows(&[
                ("user_id", format!("eq.{user_id}")),
                ("poles.name", format!("eq.{pole_name}")),
                ("limit", "1".to_string()),
            ])
            .await?;
        Ok(rows.into_iter().next().map(AssignmentRecord::from))
    }

    async fn list_assignments(&self, user_id: &UserId) -> AppResult<Vec<AssignmentRecord>> {
        let rows = self
            .fetch_rows(&[("user_id", format!("eq.{user_id}"))])
            .await?;
        let mut records: Vec<AssignmentRecord> =
            rows.into_iter().map(AssignmentRecord::from).collect();
        records.sort_by(|a, b| a.pole_name.cmp(&b.pole_name));
        Ok(records)
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.fetch_rows(&[("limit", "1".to_string())]).await?;
        Ok(true)
    }
}

/// Resolve `{base}/rest/v1/{table}`, tolerating a trailing slash on `base`.
fn assignments_endpoint(base: &str, table: &str) -> AppResult<Url> {
    let base = format!("{}/", base.trim().trim_end_matches('/'));
    Url::parse(&base)
        .and_then(|b| b.join(&format!("rest/v1/{table}")))
        .map_err(|e| AppError::configuration(format!("Invalid store.rest.url '{base}': {e}")))
}
