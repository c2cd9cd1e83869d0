//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use mkb_api::{AppState, build_app};
use mkb_auth::jwt::JwtEncoder;
use mkb_core::config::{AppConfig, AuthConfig};
use mkb_core::error::AppError;
use mkb_core::result::AppResult;
use mkb_core::traits::{AssignmentRecord, AssignmentStore};
use mkb_core::types::UserId;

/// Secret shared by the test encoder and the app's decoder.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// In-memory assignment store with a call counter and a failure switch.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<UserId, Vec<AssignmentRecord>>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    fn enter(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::external_service("backend unreachable"));
        }
        Ok(())
    }
}

#[async_trait]
impl AssignmentStore for MemoryStore {
    async fn find_assignment(
        &self,
        user_id: &UserId,
        pole_name: &str,
    ) -> AppResult<Option<AssignmentRecord>> {
        self.enter()?;
        let rows = self.rows.lock().expect("store lock");
        Ok(rows
            .get(user_id)
            .and_then(|r| r.iter().find(|a| a.pole_name == pole_name).cloned()))
    }

    async fn list_assignments(&self, user_id: &UserId) -> AppResult<Vec<AssignmentRecord>> {
        self.enter()?;
        let rows = self.rows.lock().expect("store lock");
        Ok(rows.get(user_id).cloned().unwrap_or_default())
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.enter()?;
        Ok(true)
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for seeding and call assertions
    pub store: Arc<MemoryStore>,
    /// Application config
    pub config: AppConfig,
    encoder: JwtEncoder,
}

impl TestApp {
    /// Create a new test application over an empty store
    pub fn new() -> Self {
        let config = AppConfig {
            auth: AuthConfig {
                jwt_secret: TEST_JWT_SECRET.to_string(),
                ..AuthConfig::default()
            },
            ..AppConfig::default()
        };

        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(config.clone(), store.clone());
        let router = build_app(state);
        let encoder = JwtEncoder::new(&config.auth);

        Self {
            router,
            store,
            config,
            encoder,
        }
    }

    /// Assign `user` to `pole` at `role_level`
    pub fn assign(&self, user: UserId, pole: &str, role_level: Option<i32>) {
        self.store
            .rows
            .lock()
            .expect("store lock")
            .entry(user)
            .or_default()
            .push(AssignmentRecord {
                pole_name: pole.to_string(),
                role_level,
            });
    }

    /// Make every store call fail from now on
    pub fn break_store(&self) {
        self.store.failing.store(true, Ordering::SeqCst);
    }

    /// Number of store calls made so far
    pub fn store_calls(&self) -> usize {
        self.store.calls.load(Ordering::SeqCst)
    }

    /// Mint a valid bearer token for `user`
    pub fn token_for(&self, user: UserId) -> String {
        self.encoder.mint(user, None).expect("Failed to mint token")
    }

    /// Send a GET request, optionally with a bearer token
    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        let mut req = Request::builder().method("GET").uri(path);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
