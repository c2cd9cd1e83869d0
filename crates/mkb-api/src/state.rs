//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use mkb_auth::access::PoleAccessResolver;
use mkb_auth::jwt::JwtDecoder;
use mkb_core::config::AppConfig;
use mkb_core::traits::AssignmentStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer token validation
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Pole access resolution over the configured assignment store
    pub resolver: Arc<PoleAccessResolver>,
}

impl AppState {
    /// Wires state from configuration and an assignment store.
    pub fn new(config: AppConfig, store: Arc<dyn AssignmentStore>) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let resolver = Arc::new(PoleAccessResolver::new(store));
        Self {
            config: Arc::new(config),
            jwt_decoder,
            resolver,
        }
    }
}
