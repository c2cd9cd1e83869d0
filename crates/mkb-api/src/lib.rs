//! # mkb-api
//!
//! HTTP API layer for MKB Pilot built on Axum.
//!
//! Exposes pole access resolution over REST, with bearer credential
//! extraction, CORS, request logging, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
