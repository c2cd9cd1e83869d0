//! # mkb-core
//!
//! Core crate for MKB Pilot. Contains configuration schemas, typed
//! identifiers, the assignment store contract, and the unified error system.
//!
//! This crate has **no** internal dependencies on other MKB crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
