//! Convenience result type alias for MKB Pilot.

use crate::error::AppError;

/// A specialized `Result` type for MKB Pilot operations.
pub type AppResult<T> = Result<T, AppError>;
