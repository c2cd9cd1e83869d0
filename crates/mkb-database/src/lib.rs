//! # mkb-database
//!
//! PostgreSQL connection management and repository implementations for
//! poles and user–pole assignments.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{AssignmentRepository, PoleRepository};
