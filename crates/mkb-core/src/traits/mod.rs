//! Core traits defined in `mkb-core` and implemented by other crates.

pub mod assignment_store;

pub use assignment_store::{AssignmentRecord, AssignmentStore};
