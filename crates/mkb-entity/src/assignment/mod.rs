//! User–pole assignment entities.

pub mod model;

pub use model::PoleAssignment;
