//! # mkb-baas
//!
//! [`AssignmentStore`](mkb_core::traits::AssignmentStore) backed by the
//! hosted backend's REST interface. Assignment rows are read from the
//! configured table with the pole name embedded through an inner join on
//! `poles`.

pub mod client;
pub mod models;

pub use client::RestAssignmentStore;
