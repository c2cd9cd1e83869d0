//! HTTP request handlers.

pub mod access;
pub mod health;
