//! Core type definitions used across the MKB workspace.

pub mod id;

pub use id::*;
