//! # mkb-entity
//!
//! Domain entity models for MKB Pilot. Database rows derive
//! `sqlx::FromRow`; the access types are derived values that are never
//! stored.

pub mod access;
pub mod assignment;
pub mod pole;
