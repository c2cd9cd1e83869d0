//! # mkb-auth
//!
//! Authentication and pole-based authorization for MKB Pilot.
//!
//! ## Modules
//!
//! - `jwt`: validation of the bearer tokens issued by the identity provider,
//!   plus local minting for development
//! - `access`: the static access matrix and the pole access resolver

pub mod access;
pub mod jwt;

pub use access::{AccessMatrix, PoleAccessResolver};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
