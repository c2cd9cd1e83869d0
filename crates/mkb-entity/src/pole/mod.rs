//! Pole (department) entities.

pub mod model;

pub use model::Pole;
