//! Pole-based access control.

pub mod matrix;
pub mod resolver;

pub use matrix::AccessMatrix;
pub use resolver::PoleAccessResolver;
