//! Repository implementations for MKB entities.

pub mod assignment;
pub mod pole;

pub use assignment::AssignmentRepository;
pub use pole::PoleRepository;
