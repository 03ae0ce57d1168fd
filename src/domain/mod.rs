//! Domain layer types and invariants.

pub mod actor;
pub mod error;
pub mod filter;
pub mod inquiries;
