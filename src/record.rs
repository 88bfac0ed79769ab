//! Canonical per-node record: output types and the builder that populates
//! them from raw facts.

pub mod builder;
pub mod types;

pub use builder::{BuilderOptions, NodeRecordBuilder};
pub use types::*;
