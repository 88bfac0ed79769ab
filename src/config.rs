//! Configuration submodule re-exports.

pub mod persistence;
pub mod types;
