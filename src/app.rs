//! Application plumbing submodule re-exports.

pub mod cli;
pub mod logging;
