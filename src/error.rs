//! Per-node failure taxonomy.
//! A failed node never aborts the run; errors here abort exactly one node
//! and are logged by the caller before moving on. No error is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// The hardware-facts provider for this node could not be reached.
    #[error("failed to connect to {address}: {reason}")]
    Connection { address: String, reason: String },

    /// The provider rejected the node's management credentials.
    #[error("access to {address} denied for user {username}")]
    Authorization { address: String, username: String },

    /// A field the builder cannot proceed without is absent from the facts.
    /// Optional fields degrade to null instead of raising this.
    #[error("required field missing: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
