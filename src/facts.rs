//! External-collaborator seams: node directory and hardware-facts provider.
//!
//! The cluster-orchestration service and the management-controller wire
//! client are not part of this crate. The traits below are the shapes the
//! record builder needs from them; the `file` module ships capture-replay
//! implementations backed by JSON documents on disk.

use async_trait::async_trait;

pub mod file;
pub mod types;

pub use file::{FileDirectory, FileFactsProvider};
pub use types::*;

use crate::error::Result;

/// System of record mapping logical cluster nodes to management credentials
/// and known network identities.
#[async_trait]
pub trait NodeDirectory: Send + Sync {
    /// All registered nodes, with BMC endpoints and known MAC addresses.
    async fn nodes(&self) -> Result<Vec<NodeDescriptor>>;
}

/// Supplies parsed hardware facts for one node's management controller.
#[async_trait]
pub trait FactsProvider: Send + Sync {
    /// Fetch the system and chassis descriptors for one BMC endpoint.
    /// Blocking here stalls only the worker processing this node.
    async fn fetch(&self, endpoint: &BmcEndpoint) -> Result<NodeFacts>;
}
