//! Collaborator ports
//!
//! The external systems this engine coordinates, specified at their interface
//! boundary and consumed through trait objects so the orchestrator can be
//! exercised against fakes. None of these are reimplemented here.

use crate::error::PortError;
use async_trait::async_trait;
use migrate_types::{ClusterApp, LaunchSpec, Lease, LeaseNonce, Node, NodeId, NodeState};
use std::collections::HashMap;

/// Fleet-management API: node lifecycle and lease primitives.
#[async_trait]
pub trait FleetApi: Send + Sync {
    /// List the currently active nodes backing an application.
    async fn list_active_nodes(&self, app: &ClusterApp) -> Result<Vec<Node>, PortError>;

    /// Launch a new node; returns the node in its initial state.
    async fn launch_node(&self, app: &ClusterApp, spec: LaunchSpec) -> Result<Node, PortError>;

    /// Destroy a node. With `force` the node is taken down even while
    /// mid-execution.
    async fn destroy_node(
        &self,
        app: &ClusterApp,
        node: &NodeId,
        force: bool,
    ) -> Result<(), PortError>;

    /// Report the current lifecycle state of a node.
    async fn node_state(&self, app: &ClusterApp, node: &NodeId) -> Result<NodeState, PortError>;

    /// Acquire a time-bounded exclusion lease on a node.
    async fn get_lease(&self, node: &NodeId, ttl_seconds: u32) -> Result<Lease, PortError>;

    /// Release a lease using its nonce.
    async fn release_lease(&self, node: &NodeId, nonce: &LeaseNonce) -> Result<(), PortError>;
}

/// Application secrets store.
#[async_trait]
pub trait SecretsStore: Send + Sync {
    /// Set the listed keys on the application. Only the listed keys are
    /// touched.
    async fn set(&self, app: &ClusterApp, secrets: HashMap<String, String>)
        -> Result<(), PortError>;

    /// Unset the listed keys. Absent keys are not an error.
    async fn unset(&self, app: &ClusterApp, keys: &[String]) -> Result<(), PortError>;
}

/// Database-cluster client used to manage temporary credentials.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// Create a user. A name collision is a [`PortError::Conflict`], never an
    /// overwrite.
    async fn create_user(
        &self,
        name: &str,
        password: &str,
        superuser: bool,
    ) -> Result<(), PortError>;

    /// Delete a user by name.
    async fn delete_user(&self, name: &str) -> Result<(), PortError>;
}

/// Secure channel into the application's private network.
#[async_trait]
pub trait SecureChannel: Send + Sync {
    /// Open one channel to `address`, run one command, close the channel,
    /// return the command's output.
    async fn run_command(&self, address: &str, command: &str) -> Result<Vec<u8>, PortError>;
}
