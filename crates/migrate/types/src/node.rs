//! Node lifecycle model
//!
//! A node is a remote compute unit managed by the fleet API. This workflow
//! only drives the full lifecycle of the one worker it launches; pre-existing
//! cluster nodes are read and leased, never created or destroyed here.

use crate::ids::NodeId;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle state of a node as reported by the fleet API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// Launch accepted, not yet scheduled
    Requested,
    /// Scheduled and booting
    Starting,
    /// Running and reachable
    Started,
    /// Terminal boot or runtime failure
    Failed,
    /// Terminal; the node no longer exists
    Destroyed,
}

impl NodeState {
    /// Whether the node can make no further progress toward `Started`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeState::Failed | NodeState::Destroyed)
    }
}

/// Role a node plays inside its cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Primary / write node; its region anchors worker placement
    Leader,
    /// Read replica
    Replica,
    /// Role could not be classified from node metadata
    Unknown,
}

/// A node as reported by fleet discovery or launch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Fleet-assigned identifier
    pub id: NodeId,

    /// Current lifecycle state
    pub state: NodeState,

    /// Cluster role
    pub role: NodeRole,

    /// Region the node runs in
    pub region: String,

    /// Private address reachable over the secure channel
    pub private_address: String,

    /// Version of the cluster component running on the node, when reported
    pub component_version: Option<Version>,
}

impl Node {
    pub fn is_leader(&self) -> bool {
        self.role == NodeRole::Leader
    }
}

/// Specification for launching a worker node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSpec {
    /// Region to place the node in
    pub region: String,

    /// Container image to boot
    pub image: String,

    /// VM size preset
    pub vm_size: String,

    /// Free-form metadata attached to the node
    pub metadata: HashMap<String, String>,
}
