//! Core types for fleet data-import orchestration
//!
//! Shared data model consumed by the migrate engine:
//! - Typed identifiers for nodes, lease nonces, and workflow runs
//! - Node lifecycle states, roles, and launch specifications
//! - Leases binding a node to the nonce needed to release it
//! - Cluster application descriptors used by the capability gate

pub mod app;
pub mod ids;
pub mod lease;
pub mod node;

pub use app::{ClusterApp, ClusterKind, RuntimeTier};
pub use ids::{LeaseNonce, NodeId, RunId};
pub use lease::Lease;
pub use node::{LaunchSpec, Node, NodeRole, NodeState};
