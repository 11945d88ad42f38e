//! Cluster application descriptor
//!
//! The capability gate runs against this descriptor before any side effect:
//! only recognized cluster kinds on the supported runtime tier are eligible
//! for an import.

use serde::{Deserialize, Serialize};

/// Kind of database cluster an application runs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterKind {
    /// A managed Postgres cluster
    Postgres,
    /// Anything else; imports are rejected
    Other(String),
}

/// Runtime tier the application is deployed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeTier {
    /// Machine-based runtime; supports node launch and leases
    Machines,
    /// Legacy scheduler without node-level primitives; imports are rejected
    Legacy,
}

/// A deployed application backed by a database cluster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterApp {
    /// Application name; also the in-network hostname of the cluster
    pub name: String,

    /// Owning organization slug, used to dial the secure channel
    pub organization: String,

    /// What kind of cluster backs the application
    pub kind: ClusterKind,

    /// Runtime tier the application runs on
    pub runtime: RuntimeTier,
}

impl ClusterApp {
    /// Whether this application can host an import at all.
    pub fn supports_import(&self) -> bool {
        self.kind == ClusterKind::Postgres && self.runtime == RuntimeTier::Machines
    }
}
