//! Import error types
//!
//! One authoritative error per failed run. Failures that happen while
//! unwinding compensations are always secondary: they are collected as
//! [`CompensationFailure`] records and never replace the primary error.

use migrate_types::{NodeId, NodeState};
use std::time::Duration;
use thiserror::Error;

/// Errors returned by collaborator ports (fleet API, secrets store,
/// cluster client, secure channel).
#[derive(Debug, Clone, Error)]
pub enum PortError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    Conflict(String),

    #[error("denied: {0}")]
    Denied(String),
}

/// Resource kinds the provisioner manages, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Credential,
    SecretSet,
    WorkerNode,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Credential => write!(f, "credential"),
            ResourceKind::SecretSet => write!(f, "secret set"),
            ResourceKind::WorkerNode => write!(f, "worker node"),
        }
    }
}

/// Import workflow errors
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("discovery failed: {0}")]
    Discovery(String),

    #[error("provisioning {resource} failed: {source}")]
    Provisioning {
        resource: ResourceKind,
        source: PortError,
    },

    #[error("node {node} did not reach {target:?} within {deadline:?}")]
    ReadinessTimeout {
        node: NodeId,
        target: NodeState,
        deadline: Duration,
    },

    #[error("node {node} entered terminal state {state:?} while waiting for {target:?}")]
    NodeFailed {
        node: NodeId,
        state: NodeState,
        target: NodeState,
    },

    #[error("readiness check for node {node} failed: {source}")]
    Readiness { node: NodeId, source: PortError },

    #[error("lease acquisition failed for node {node}: {source}")]
    Lease { node: NodeId, source: PortError },

    #[error("lease on node {node} expired before the payload ran")]
    LeaseExpired { node: NodeId },

    #[error("remote command failed: {0}")]
    Execution(PortError),

    #[error("import cancelled by caller")]
    Cancelled,
}

/// A cleanup step that failed during unwind.
///
/// Reported, never raised: the unwind continues past it and the run's
/// primary outcome is unchanged.
#[derive(Debug, Clone)]
pub struct CompensationFailure {
    /// Human-readable label of the compensation that failed
    pub label: String,

    /// The port error the compensation hit
    pub error: PortError,
}

impl std::fmt::Display for CompensationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.error)
    }
}

/// Result type for import operations
pub type Result<T> = std::result::Result<T, ImportError>;
