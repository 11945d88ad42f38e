//! Mutual-exclusion leases on fleet nodes
//!
//! A lease is advisory from this side: the fleet API enforces exclusion, we
//! only keep the nonce needed to release what we acquired.

use crate::ids::{LeaseNonce, NodeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-bounded exclusion claim on a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lease {
    /// The node this lease covers
    pub node: NodeId,

    /// Token required to release the lease
    pub nonce: LeaseNonce,

    /// Instant the fleet API will consider the lease expired
    pub expires_at: DateTime<Utc>,
}

impl Lease {
    pub fn new(node: NodeId, nonce: LeaseNonce, expires_at: DateTime<Utc>) -> Self {
        Self {
            node,
            nonce,
            expires_at,
        }
    }

    /// Whether the lease has already lapsed.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
