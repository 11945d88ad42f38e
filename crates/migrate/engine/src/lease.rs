//! Lease manager
//!
//! Thin tracking layer over the fleet API's lease primitives. Exclusion is
//! enforced remotely; this side only remembers which nonce releases what it
//! acquired. Releasing with a stale or unknown nonce is reported by the
//! caller, never treated as fatal to an unwind.

use crate::error::PortError;
use crate::ports::FleetApi;
use dashmap::DashMap;
use migrate_types::{Lease, LeaseNonce, NodeId};
use std::sync::Arc;

pub struct LeaseManager {
    fleet: Arc<dyn FleetApi>,
    held: DashMap<NodeId, Lease>,
}

impl LeaseManager {
    pub fn new(fleet: Arc<dyn FleetApi>) -> Self {
        Self {
            fleet,
            held: DashMap::new(),
        }
    }

    /// Acquire a lease on a node and track it.
    pub async fn acquire(&self, node: &NodeId, ttl_seconds: u32) -> Result<LeaseNonce, PortError> {
        let lease = self.fleet.get_lease(node, ttl_seconds).await?;
        tracing::info!(node = %node, expires_at = %lease.expires_at, "lease acquired");
        self.held.insert(node.clone(), lease.clone());
        Ok(lease.nonce)
    }

    /// Release a lease. The nonce is untracked whether or not the remote
    /// release succeeds, since a failed release is not retried.
    pub async fn release(&self, node: &NodeId, nonce: &LeaseNonce) -> Result<(), PortError> {
        self.held.remove(node);
        let result = self.fleet.release_lease(node, nonce).await;
        match &result {
            Ok(()) => tracing::info!(node = %node, "lease released"),
            Err(error) => tracing::warn!(node = %node, %error, "lease release failed"),
        }
        result
    }

    /// Number of leases acquired and not yet released.
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Tracked nonce for a node, if this manager still holds its lease.
    pub fn nonce_for(&self, node: &NodeId) -> Option<LeaseNonce> {
        self.held.get(node).map(|entry| entry.value().nonce.clone())
    }

    /// First held lease that has already lapsed, if any.
    pub fn first_expired(&self) -> Option<Lease> {
        self.held
            .iter()
            .find(|entry| entry.value().is_expired())
            .map(|entry| entry.value().clone())
    }
}
