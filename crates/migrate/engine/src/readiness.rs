//! Readiness waiter
//!
//! Polls a node's lifecycle state at a fixed interval until it reaches the
//! target state or a deadline elapses. Transport errors propagate immediately
//! and are never reported as timeouts.

use crate::error::PortError;
use crate::ports::FleetApi;
use migrate_types::{ClusterApp, NodeId, NodeState};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Why a wait ended without reaching the target state.
#[derive(Debug)]
pub enum WaitError {
    /// The deadline elapsed first.
    Timeout,
    /// The node reached a terminal state other than the target.
    NodeFailed(NodeState),
    /// A poll failed at the transport level.
    Transport(PortError),
}

pub struct ReadinessWaiter {
    fleet: Arc<dyn FleetApi>,
    poll_interval: Duration,
}

impl ReadinessWaiter {
    pub fn new(fleet: Arc<dyn FleetApi>, poll_interval: Duration) -> Self {
        Self {
            fleet,
            poll_interval,
        }
    }

    /// Block until `node` reaches `target` or `timeout` elapses.
    pub async fn wait_for(
        &self,
        app: &ClusterApp,
        node: &NodeId,
        target: NodeState,
        timeout: Duration,
    ) -> Result<(), WaitError> {
        let deadline = Instant::now() + timeout;

        loop {
            let state = self
                .fleet
                .node_state(app, node)
                .await
                .map_err(WaitError::Transport)?;

            if state == target {
                tracing::info!(node = %node, state = ?state, "node ready");
                return Ok(());
            }
            if state.is_terminal() {
                return Err(WaitError::NodeFailed(state));
            }
            if Instant::now() + self.poll_interval > deadline {
                return Err(WaitError::Timeout);
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
