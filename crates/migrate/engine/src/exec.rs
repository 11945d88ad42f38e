//! Remote executor
//!
//! Runs exactly one command on one node over the secure-channel port. The
//! channel lives for the duration of the call and no longer.

use crate::error::PortError;
use crate::ports::SecureChannel;
use std::sync::Arc;

pub struct RemoteExecutor {
    channel: Arc<dyn SecureChannel>,
}

impl RemoteExecutor {
    pub fn new(channel: Arc<dyn SecureChannel>) -> Self {
        Self { channel }
    }

    /// Run `command` on the node at `address` and return its output.
    pub async fn run(&self, address: &str, command: &str) -> Result<Vec<u8>, PortError> {
        tracing::info!(address, command, "running remote command");
        let output = self.channel.run_command(address, command).await?;
        tracing::info!(address, bytes = output.len(), "remote command finished");
        Ok(output)
    }
}
