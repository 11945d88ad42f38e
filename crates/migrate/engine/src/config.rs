//! Import configuration.
//!
//! Timeouts, the worker launch profile, and the payload command. Defaults
//! match the production values the workflow has always run with.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for an import run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Lease TTL requested for every participating node.
    pub lease_ttl: Duration,

    /// How long to wait for the worker node to reach `Started`.
    pub readiness_timeout: Duration,

    /// Interval between node-state polls while waiting.
    pub readiness_poll_interval: Duration,

    /// Image the worker node boots.
    pub worker_image: String,

    /// VM size preset for the worker node.
    pub worker_vm_size: String,

    /// Command executed on the worker once everything is leased.
    pub payload_command: String,

    /// Minimum cluster-component version a node must report to participate.
    pub min_component_version: Version,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            lease_ttl: Duration::from_secs(120),
            readiness_timeout: Duration::from_secs(300),
            readiness_poll_interval: Duration::from_secs(1),
            worker_image: "postgres-migrator:latest".into(),
            worker_vm_size: "shared-cpu-2x".into(),
            payload_command: "migrate".into(),
            min_component_version: Version::new(0, 0, 19),
        }
    }
}

impl ImportConfig {
    /// Lease TTL in whole seconds, as the fleet API expects it.
    pub fn lease_ttl_seconds(&self) -> u32 {
        self.lease_ttl.as_secs() as u32
    }
}
