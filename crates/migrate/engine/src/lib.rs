//! Saga orchestration for fleet data imports
//!
//! The engine coordinates one fixed workflow against a remote fleet: it
//! provisions a temporary database credential, publishes the connection
//! strings as application secrets, launches a temporary worker node, leases
//! every participating node, runs the migration payload on the worker, and
//! releases everything it provisioned in strict reverse order - on success,
//! on failure, and on cancellation alike.
//!
//! # Key principle
//!
//! **Every forward step registers its compensation the instant it succeeds.**
//!
//! A resource that failed to create is never registered and needs no
//! cleanup; a prefix of successful steps is always fully undone. The first
//! forward error is the one the caller sees - cleanup failures are reported
//! as secondary warnings, never raised.
//!
//! # Architecture
//!
//! The [`ImportOrchestrator`] composes specialized components:
//!
//! - [`Provisioner`] — symmetric create/destroy pairs for credential,
//!   secret set, and worker node
//! - [`LeaseManager`] — acquires node leases and tracks the nonces that
//!   release them
//! - [`ReadinessWaiter`] — polls a launched node until it starts or a
//!   deadline elapses
//! - [`RemoteExecutor`] — runs the one payload command over the secure
//!   channel
//! - [`CompensationStack`] — the ordered undo log drained LIFO on every
//!   exit path
//!
//! External systems (fleet API, secrets store, cluster client, secure
//! channel) are consumed through the traits in [`ports`] and never
//! reimplemented here.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod exec;
pub mod lease;
pub mod orchestrator;
pub mod ports;
pub mod provision;
pub mod readiness;
pub mod saga;


// Re-export main types
pub use config::ImportConfig;
pub use error::{CompensationFailure, ImportError, PortError, ResourceKind};
pub use exec::RemoteExecutor;
pub use lease::LeaseManager;
pub use orchestrator::{ImportOrchestrator, ImportParams, ImportReport, WorkflowPhase};
pub use ports::{ClusterClient, FleetApi, SecretsStore, SecureChannel};
pub use provision::{Credential, Provisioner};
pub use readiness::ReadinessWaiter;
pub use saga::CompensationStack;
