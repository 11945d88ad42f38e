//! Compensation stack
//!
//! Every forward step that succeeds pushes the action that undoes it. On any
//! exit path the stack is drained strictly last-in-first-out, so a prefix of
//! successes is always fully undone. The unwind never stops early: a failed
//! compensation is recorded and the next one still runs.

use crate::error::{CompensationFailure, PortError};
use futures::future::{BoxFuture, FutureExt};

type CompensationFn = Box<dyn FnOnce() -> BoxFuture<'static, Result<(), PortError>> + Send>;

struct Compensation {
    label: String,
    run: CompensationFn,
}

/// Ordered sequence of registered compensations for one workflow run.
///
/// Owned exclusively by the orchestrator; not shared across runs.
#[derive(Default)]
pub struct CompensationStack {
    entries: Vec<Compensation>,
}

impl CompensationStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register the undo action for a step that just succeeded.
    pub fn push<F, Fut>(&mut self, label: impl Into<String>, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<(), PortError>> + Send + 'static,
    {
        let label = label.into();
        tracing::debug!(compensation = %label, depth = self.entries.len() + 1, "registered");
        self.entries.push(Compensation {
            label,
            run: Box::new(move || f().boxed()),
        });
    }

    /// Number of registered compensations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every registered compensation in reverse registration order.
    ///
    /// Failures are collected and logged as warnings; they never abort the
    /// remaining sequence. The stack is empty afterwards.
    pub async fn unwind(&mut self) -> Vec<CompensationFailure> {
        let mut failures = Vec::new();

        while let Some(entry) = self.entries.pop() {
            tracing::debug!(compensation = %entry.label, "running");
            if let Err(error) = (entry.run)().await {
                tracing::warn!(
                    compensation = %entry.label,
                    %error,
                    "compensation failed; continuing unwind"
                );
                failures.push(CompensationFailure {
                    label: entry.label,
                    error,
                });
            }
        }

        failures
    }
}
