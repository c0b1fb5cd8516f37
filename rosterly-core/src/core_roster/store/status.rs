/*
    status.rs - Operation status bookkeeping

    One reusable wrapper applies the same discipline to every store
    operation: mark busy, clear the previous error, run, capture the
    failure message, and always clear busy again. The flag is a
    cooperative signal readable between operations, not a lock.
*/

use crate::core_roster::store::errors::StoreResult;
use std::future::Future;
use tracing::{debug, warn};

/// Busy flag and last-error message for a collection store
#[derive(Debug, Default)]
pub struct OpStatus {
    busy: bool,
    last_error: Option<String>,
}

impl OpStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an operation is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Human-readable message from the most recent failed operation.
    /// Cleared when the next operation starts.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Run one operation under the busy/error contract
    pub async fn run<T, F>(&mut self, op_name: &'static str, op: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        self.busy = true;
        self.last_error = None;
        debug!(op = op_name, "Store operation started");

        let result = op.await;

        if let Err(err) = &result {
            let message = err.to_string();
            warn!(op = op_name, error = %message, "Store operation failed");
            self.last_error = Some(message);
        } else {
            debug!(op = op_name, "Store operation finished");
        }

        self.busy = false;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_roster::remote::BackendError;
    use crate::core_roster::store::errors::StoreError;

    #[tokio::test]
    async fn test_success_leaves_no_error() {
        let mut status = OpStatus::new();
        let result = status.run("noop", async { Ok(42) }).await;

        assert_eq!(result.unwrap(), 42);
        assert!(!status.is_busy());
        assert_eq!(status.last_error(), None);
    }

    #[tokio::test]
    async fn test_failure_captures_message_and_clears_busy() {
        let mut status = OpStatus::new();
        let result: StoreResult<()> = status
            .run("boom", async {
                Err(StoreError::Backend(BackendError::Fetch("timeout".to_string())))
            })
            .await;

        assert!(result.is_err());
        assert!(!status.is_busy());
        assert_eq!(status.last_error(), Some("Backend error: Fetch failed: timeout"));
    }

    #[tokio::test]
    async fn test_next_operation_clears_previous_error() {
        let mut status = OpStatus::new();
        let _: StoreResult<()> = status
            .run("boom", async {
                Err(StoreError::Backend(BackendError::Delete("gone".to_string())))
            })
            .await;
        assert!(status.last_error().is_some());

        let _ = status.run("noop", async { Ok(()) }).await;
        assert_eq!(status.last_error(), None);
    }

    #[tokio::test]
    async fn test_busy_never_sticks_across_operations() {
        let mut status = OpStatus::new();
        assert!(!status.is_busy());

        let _ = status.run("first", async { Ok(1) }).await;
        assert!(!status.is_busy());

        let _: StoreResult<i32> = status
            .run("second", async {
                Err(StoreError::Backend(BackendError::Create("rejected".to_string())))
            })
            .await;
        assert!(!status.is_busy());
    }
}
