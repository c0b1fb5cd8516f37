/*
    backend.rs - Remote document store contract

    The collection store talks to the hosted database exclusively through
    this trait. Transports live behind it; the crate ships an in-memory
    implementation for tests and offline use.
*/

use crate::core_roster::model::{NewUser, RecordId, UserPatch, UserRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by a remote backend
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// Record creation was rejected
    #[error("Create failed: {0}")]
    Create(String),

    /// Listing or lookup failed at the transport/backend level
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Update write was rejected
    #[error("Update failed: {0}")]
    Update(String),

    /// Delete write was rejected
    #[error("Delete failed: {0}")]
    Delete(String),

    /// Update targeted an id the backend does not hold
    #[error("No record with id {0}")]
    NotFound(String),

    /// Stored document did not round-trip into a record
    #[error("Malformed record: {0}")]
    Malformed(String),
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Contract for the remote document store.
///
/// Absence on lookup is a normal result, not an error: `get_record`
/// returns `Ok(None)` for a missing id and `delete_record` succeeds when
/// the id is already gone. Only `update_record` treats a missing id as a
/// failure.
#[async_trait]
pub trait RemoteBackend: Send + Sync {
    /// Persist a new record; the backend assigns id and timestamps
    async fn create_record(&self, input: NewUser) -> BackendResult<UserRecord>;

    /// All records, ordered by creation time descending
    async fn list_records(&self) -> BackendResult<Vec<UserRecord>>;

    /// Look up one record by id
    async fn get_record(&self, id: &RecordId) -> BackendResult<Option<UserRecord>>;

    /// Apply a partial update and return the record as stored afterwards
    async fn update_record(&self, id: &RecordId, patch: UserPatch) -> BackendResult<UserRecord>;

    /// Remove a record; removing a missing id is a no-op
    async fn delete_record(&self, id: &RecordId) -> BackendResult<()>;
}

/// Type alias for a shared backend handle
pub type SharedBackend = Arc<dyn RemoteBackend>;
