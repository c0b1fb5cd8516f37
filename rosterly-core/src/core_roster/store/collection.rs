/*
    collection.rs - In-memory collection store

    Owns the authoritative list of user records for the session and keeps
    it in sync with the remote backend under an optimistic-update
    discipline. Every operation runs through the OpStatus wrapper, so
    callers can poll busy state and the last failure message instead of
    handling errors inline.
*/

use crate::core_roster::model::{
    validate_new_user, validate_patch, NewUser, RecordId, UserPatch, UserRecord,
};
use crate::core_roster::remote::SharedBackend;
use crate::core_roster::store::errors::StoreResult;
use crate::core_roster::store::status::OpStatus;
use std::sync::Arc;
use tracing::{debug, info};

/// Session-scoped store over the remote document collection
pub struct CollectionStore {
    backend: SharedBackend,
    records: Vec<UserRecord>,
    status: OpStatus,
}

impl CollectionStore {
    pub fn new(backend: SharedBackend) -> Self {
        CollectionStore {
            backend,
            records: Vec::new(),
            status: OpStatus::new(),
        }
    }

    /// The current in-memory list, in backend order (newest first after a
    /// fetch, with created records prepended)
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether an operation is currently in flight
    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    /// Message from the most recent failed operation, if any
    pub fn last_error(&self) -> Option<&str> {
        self.status.last_error()
    }

    /// Replace the whole list with the backend's current contents.
    /// On failure the list is left untouched. Returns the record count.
    pub async fn fetch_all(&mut self) -> StoreResult<usize> {
        let backend = Arc::clone(&self.backend);
        let records = &mut self.records;
        self.status
            .run("fetch_all", async move {
                let fetched = backend.list_records().await?;
                *records = fetched;
                info!(count = records.len(), "Fetched collection");
                Ok(records.len())
            })
            .await
    }

    /// Validate and persist a new record, then prepend the stored result
    /// to the local list
    pub async fn create(&mut self, input: NewUser) -> StoreResult<UserRecord> {
        let backend = Arc::clone(&self.backend);
        let records = &mut self.records;
        self.status
            .run("create", async move {
                validate_new_user(&input)?;
                let record = backend.create_record(input).await?;
                records.insert(0, record.clone());
                info!(id = %record.id, "Created record");
                Ok(record)
            })
            .await
    }

    /// Send a partial update, then replace the matching local record in
    /// place. A record missing from the local list is left alone; the
    /// backend result is still returned.
    pub async fn update(&mut self, id: &RecordId, patch: UserPatch) -> StoreResult<UserRecord> {
        let backend = Arc::clone(&self.backend);
        let records = &mut self.records;
        let id = id.clone();
        self.status
            .run("update", async move {
                validate_patch(&patch)?;
                let record = backend.update_record(&id, patch).await?;
                match records.iter_mut().find(|r| r.id == record.id) {
                    Some(slot) => *slot = record.clone(),
                    None => debug!(id = %record.id, "Updated record absent from local list"),
                }
                info!(id = %record.id, "Updated record");
                Ok(record)
            })
            .await
    }

    /// Delete from the backend, then drop the matching local record.
    /// Deleting an id that is already gone succeeds as a no-op.
    pub async fn remove(&mut self, id: &RecordId) -> StoreResult<()> {
        let backend = Arc::clone(&self.backend);
        let records = &mut self.records;
        let id = id.clone();
        self.status
            .run("delete", async move {
                backend.delete_record(&id).await?;
                records.retain(|r| r.id != id);
                info!(id = %id, "Deleted record");
                Ok(())
            })
            .await
    }

    /// Return the record from memory when present, otherwise ask the
    /// backend directly. A remote hit is not inserted into the list.
    pub async fn get_by_id(&mut self, id: &RecordId) -> StoreResult<Option<UserRecord>> {
        let backend = Arc::clone(&self.backend);
        let records = &self.records;
        let id = id.clone();
        self.status
            .run("get_by_id", async move {
                if let Some(record) = records.iter().find(|r| r.id == id) {
                    return Ok(Some(record.clone()));
                }
                let fetched = backend.get_record(&id).await?;
                Ok(fetched)
            })
            .await
    }
}
