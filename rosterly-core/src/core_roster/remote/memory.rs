/*
    memory.rs - In-memory document backend

    Keeps records as JSON documents keyed by id, the same shape a hosted
    document store would hold. Doubles as the offline/dev backend and the
    test double: any single operation can be armed to fail once without
    touching the stored documents.
*/

use crate::config::BackendConfig;
use crate::core_roster::model::{NewUser, RecordId, UserPatch, UserRecord};
use crate::core_roster::remote::backend::{BackendError, BackendResult, RemoteBackend};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};
use std::time::Duration;
use tracing::debug;

/// Latency applied per operation when simulation is enabled
const SIMULATED_LATENCY: Duration = Duration::from_millis(20);

/// Helper to convert poison errors into BackendError
fn handle_poison<T>(_err: PoisonError<T>) -> BackendError {
    BackendError::Fetch("Lock poisoned: a thread panicked while holding the lock".to_string())
}

/// Operations that can be armed to fail via `fail_next`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendOp {
    Create,
    List,
    Get,
    Update,
    Delete,
}

/// In-memory implementation of the remote document store
pub struct MemoryBackend {
    /// Collection name, used for log context only
    collection: String,

    /// Documents keyed by record id
    documents: RwLock<HashMap<String, Value>>,

    /// One-shot failure switch consumed by the next matching operation
    failure: Mutex<Option<BackendOp>>,

    /// Per-operation artificial delay
    latency: Option<Duration>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend {
            collection: "users".to_string(),
            documents: RwLock::new(HashMap::new()),
            failure: Mutex::new(None),
            latency: None,
        }
    }

    /// Build a backend from the application config section
    pub fn from_config(config: &BackendConfig) -> Self {
        let mut backend = MemoryBackend::new();
        backend.collection = config.collection.clone();
        if config.simulate_latency {
            backend.latency = Some(SIMULATED_LATENCY);
        }
        backend
    }

    /// Set the collection name
    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collection = name.into();
        self
    }

    /// Delay every operation by the given duration
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Arm the next matching operation to fail once
    pub fn fail_next(&self, op: BackendOp) {
        if let Ok(mut slot) = self.failure.lock() {
            *slot = Some(op);
        }
    }

    /// Insert a prebuilt record directly, bypassing create semantics
    pub fn seed(&self, record: UserRecord) -> BackendResult<()> {
        let doc = serde_json::to_value(&record).map_err(|e| BackendError::Malformed(e.to_string()))?;
        let mut documents = self.documents.write().map_err(handle_poison)?;
        documents.insert(record.id.0.clone(), doc);
        Ok(())
    }

    /// Number of stored documents
    pub fn record_count(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    async fn pause(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn injected_failure(&self, op: BackendOp) -> BackendResult<()> {
        let mut slot = self.failure.lock().map_err(handle_poison)?;
        if *slot == Some(op) {
            *slot = None;
            let message = "injected failure".to_string();
            return Err(match op {
                BackendOp::Create => BackendError::Create(message),
                BackendOp::List | BackendOp::Get => BackendError::Fetch(message),
                BackendOp::Update => BackendError::Update(message),
                BackendOp::Delete => BackendError::Delete(message),
            });
        }
        Ok(())
    }

    fn decode(doc: &Value) -> BackendResult<UserRecord> {
        serde_json::from_value(doc.clone()).map_err(|e| BackendError::Malformed(e.to_string()))
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteBackend for MemoryBackend {
    async fn create_record(&self, input: NewUser) -> BackendResult<UserRecord> {
        self.pause().await;
        self.injected_failure(BackendOp::Create)?;

        let now = Utc::now();
        let record = UserRecord {
            id: RecordId::generate(),
            name: input.name,
            email: input.email,
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            profile_picture: input.profile_picture.filter(|p| !p.trim().is_empty()),
            created_at: now,
            updated_at: now,
        };

        let doc = serde_json::to_value(&record).map_err(|e| BackendError::Create(e.to_string()))?;
        let mut documents = self.documents.write().map_err(handle_poison)?;
        documents.insert(record.id.0.clone(), doc);

        debug!(collection = %self.collection, id = %record.id, "Stored new record");
        Ok(record)
    }

    async fn list_records(&self) -> BackendResult<Vec<UserRecord>> {
        self.pause().await;
        self.injected_failure(BackendOp::List)?;

        let documents = self.documents.read().map_err(handle_poison)?;
        let mut records = documents
            .values()
            .map(Self::decode)
            .collect::<BackendResult<Vec<UserRecord>>>()?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!(collection = %self.collection, count = records.len(), "Listed records");
        Ok(records)
    }

    async fn get_record(&self, id: &RecordId) -> BackendResult<Option<UserRecord>> {
        self.pause().await;
        self.injected_failure(BackendOp::Get)?;

        let documents = self.documents.read().map_err(handle_poison)?;
        match documents.get(id.as_str()) {
            Some(doc) => Ok(Some(Self::decode(doc)?)),
            None => Ok(None),
        }
    }

    async fn update_record(&self, id: &RecordId, patch: UserPatch) -> BackendResult<UserRecord> {
        self.pause().await;
        self.injected_failure(BackendOp::Update)?;

        let mut documents = self.documents.write().map_err(handle_poison)?;
        let doc = documents
            .get(id.as_str())
            .ok_or_else(|| BackendError::NotFound(id.to_string()))?;

        let mut record = Self::decode(doc)?;
        patch.apply_to(&mut record);
        record.updated_at = Utc::now();

        let doc = serde_json::to_value(&record).map_err(|e| BackendError::Update(e.to_string()))?;
        documents.insert(record.id.0.clone(), doc);

        debug!(collection = %self.collection, id = %record.id, "Updated record");
        Ok(record)
    }

    async fn delete_record(&self, id: &RecordId) -> BackendResult<()> {
        self.pause().await;
        self.injected_failure(BackendOp::Delete)?;

        let mut documents = self.documents.write().map_err(handle_poison)?;
        let removed = documents.remove(id.as_str()).is_some();

        debug!(collection = %self.collection, id = %id, removed, "Deleted record");
        Ok(())
    }
}
