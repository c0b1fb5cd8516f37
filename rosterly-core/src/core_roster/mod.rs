/*
    core_roster - User collection state, queries, and export

    The session-facing layer for the user roster. Handles:
    - Data model (records, inputs, validation)
    - Backend sync through the remote document store contract
    - Filtered and sorted view derivation
    - CSV export
*/

pub mod export;
pub mod model;
pub mod query;
pub mod remote;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export commonly used types
pub use export::{to_csv, write_csv_file, ExportError};
pub use model::{Gender, NewUser, RecordId, UserPatch, UserRecord, ValidationErrors};
pub use query::{derive_view, FilterCriteria, SortCriteria, SortKey, SortOrder};
pub use remote::{BackendError, MemoryBackend, RemoteBackend, SharedBackend};
pub use store::{CollectionStore, StoreError, StoreResult};
