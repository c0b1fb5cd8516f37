pub mod config;
pub mod core_roster;
pub mod logging;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use core_roster::{
    derive_view, to_csv, write_csv_file, CollectionStore, FilterCriteria, Gender, MemoryBackend,
    NewUser, RecordId, RemoteBackend, SortCriteria, SortOrder, StoreError, StoreResult, UserPatch,
    UserRecord,
};
pub use logging::{init_logging, LogLevel};
