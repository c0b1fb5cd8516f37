/*
    Remote subsystem - Document store access
*/

pub mod backend;
pub mod memory;

pub use backend::{BackendError, BackendResult, RemoteBackend, SharedBackend};
pub use memory::{BackendOp, MemoryBackend};
