/*
    Store subsystem - Collection state and backend sync
*/

pub mod collection;
pub mod errors;
pub mod status;

pub use collection::CollectionStore;
pub use errors::*;
pub use status::OpStatus;
