/*
    Query subsystem - Filtered and sorted views
*/

pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, GenderFilter, PictureFilter, SortCriteria, SortKey, SortOrder};
pub use engine::{derive_view, filter_records, sort_records};
