/*
    Model subsystem - Data structures for user records
*/

pub mod types;
pub mod user;
pub mod validate;

pub use types::*;
pub use user::*;
pub use validate::*;
