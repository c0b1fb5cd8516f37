//! Shared test fixtures for Rosterly
//!
//! Builders and factory functions for records and inputs, so individual
//! tests only spell out the fields they care about.

pub mod fixtures;

pub use fixtures::*;
