//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories follow the same contract as the PostgreSQL
//! adapters (atomic aggregate writes, cascade delete, creation order), so
//! service and router tests can run without a database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
