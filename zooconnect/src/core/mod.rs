//! Deterministic, pure logic for browsing the catalog.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! records and return deterministic outputs suitable for tests.

pub mod filter;
pub mod invariants;
pub mod panel;
pub mod query;
pub mod summary;
pub mod types;
