//! I/O helpers: configuration, catalog loading and timer-driven stubs.

pub mod auth;
pub mod catalog_store;
pub mod config;
pub mod media;
