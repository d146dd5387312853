//! Catalog browsing for the ZooConnect wildlife-volunteering marketplace.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (filtering, query binding, panel
//!   state, invariants). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and catalog files, timers
//!   behind the auth and media stubs).
//!
//! [`catalog`] holds the read-only store and [`browse`] combines it with the
//! filter for the CLI and the web UI.

pub mod browse;
pub mod catalog;
pub mod core;
pub mod exit_codes;
pub mod experience;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
