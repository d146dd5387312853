//! Stable exit codes for zooconnect CLI commands.

/// Command succeeded. An empty listing is still a success.
pub const OK: i32 = 0;
/// Invalid flags, config or catalog.
pub const INVALID: i32 = 1;
/// `zooconnect show` was given an id that is not in the catalog.
pub const NOT_FOUND: i32 = 2;
