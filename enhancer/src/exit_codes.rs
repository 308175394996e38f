//! Stable exit codes for enhancer CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, item file, or other errors.
pub const INVALID: i32 = 1;
