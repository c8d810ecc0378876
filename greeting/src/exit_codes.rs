//! Stable exit codes for the `greeting` binary.

/// Greeting printed.
pub const OK: i32 = 0;
/// Config could not be loaded or the greeting failed validation.
pub const INVALID: i32 = 1;
