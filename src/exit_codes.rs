//! Stable exit codes for the jsonvalidate CLI.

/// Every matched file parsed, and profiling (if requested) succeeded.
pub const OK: i32 = 0;
/// At least one file failed to parse, the pattern was malformed, or
/// profiling setup/finalization failed.
pub const FAILED: i32 = 1;
