//! Concurrent JSON well-formedness checker.
//!
//! Expands a glob pattern, validates every matched file as generic JSON on
//! its own thread, and folds the outcomes into a single pass/fail decision.
//! There is no schema: a file passes if `serde_json` can decode it at all.
//!
//! - **[`discover`]**: glob expansion to a sorted candidate list.
//! - **[`validate`]**: per-file open, read, decode. Pure per-file logic,
//!   no shared state.
//! - **[`sweep`]**: fan-out/fan-in dispatch and the aggregate
//!   [`sweep::Summary`].
//! - **[`profile`]**: best-effort CPU profiling around a run.

pub mod discover;
pub mod exit_codes;
pub mod logging;
pub mod profile;
pub mod sweep;
pub mod validate;
