//! Hooks for watching the per-vessel scoring pass.
//!
//! The engine announces the fleet size, names each vessel as it is scored,
//! and reports once the pass is done. The CLI renders these events as a
//! terminal bar; [`NullProgress`] drops them.

use std::sync::Arc;

/// Observer of one scoring pass.
///
/// Shared across threads behind an `Arc`, hence `Send + Sync`.
pub trait ProgressCallback: Send + Sync {
    /// Number of vessels the pass will score. Called once, before any
    /// vessel is scored.
    fn set_total(&self, total: u64);

    /// `delta` more vessels have been scored.
    fn inc(&self, delta: u64);

    /// Name of the vessel about to be scored.
    fn set_message(&self, msg: String);

    /// The pass is done; `msg` states how many vessels were scored.
    fn finish(&self, msg: String);
}

/// Discards every event. Used by [`crate::run`] and JSON output.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

/// [`NullProgress`] behind the same `Arc<dyn>` the CLI bar uses.
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
