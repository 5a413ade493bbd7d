//! Remote resource synchronization.
//!
//! # Error Handling Strategy
//!
//! The synchronizer recovers from exactly one failure class: a "resource
//! not found" error during a paginated listing ends that listing loop early
//! with a warning, and the run continues with the partial result. This
//! asymmetry is deliberate - operational continuity of existing snapshots
//! depends on accepting a partial project list over aborting the run.
//!
//! Everything else propagates: a failed issue-detail fetch, a failed write,
//! or any unclassified client error aborts the whole run. There is no retry
//! policy; the only delay is the fixed pacing sleep between pages.

pub mod synchronizer;

pub use synchronizer::{PAGE_SIZE, Synchronizer};
