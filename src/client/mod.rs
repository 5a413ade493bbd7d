//! Remote issue-tracker client.
//!
//! # Error Handling Strategy
//!
//! The client is the one place in the application with a typed error enum
//! instead of `anyhow`: the synchronizer must distinguish the recoverable
//! "resource not found" class (terminates a pagination loop early, keeping
//! partial results) from transport and API failures (abort the run). All
//! other layers box errors with `anyhow` as usual for a CLI tool.
//!
//! [`ProjectSource`] is the seam the synchronizer depends on; the live
//! [`RedmineClient`] implements it over the REST API and tests substitute
//! in-memory fixtures.

pub mod redmine;

pub use redmine::{ClientError, ProjectSource, RedmineClient};
