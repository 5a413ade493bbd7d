//! Data models for the Redmine issue corpus.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Project`] - Project records from the paginated project listing
//! - [`Issue`] - Issue detail including journals and changesets
//! - [`Journal`] / [`Changeset`] - Nested issue history carrying free text
//! - [`ProjectSnapshotRef`] - Handle to a synchronized on-disk partition
//!
//! The wire types use serde for JSON deserialization of the Redmine REST
//! responses and double as the snapshot format persisted by the storage
//! layer, so one run's fetch result can be re-read unchanged by the
//! analysis stage.

pub mod issue;
pub mod project;

pub use issue::{Changeset, Issue, IssueEnvelope, IssuesPage, Journal};
pub use project::{Project, ProjectSnapshotRef, ProjectsPage};
