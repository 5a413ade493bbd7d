//! Redmine Wordcloud - issue corpus synchronization and word-cloud rendering
//!
//! This library synchronizes every project of a Redmine server into an
//! on-disk snapshot, flattens each project's issues into a flat text
//! corpus, and derives a ranked lexical-frequency table used to render a
//! word-cloud image per project. It provides:
//!
//! - Cursor-paginated fetching of projects, issue lists and issue detail
//! - Idempotent per-project snapshot storage under `data/`
//! - Corpus aggregation over subjects, descriptions, journal notes and
//!   changeset comments
//! - A cleanup/tokenize/filter pipeline producing frequency tables
//! - Frequency-proportional PNG rendering per project
//!
//! # Example
//!
//! ```no_run
//! use redmine_wordcloud::corpus::aggregate;
//! use redmine_wordcloud::storage::load_issues;
//! use std::path::Path;
//!
//! if let Some(issues) = load_issues(Path::new("data/example"))? {
//!     let (text, stats) = aggregate(&issues);
//!     println!("{} issues, {} corpus bytes", stats.issues, text.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod client;
pub mod corpus;
pub mod models;
pub mod render;
pub mod storage;
pub mod sync;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AnalysisOptions, LexicalAnalyzer};
pub use client::{ClientError, ProjectSource, RedmineClient};
pub use corpus::aggregate;
pub use models::{Issue, Project, ProjectSnapshotRef};
pub use storage::StorageLayout;
pub use sync::Synchronizer;
