use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Redmine project as returned by `GET /projects.json`.
///
/// The `identifier` is the unique string key used to partition the storage
/// area; the numeric `id` is what the issue listing filters on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub identifier: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
}

/// Page envelope for the paginated project listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Handle to one project's synchronized partition on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshotRef {
    pub identifier: String,
    pub dir: PathBuf,
}
