//! Blob persistence for project and issue snapshots.
//!
//! Binary snapshots use bincode, structured exports use pretty-printed
//! JSON. A missing issue snapshot is a valid "nothing synchronized yet"
//! state and loads as `None` rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bincode::config;

use crate::models::{Issue, Project};

pub const PROJECT_BIN_FILENAME: &str = "project.bin";
pub const PROJECT_JSON_FILENAME: &str = "project.json";
pub const ISSUES_FILENAME: &str = "issues.bin";
pub const TEXT_FILENAME: &str = "text.txt";
pub const WORDS_TEXT_FILENAME: &str = "words.txt";
pub const WORDS_JSON_FILENAME: &str = "words.json";

/// Persist the raw project record and its structured export.
pub fn save_project(project_dir: &Path, project: &Project) -> Result<()> {
    let bin_path = project_dir.join(PROJECT_BIN_FILENAME);
    let bytes = bincode::serde::encode_to_vec(project, config::standard())
        .context("Failed to serialize project snapshot")?;
    fs::write(&bin_path, bytes)
        .with_context(|| format!("Failed to write project snapshot: {}", bin_path.display()))?;

    let json_path = project_dir.join(PROJECT_JSON_FILENAME);
    let json = serde_json::to_string_pretty(project).context("Failed to serialize project JSON")?;
    fs::write(&json_path, json)
        .with_context(|| format!("Failed to write project export: {}", json_path.display()))?;

    Ok(())
}

/// Persist one issue's structured export under the partition's `issues/`.
pub fn save_issue(issue_dir: &Path, issue: &Issue) -> Result<PathBuf> {
    let path = issue_dir.join(format!("{}.json", issue.id));
    let json = serde_json::to_string_pretty(issue).context("Failed to serialize issue JSON")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write issue export: {}", path.display()))?;
    Ok(path)
}

/// Persist the full per-project issue collection as one snapshot blob.
///
/// An empty collection is still written: downstream stages key off file
/// presence to tell "synchronized, zero issues" from "never synchronized".
pub fn save_issues(project_dir: &Path, issues: &[Issue]) -> Result<()> {
    let path = project_dir.join(ISSUES_FILENAME);
    let bytes = bincode::serde::encode_to_vec(issues, config::standard())
        .context("Failed to serialize issue snapshot")?;
    fs::write(&path, bytes)
        .with_context(|| format!("Failed to write issue snapshot: {}", path.display()))
}

/// Load a partition's issue snapshot. Returns `None` if the file is absent.
pub fn load_issues(project_dir: &Path) -> Result<Option<Vec<Issue>>> {
    let path = project_dir.join(ISSUES_FILENAME);
    if !path.exists() {
        return Ok(None);
    }

    let bytes = fs::read(&path)
        .with_context(|| format!("Failed to read issue snapshot: {}", path.display()))?;
    let issues: Vec<Issue> = bincode::serde::decode_from_slice(&bytes, config::standard())
        .with_context(|| format!("Failed to deserialize issue snapshot: {}", path.display()))?
        .0;
    Ok(Some(issues))
}

/// Write the aggregated corpus text beside the snapshot for inspection.
pub fn save_text(project_dir: &Path, text: &str) -> Result<()> {
    let path = project_dir.join(TEXT_FILENAME);
    fs::write(&path, text)
        .with_context(|| format!("Failed to write corpus text: {}", path.display()))
}

/// Write the space-joined surviving token stream.
pub fn save_words(project_dir: &Path, tokens: &[String]) -> Result<()> {
    let path = project_dir.join(WORDS_TEXT_FILENAME);
    fs::write(&path, tokens.join(" "))
        .with_context(|| format!("Failed to write token stream: {}", path.display()))
}

/// Write the frequency table as `[["token", count], ...]`, already ordered
/// by descending count with ties in first-occurrence order.
pub fn save_frequency_table(project_dir: &Path, table: &[(String, u64)]) -> Result<()> {
    let path = project_dir.join(WORDS_JSON_FILENAME);
    let json =
        serde_json::to_string_pretty(table).context("Failed to serialize frequency table")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write frequency table: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Changeset, Journal};

    fn sample_issue(id: u64) -> Issue {
        Issue {
            id,
            subject: format!("Issue {id}"),
            description: Some("details".to_string()),
            journals: vec![Journal { notes: Some("a note".to_string()) }, Journal { notes: None }],
            changesets: vec![Changeset { comments: "a commit".to_string() }],
            created_on: None,
            updated_on: None,
        }
    }

    #[test]
    fn test_issue_snapshot_round_trip() {
        let temp = tempfile::TempDir::new().unwrap();
        let issues = vec![sample_issue(1), sample_issue(2)];

        save_issues(temp.path(), &issues).unwrap();
        let loaded = load_issues(temp.path()).unwrap().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].subject, "Issue 1");
        assert_eq!(loaded[0].journals[1].notes, None);
        assert_eq!(loaded[1].changesets[0].comments, "a commit");
    }

    #[test]
    fn test_empty_issue_snapshot_is_still_written() {
        let temp = tempfile::TempDir::new().unwrap();

        save_issues(temp.path(), &[]).unwrap();

        assert!(temp.path().join(ISSUES_FILENAME).exists());
        let loaded = load_issues(temp.path()).unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_issues_missing_snapshot_is_none() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(load_issues(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_frequency_table_export_format() {
        let temp = tempfile::TempDir::new().unwrap();
        let table = vec![("空".to_string(), 2), ("球".to_string(), 2)];

        save_frequency_table(temp.path(), &table).unwrap();

        let json = fs::read_to_string(temp.path().join(WORDS_JSON_FILENAME)).unwrap();
        let parsed: Vec<(String, u64)> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_save_project_writes_both_exports() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = Project {
            id: 9,
            identifier: "alpha".to_string(),
            name: "Alpha".to_string(),
            description: None,
            status: 1,
            created_on: None,
        };

        save_project(temp.path(), &project).unwrap();

        assert!(temp.path().join(PROJECT_BIN_FILENAME).exists());
        let json = fs::read_to_string(temp.path().join(PROJECT_JSON_FILENAME)).unwrap();
        assert!(json.contains("\"identifier\": \"alpha\""));
    }
}
