use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Redmine issue.
///
/// The issue listing returns these without `journals`/`changesets`; the
/// single-issue detail fetch fills them in. Both shapes deserialize into
/// this one type through `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub journals: Vec<Journal>,
    #[serde(default)]
    pub changesets: Vec<Changeset>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
}

/// One journal entry of an issue's history.
///
/// `notes` is absent for attribute-only updates; the aggregator branches on
/// `Some` rather than probing for the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub notes: Option<String>,
}

/// A source-control changeset associated with an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Changeset {
    #[serde(default)]
    pub comments: String,
}

/// Page envelope for the paginated issue listing.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuesPage {
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Envelope around the single-issue detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueEnvelope {
    pub issue: Issue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue_detail() {
        let json = r#"{
            "issue": {
                "id": 42,
                "subject": "Crash on startup",
                "description": "Stack trace attached",
                "journals": [
                    {"notes": "Reproduced on 1.2"},
                    {"user": {"id": 3}},
                    {"notes": ""}
                ],
                "changesets": [
                    {"comments": "Fix null check"}
                ],
                "created_on": "2021-03-01T12:00:00Z"
            }
        }"#;

        let envelope: IssueEnvelope = serde_json::from_str(json).unwrap();
        let issue = envelope.issue;
        assert_eq!(issue.id, 42);
        assert_eq!(issue.subject, "Crash on startup");
        assert_eq!(issue.journals.len(), 3);
        // A journal without a notes field is valid, not an error
        assert_eq!(issue.journals[0].notes.as_deref(), Some("Reproduced on 1.2"));
        assert_eq!(issue.journals[1].notes, None);
        assert_eq!(issue.journals[2].notes.as_deref(), Some(""));
        assert_eq!(issue.changesets[0].comments, "Fix null check");
    }

    #[test]
    fn test_parse_issue_list_entry_without_detail() {
        let json = r#"{"issues": [{"id": 7, "subject": "List entry"}]}"#;

        let page: IssuesPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.issues.len(), 1);
        assert_eq!(page.issues[0].id, 7);
        assert!(page.issues[0].description.is_none());
        assert!(page.issues[0].journals.is_empty());
        assert!(page.issues[0].changesets.is_empty());
    }
}
