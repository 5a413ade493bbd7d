//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use redmine_wordcloud::client::{ClientError, ProjectSource};
use redmine_wordcloud::models::{Changeset, Issue, Journal, Project};

/// In-memory stand-in for the remote tracker.
///
/// Serves pages out of fixed fixture vectors and records every request, so
/// tests can assert on pagination behavior. Failure injection covers the
/// "resource not found" class at a chosen listing offset.
pub struct MockRemote {
    projects: Vec<Project>,
    issues: HashMap<u64, Vec<Issue>>,
    /// Listing offset at which the project listing returns NotFound
    fail_projects_at: Option<u64>,
    /// (project id, offset) at which the issue listing returns NotFound
    fail_issues_at: Option<(u64, u64)>,
    /// Issue id whose detail fetch returns NotFound
    fail_issue_detail: Option<u64>,
    pub project_requests: RefCell<Vec<(u64, u64)>>,
    pub issue_requests: RefCell<Vec<(u64, u64, u64)>>,
}

impl MockRemote {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            issues: HashMap::new(),
            fail_projects_at: None,
            fail_issues_at: None,
            fail_issue_detail: None,
            project_requests: RefCell::new(Vec::new()),
            issue_requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_issues(mut self, project_id: u64, mut issues: Vec<Issue>) -> Self {
        issues.sort_by_key(|issue| issue.id);
        self.issues.insert(project_id, issues);
        self
    }

    pub fn fail_projects_at(mut self, offset: u64) -> Self {
        self.fail_projects_at = Some(offset);
        self
    }

    pub fn fail_issues_at(mut self, project_id: u64, offset: u64) -> Self {
        self.fail_issues_at = Some((project_id, offset));
        self
    }

    pub fn fail_issue_detail(mut self, issue_id: u64) -> Self {
        self.fail_issue_detail = Some(issue_id);
        self
    }

    fn page<T: Clone>(items: &[T], offset: u64, limit: u64) -> Vec<T> {
        let start = (offset as usize).min(items.len());
        let end = (start + limit as usize).min(items.len());
        items[start..end].to_vec()
    }
}

impl ProjectSource for MockRemote {
    fn list_projects(&self, offset: u64, limit: u64) -> Result<Vec<Project>, ClientError> {
        self.project_requests.borrow_mut().push((offset, limit));
        if self.fail_projects_at == Some(offset) {
            return Err(ClientError::NotFound { url: format!("/projects.json?offset={offset}") });
        }
        Ok(Self::page(&self.projects, offset, limit))
    }

    fn list_issues(
        &self,
        project_id: u64,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Issue>, ClientError> {
        self.issue_requests.borrow_mut().push((project_id, offset, limit));
        if self.fail_issues_at == Some((project_id, offset)) {
            return Err(ClientError::NotFound {
                url: format!("/issues.json?project_id={project_id}&offset={offset}"),
            });
        }
        let issues = self.issues.get(&project_id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(Self::page(issues, offset, limit))
    }

    fn get_issue(&self, issue_id: u64) -> Result<Issue, ClientError> {
        if self.fail_issue_detail == Some(issue_id) {
            return Err(ClientError::NotFound { url: format!("/issues/{issue_id}.json") });
        }
        self.issues
            .values()
            .flatten()
            .find(|issue| issue.id == issue_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound { url: format!("/issues/{issue_id}.json") })
    }
}

/// Build a project fixture with sequential defaults.
pub fn project(id: u64, identifier: &str) -> Project {
    Project {
        id,
        identifier: identifier.to_string(),
        name: format!("Project {identifier}"),
        description: Some(format!("Description of {identifier}")),
        status: 1,
        created_on: None,
    }
}

/// Build `count` project fixtures, `p1`..`p<count>`.
pub fn projects(count: usize) -> Vec<Project> {
    (1..=count as u64).map(|id| project(id, &format!("p{id}"))).collect()
}

/// Build an issue fixture.
pub fn issue(id: u64, subject: &str) -> Issue {
    Issue {
        id,
        subject: subject.to_string(),
        description: Some(format!("Description of issue {id}")),
        journals: Vec::new(),
        changesets: Vec::new(),
        created_on: None,
        updated_on: None,
    }
}

/// Build an issue fixture carrying journal notes and changeset comments.
pub fn issue_with_history(id: u64, subject: &str, notes: &[Option<&str>], comments: &[&str]) -> Issue {
    let mut fixture = issue(id, subject);
    fixture.journals =
        notes.iter().map(|n| Journal { notes: n.map(str::to_string) }).collect();
    fixture.changesets =
        comments.iter().map(|c| Changeset { comments: c.to_string() }).collect();
    fixture
}

/// Build `count` issue fixtures with ids `1..=count`.
pub fn issues(count: usize) -> Vec<Issue> {
    (1..=count as u64).map(|id| issue(id, &format!("Issue {id}"))).collect()
}
