use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Issue, IssueEnvelope, IssuesPage, Project, ProjectsPage};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const API_KEY_HEADER: &str = "X-Redmine-API-Key";

/// Error classes surfaced by the remote client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The recoverable pagination class: listing loops log this and stop
    /// early with whatever was collected so far.
    #[error("resource not found: {url}")]
    NotFound { url: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Api { status: StatusCode, url: String },
}

/// The remote operations the synchronizer depends on.
pub trait ProjectSource {
    /// One page of the project listing. An empty page ends pagination.
    fn list_projects(&self, offset: u64, limit: u64) -> Result<Vec<Project>, ClientError>;

    /// One page of the issue listing for a project, excluding sub-projects,
    /// across all status values, sorted by ascending issue id.
    fn list_issues(
        &self,
        project_id: u64,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Issue>, ClientError>;

    /// Full detail for one issue, including journals and changesets.
    fn get_issue(&self, issue_id: u64) -> Result<Issue, ClientError>;
}

/// Blocking client for the Redmine REST API.
pub struct RedmineClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RedmineClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let response =
            self.http.get(url).header(API_KEY_HEADER, self.api_key.as_str()).query(query).send()?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound { url: url.to_string() }),
            status if !status.is_success() => {
                Err(ClientError::Api { status, url: url.to_string() })
            }
            _ => Ok(response.json()?),
        }
    }
}

impl ProjectSource for RedmineClient {
    fn list_projects(&self, offset: u64, limit: u64) -> Result<Vec<Project>, ClientError> {
        let url = format!("{}/projects.json", self.base_url);
        let page: ProjectsPage = self
            .get_json(&url, &[("offset", offset.to_string()), ("limit", limit.to_string())])?;
        Ok(page.projects)
    }

    fn list_issues(
        &self,
        project_id: u64,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Issue>, ClientError> {
        let url = format!("{}/issues.json", self.base_url);
        let page: IssuesPage = self.get_json(
            &url,
            &[
                ("project_id", project_id.to_string()),
                ("subproject_id", "!*".to_string()),
                ("status_id", "*".to_string()),
                ("sort", "id:asc".to_string()),
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
            ],
        )?;
        Ok(page.issues)
    }

    fn get_issue(&self, issue_id: u64) -> Result<Issue, ClientError> {
        let url = format!("{}/issues/{}.json", self.base_url, issue_id);
        let envelope: IssueEnvelope =
            self.get_json(&url, &[("include", "journals,changesets".to_string())])?;
        Ok(envelope.issue)
    }
}
