use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::client::{ClientError, ProjectSource};
use crate::models::{Issue, Project, ProjectSnapshotRef};
use crate::storage::persistence::ISSUES_FILENAME;
use crate::storage::{StorageLayout, save_issue, save_issues, save_project};

/// Fixed page size for both listing operations.
pub const PAGE_SIZE: u64 = 50;

/// Cooperative pacing between successive pages, not an error backoff.
const PAGE_DELAY: Duration = Duration::from_millis(100);

/// Pages through the remote tracker and persists a full snapshot per
/// project. One instance performs one run; the data root is reset up front,
/// so a run is always a total replace.
pub struct Synchronizer<'a, S: ProjectSource> {
    source: &'a S,
    layout: &'a StorageLayout,
    page_delay: Duration,
}

impl<'a, S: ProjectSource> Synchronizer<'a, S> {
    pub fn new(source: &'a S, layout: &'a StorageLayout) -> Self {
        Self { source, layout, page_delay: PAGE_DELAY }
    }

    /// Override the pacing delay (tests run with zero).
    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Fetch every project and its issues, persisting each partition.
    ///
    /// Returns a handle per synchronized project. Zero projects is a valid
    /// empty result, not an error.
    pub fn synchronize(&self) -> Result<Vec<ProjectSnapshotRef>> {
        self.layout.reset_data_dir()?;

        let projects = self.fetch_projects()?;
        let mut snapshots = Vec::with_capacity(projects.len());
        for project in &projects {
            println!("Project identifier: {}", project.identifier);
            let dir = self.layout.create_project_dir(&project.identifier)?;
            save_project(&dir, project)?;

            self.fetch_issues_for_project(project)?;
            snapshots.push(ProjectSnapshotRef { identifier: project.identifier.clone(), dir });
        }

        println!("Synchronized {} projects", snapshots.len());
        Ok(snapshots)
    }

    /// Page through the project listing until the first empty page.
    pub fn fetch_projects(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        let mut offset = 0u64;
        loop {
            println!("Fetching projects, offset: {offset}");
            match self.source.list_projects(offset, PAGE_SIZE) {
                Ok(page) => {
                    if page.is_empty() {
                        break;
                    }
                    offset += page.len() as u64;
                    projects.extend(page);
                    thread::sleep(self.page_delay);
                }
                Err(err @ ClientError::NotFound { .. }) => {
                    // Accept the partial listing and move on
                    eprintln!("Warning: project listing ended early: {err}");
                    break;
                }
                Err(err) => {
                    return Err(err).context("Failed to list projects");
                }
            }
        }
        Ok(projects)
    }

    /// Page through a project's issue listing, collecting issue ids in
    /// ascending order. Same early-stop and pacing policy as the project
    /// listing.
    pub fn fetch_issue_list(&self, project: &Project) -> Result<Vec<u64>> {
        let mut ids = Vec::new();
        let mut offset = 0u64;
        loop {
            println!("Fetching issues for project: {}, offset: {offset}", project.identifier);
            match self.source.list_issues(project.id, offset, PAGE_SIZE) {
                Ok(page) => {
                    if page.is_empty() {
                        break;
                    }
                    offset += page.len() as u64;
                    ids.extend(page.iter().map(|issue| issue.id));
                    thread::sleep(self.page_delay);
                }
                Err(err @ ClientError::NotFound { .. }) => {
                    eprintln!(
                        "Warning: issue listing for {} ended early: {err}",
                        project.identifier
                    );
                    break;
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("Failed to list issues for project {}", project.identifier)
                    });
                }
            }
        }
        Ok(ids)
    }

    /// Fetch every issue's detail individually and persist the partition's
    /// snapshot. A project with zero issues still gets a snapshot written.
    fn fetch_issues_for_project(&self, project: &Project) -> Result<()> {
        let project_dir = self.layout.project_dir(&project.identifier);
        let issue_dir = self.layout.create_issue_dir(&project.identifier)?;

        let ids = self.fetch_issue_list(project)?;

        println!("Fetch issue detail...");
        let mut issues: Vec<Issue> = Vec::with_capacity(ids.len());
        for (count, issue_id) in ids.iter().enumerate() {
            // Detail fetches are individual and unrecovered: any failure
            // here aborts the run
            let issue = self.source.get_issue(*issue_id).with_context(|| {
                format!("Failed to fetch detail for issue {issue_id}")
            })?;
            save_issue(&issue_dir, &issue)?;
            issues.push(issue);

            print!("{issue_id}, ");
            if (count + 1) % 10 == 0 {
                println!();
            }
            io::stdout().flush().context("Failed to flush progress output")?;
        }
        println!("...done");

        save_issues(&project_dir, &issues)?;
        println!("Write issues: {}", project_dir.join(ISSUES_FILENAME).display());
        Ok(())
    }
}
