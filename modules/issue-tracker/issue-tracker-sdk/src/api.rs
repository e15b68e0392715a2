//! `IssuesApi` trait definition.
//!
//! In-process consumers talk to the issue-tracker module through this trait
//! instead of going over HTTP. Semantic failures are reported as
//! [`IssuesError`] variants, infrastructure failures as `IssuesError::Internal`.

use async_trait::async_trait;

use crate::errors::IssuesError;
use crate::filter::IssueFilter;
use crate::models::{Issue, IssueId, NewIssue, UpdateIssue};

#[async_trait]
pub trait IssuesApi: Send + Sync {
    /// List the issues of a project matching the filter.
    async fn list_issues(
        &self,
        project: &str,
        filter: IssueFilter,
    ) -> Result<Vec<Issue>, IssuesError>;

    /// Validate and persist a new issue in a project.
    async fn create_issue(&self, project: &str, new: NewIssue) -> Result<Issue, IssuesError>;

    /// Apply a partial update to the issue addressed by `update.id`.
    async fn update_issue(&self, update: UpdateIssue) -> Result<IssueId, IssuesError>;

    /// Delete the issue addressed by `id`.
    async fn delete_issue(&self, id: Option<String>) -> Result<IssueId, IssuesError>;
}
