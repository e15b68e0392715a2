use std::sync::Arc;

use async_trait::async_trait;
use issue_tracker_sdk::models::{Issue, IssueId, NewIssue, UpdateIssue};
use issue_tracker_sdk::{IssueFilter, IssuesApi, IssuesError};

use crate::domain::service::Service;

/// [`IssuesApi`] backed directly by the domain service.
pub struct IssuesLocalClient {
    service: Arc<Service>,
}

impl IssuesLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl IssuesApi for IssuesLocalClient {
    async fn list_issues(
        &self,
        project: &str,
        filter: IssueFilter,
    ) -> Result<Vec<Issue>, IssuesError> {
        self.service
            .list_issues(project, &filter)
            .await
            .map_err(Into::into)
    }

    async fn create_issue(&self, project: &str, new: NewIssue) -> Result<Issue, IssuesError> {
        self.service
            .create_issue(project, new)
            .await
            .map_err(Into::into)
    }

    async fn update_issue(&self, update: UpdateIssue) -> Result<IssueId, IssuesError> {
        self.service.update_issue(update).await.map_err(Into::into)
    }

    async fn delete_issue(&self, id: Option<String>) -> Result<IssueId, IssuesError> {
        self.service.delete_issue(id).await.map_err(Into::into)
    }
}
