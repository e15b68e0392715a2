use async_trait::async_trait;
use chrono::{DateTime, Utc};
use issue_tracker_sdk::models::{Issue, IssueDraft, IssueId, IssuePatch};
use issue_tracker_sdk::IssueFilter;

/// Persistence collaborator for issues.
///
/// Implementations address issues only through these four calls. Lookups by
/// identifier return `None` when nothing matches; errors are reserved for
/// store faults.
#[async_trait]
pub trait IssuesRepository: Send + Sync {
    async fn insert(&self, draft: IssueDraft) -> anyhow::Result<Issue>;

    async fn find_many(&self, project: &str, filter: &IssueFilter) -> anyhow::Result<Vec<Issue>>;

    async fn update_by_id(
        &self,
        id: IssueId,
        patch: &IssuePatch,
        updated_on: DateTime<Utc>,
    ) -> anyhow::Result<Option<Issue>>;

    async fn delete_by_id(&self, id: IssueId) -> anyhow::Result<Option<Issue>>;
}
