use std::sync::Arc;

use chrono::{DateTime, Utc};
use issue_tracker_sdk::models::{Issue, IssueDraft, IssueId, NewIssue, UpdateIssue};
use issue_tracker_sdk::IssueFilter;

use super::error::DomainError;
use super::repo::IssuesRepository;

/// Source of the timestamps written on create and update.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct Service {
    repo: Arc<dyn IssuesRepository>,
    clock: Clock,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn IssuesRepository>) -> Self {
        Self::with_clock(repo, Arc::new(Utc::now))
    }

    #[must_use]
    pub fn with_clock(repo: Arc<dyn IssuesRepository>, clock: Clock) -> Self {
        Self { repo, clock }
    }

    /// # Errors
    /// `DomainError::Database` when the store fails.
    pub async fn list_issues(
        &self,
        project: &str,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, DomainError> {
        if filter.matches_nothing() {
            tracing::debug!(
                project,
                keys = ?filter.unmatchable_keys(),
                "filter cannot match any issue"
            );
            return Ok(Vec::new());
        }

        let issues = self.repo.find_many(project, filter).await?;
        tracing::debug!(project, count = issues.len(), "listed issues");
        Ok(issues)
    }

    /// # Errors
    /// `DomainError::RequiredFieldsMissing` when a required field is absent or
    /// empty (nothing is persisted), `DomainError::Database` when the store fails.
    pub async fn create_issue(&self, project: &str, new: NewIssue) -> Result<Issue, DomainError> {
        let draft = IssueDraft::from_new(project, new, self.now())
            .map_err(|fields| DomainError::RequiredFieldsMissing { fields })?;

        let issue = self.repo.insert(draft).await?;
        tracing::info!(project, issue_id = %issue.id, "issue created");
        Ok(issue)
    }

    /// Checks run in order and stop at the first failure: missing `_id`, empty
    /// patch, malformed identifier, unknown issue.
    ///
    /// # Errors
    /// Store failures are reported as `DomainError::CouldNotUpdate`, the same
    /// as a missing issue.
    pub async fn update_issue(&self, update: UpdateIssue) -> Result<IssueId, DomainError> {
        let raw_id = require_id(update.id)?;
        if update.patch.is_empty() {
            return Err(DomainError::NoUpdateFields { id: raw_id });
        }
        let Some(id) = IssueId::parse(&raw_id) else {
            tracing::debug!(issue_id = %raw_id, "update with malformed identifier");
            return Err(DomainError::CouldNotUpdate { id: raw_id });
        };

        match self.repo.update_by_id(id, &update.patch, self.now()).await {
            Ok(Some(_)) => {
                tracing::info!(issue_id = %id, "issue updated");
                Ok(id)
            }
            Ok(None) => {
                tracing::debug!(issue_id = %id, "update target not found");
                Err(DomainError::CouldNotUpdate { id: raw_id })
            }
            Err(e) => {
                tracing::error!(issue_id = %id, error = %e, "store failed during update");
                Err(DomainError::CouldNotUpdate { id: raw_id })
            }
        }
    }

    /// # Errors
    /// `DomainError::MissingId` when no identifier is given, otherwise
    /// `DomainError::CouldNotDelete` for malformed identifiers, unknown issues
    /// and store failures alike.
    pub async fn delete_issue(&self, id: Option<String>) -> Result<IssueId, DomainError> {
        let raw_id = require_id(id)?;
        let Some(id) = IssueId::parse(&raw_id) else {
            tracing::debug!(issue_id = %raw_id, "delete with malformed identifier");
            return Err(DomainError::CouldNotDelete { id: raw_id });
        };

        match self.repo.delete_by_id(id).await {
            Ok(Some(_)) => {
                tracing::info!(issue_id = %id, "issue deleted");
                Ok(id)
            }
            Ok(None) => {
                tracing::debug!(issue_id = %id, "delete target not found");
                Err(DomainError::CouldNotDelete { id: raw_id })
            }
            Err(e) => {
                tracing::error!(issue_id = %id, error = %e, "store failed during delete");
                Err(DomainError::CouldNotDelete { id: raw_id })
            }
        }
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}

fn require_id(id: Option<String>) -> Result<String, DomainError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(DomainError::MissingId),
    }
}
