//! Public models for the issue-tracker module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the issue-tracker module and its consumers.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::fields::IssueFields;

/// Identifier of a persisted issue.
///
/// Identifiers are generated by the module on creation and never reused.
/// Client-supplied identifiers go through [`IssueId::parse`]; a string that
/// does not parse can never address an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IssueId(Uuid);

impl IssueId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a client-supplied identifier.
    ///
    /// Returns `None` for anything that is not a well-formed identifier.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::try_parse(raw.trim()).ok().map(Self)
    }

    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for IssueId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: IssueId,
    pub project: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub open: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Create input as received from a client, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewIssue {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

impl NewIssue {
    /// Names of the required fields that are absent or empty.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            (IssueFields::ISSUE_TITLE, &self.issue_title),
            (IssueFields::ISSUE_TEXT, &self.issue_text),
            (IssueFields::CREATED_BY, &self.created_by),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }
}

/// A validated issue ready to be inserted, with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub project: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub open: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl IssueDraft {
    /// Build a draft from client input.
    ///
    /// This is the only place creation defaults are applied: optional text
    /// fields become empty strings, `open` starts as `true`, and both
    /// timestamps are `now`.
    ///
    /// # Errors
    /// Returns the names of the required fields that are absent or empty.
    pub fn from_new(
        project: impl Into<String>,
        new: NewIssue,
        now: DateTime<Utc>,
    ) -> Result<Self, Vec<&'static str>> {
        let missing = new.missing_required();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            project: project.into(),
            issue_title: new.issue_title.unwrap_or_default(),
            issue_text: new.issue_text.unwrap_or_default(),
            created_by: new.created_by.unwrap_or_default(),
            assigned_to: new.assigned_to.unwrap_or_default(),
            status_text: new.status_text.unwrap_or_default(),
            open: true,
            created_on: now,
            updated_on: now,
        })
    }

    /// Attach an identifier, producing the persisted representation.
    #[must_use]
    pub fn into_issue(self, id: IssueId) -> Issue {
        Issue {
            id,
            project: self.project,
            issue_title: self.issue_title,
            issue_text: self.issue_text,
            created_by: self.created_by,
            assigned_to: self.assigned_to,
            status_text: self.status_text,
            open: self.open,
            created_on: self.created_on,
            updated_on: self.updated_on,
        }
    }
}

/// Partial replacement of the mutable issue fields.
///
/// Values are applied as-is; required-field non-emptiness is only enforced
/// on creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssuePatch {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl IssuePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issue_title.is_none()
            && self.issue_text.is_none()
            && self.created_by.is_none()
            && self.assigned_to.is_none()
            && self.status_text.is_none()
            && self.open.is_none()
    }

    /// Apply the patch to an issue, refreshing `updated_on`.
    pub fn apply_to(&self, issue: &mut Issue, updated_on: DateTime<Utc>) {
        if let Some(title) = &self.issue_title {
            issue.issue_title.clone_from(title);
        }
        if let Some(text) = &self.issue_text {
            issue.issue_text.clone_from(text);
        }
        if let Some(created_by) = &self.created_by {
            issue.created_by.clone_from(created_by);
        }
        if let Some(assigned_to) = &self.assigned_to {
            issue.assigned_to.clone_from(assigned_to);
        }
        if let Some(status_text) = &self.status_text {
            issue.status_text.clone_from(status_text);
        }
        if let Some(open) = self.open {
            issue.open = open;
        }
        issue.updated_on = updated_on;
    }
}

/// Update input as received from a client, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateIssue {
    /// Raw `_id`; absent and empty are both treated as missing.
    pub id: Option<String>,
    pub patch: IssuePatch,
}
