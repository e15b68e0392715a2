//! List filter for issues within a project.
//!
//! Query parameters are mapped onto an enumerated set of filterable fields.
//! Text fields compare by exact equality, `open` is coerced from text
//! (`"true"` is true, anything else is false), `_id` and timestamps are
//! parsed into their typed form.
//!
//! A key that is not recognised, or a value that cannot be coerced (a
//! malformed `_id`, a timestamp that is not RFC 3339), does not fail the
//! query. It is recorded on the filter and the filter then matches nothing,
//! which is what an unconstrained document store would return for it.

use chrono::{DateTime, Utc};

use crate::fields::IssueFields;
use crate::models::{Issue, IssueId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueFilter {
    pub id: Option<IssueId>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_on: Option<DateTime<Utc>>,
    unmatchable: Vec<String>,
}

impl IssueFilter {
    /// Build a filter from raw query pairs. Later pairs override earlier ones.
    #[must_use]
    pub fn from_query<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            filter.apply(key.as_ref(), value.into());
        }
        filter
    }

    /// Apply a single query pair.
    pub fn apply(&mut self, key: &str, value: String) {
        match key {
            IssueFields::ID => match IssueId::parse(&value) {
                Some(id) => self.id = Some(id),
                None => self.mark_unmatchable(key),
            },
            IssueFields::ISSUE_TITLE => self.issue_title = Some(value),
            IssueFields::ISSUE_TEXT => self.issue_text = Some(value),
            IssueFields::CREATED_BY => self.created_by = Some(value),
            IssueFields::ASSIGNED_TO => self.assigned_to = Some(value),
            IssueFields::STATUS_TEXT => self.status_text = Some(value),
            IssueFields::OPEN => self.open = Some(Self::parse_open(&value)),
            IssueFields::CREATED_ON => match parse_timestamp(&value) {
                Some(ts) => self.created_on = Some(ts),
                None => self.mark_unmatchable(key),
            },
            IssueFields::UPDATED_ON => match parse_timestamp(&value) {
                Some(ts) => self.updated_on = Some(ts),
                None => self.mark_unmatchable(key),
            },
            // The path segment always scopes the query.
            IssueFields::PROJECT => {
                tracing::debug!(value = %value, "ignoring project query parameter");
            }
            _ => self.mark_unmatchable(key),
        }
    }

    /// Text-to-boolean coercion used for the `open` filter.
    #[must_use]
    pub fn parse_open(raw: &str) -> bool {
        raw == "true"
    }

    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    #[must_use]
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// True when some constraint can never be satisfied.
    #[must_use]
    pub fn matches_nothing(&self) -> bool {
        !self.unmatchable.is_empty()
    }

    /// Keys that made this filter unsatisfiable.
    #[must_use]
    pub fn unmatchable_keys(&self) -> &[String] {
        &self.unmatchable
    }

    /// Evaluate the filter against an issue, ignoring project scope.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        if self.matches_nothing() {
            return false;
        }
        eq_or_any(self.id.as_ref(), &issue.id)
            && eq_or_any(self.issue_title.as_ref(), &issue.issue_title)
            && eq_or_any(self.issue_text.as_ref(), &issue.issue_text)
            && eq_or_any(self.created_by.as_ref(), &issue.created_by)
            && eq_or_any(self.assigned_to.as_ref(), &issue.assigned_to)
            && eq_or_any(self.status_text.as_ref(), &issue.status_text)
            && eq_or_any(self.open.as_ref(), &issue.open)
            && eq_or_any(self.created_on.as_ref(), &issue.created_on)
            && eq_or_any(self.updated_on.as_ref(), &issue.updated_on)
    }

    fn mark_unmatchable(&mut self, key: &str) {
        if !self.unmatchable.iter().any(|k| k == key) {
            self.unmatchable.push(key.to_owned());
        }
    }
}

fn eq_or_any<T: PartialEq>(wanted: Option<&T>, actual: &T) -> bool {
    wanted.is_none_or(|w| w == actual)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
