//! Issue Tracker Module Implementation
//!
//! The public API is defined in `issue-tracker-sdk` and re-exported here.

pub use issue_tracker_sdk::{
    Issue, IssueDraft, IssueFilter, IssueId, IssuePatch, IssuesApi, IssuesError, NewIssue,
    UpdateIssue,
};

pub mod module;
pub use module::IssueTrackerModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
