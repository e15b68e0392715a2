//! Issue Tracker SDK
//!
//! This crate provides the public API for the issue-tracker module:
//! - `IssuesApi` trait for in-process consumers
//! - Model types (`Issue`, `IssueDraft`, `IssuePatch`, `IssueFilter`)
//! - Error type (`IssuesError`)
//!
//! ```ignore
//! let client: Arc<dyn IssuesApi> = module.client();
//! let issues = client.list_issues("apitest", IssueFilter::default()).await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod fields;
pub mod filter;
pub mod models;

pub use api::IssuesApi;
pub use errors::IssuesError;
pub use fields::IssueFields;
pub use filter::IssueFilter;
pub use models::{Issue, IssueDraft, IssueId, IssuePatch, NewIssue, UpdateIssue};
