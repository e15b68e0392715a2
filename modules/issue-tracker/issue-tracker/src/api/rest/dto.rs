use chrono::{DateTime, Utc};
use issue_tracker_sdk::models::{Issue, IssuePatch, NewIssue, UpdateIssue};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueDto {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: Uuid,
    pub project: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub open: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_on: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_on: DateTime<Utc>,
}

impl From<Issue> for IssueDto {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id.as_uuid(),
            project: issue.project,
            issue_title: issue.issue_title,
            issue_text: issue.issue_text,
            created_by: issue.created_by,
            assigned_to: issue.assigned_to,
            status_text: issue.status_text,
            open: issue.open,
            created_on: issue.created_on,
            updated_on: issue.updated_on,
        }
    }
}

/// Create body. Every field is optional on the wire; required fields are
/// checked by the service so a missing one produces a semantic error reply.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateIssueRequest {
    #[serde(default)]
    pub issue_title: Option<String>,
    #[serde(default)]
    pub issue_text: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub status_text: Option<String>,
}

impl From<CreateIssueRequest> for NewIssue {
    fn from(req: CreateIssueRequest) -> Self {
        Self {
            issue_title: req.issue_title,
            issue_text: req.issue_text,
            created_by: req.created_by,
            assigned_to: req.assigned_to,
            status_text: req.status_text,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateIssueRequest {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub issue_title: Option<String>,
    #[serde(default)]
    pub issue_text: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub status_text: Option<String>,
    /// Boolean, or the text `"true"` / `"false"` as sent by HTML forms.
    #[serde(default, deserialize_with = "deserialize_open")]
    #[schema(value_type = Option<bool>)]
    pub open: Option<bool>,
}

impl From<UpdateIssueRequest> for UpdateIssue {
    fn from(req: UpdateIssueRequest) -> Self {
        Self {
            id: req.id,
            patch: IssuePatch {
                issue_title: req.issue_title,
                issue_text: req.issue_text,
                created_by: req.created_by,
                assigned_to: req.assigned_to,
                status_text: req.status_text,
                open: req.open,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeleteIssueRequest {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
}

/// Success reply of update and delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultReply {
    pub result: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl ResultReply {
    pub const UPDATED: &'static str = "successfully updated";
    pub const DELETED: &'static str = "successfully deleted";

    #[must_use]
    pub fn updated(id: impl Into<String>) -> Self {
        Self {
            result: Self::UPDATED.to_owned(),
            id: id.into(),
        }
    }

    #[must_use]
    pub fn deleted(id: impl Into<String>) -> Self {
        Self {
            result: Self::DELETED.to_owned(),
            id: id.into(),
        }
    }
}

/// Semantic error reply, always sent with status 200.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorReply {
    pub error: String,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrText {
    Bool(bool),
    Text(String),
}

fn deserialize_open<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrText::Bool(open)) => Ok(Some(open)),
        Some(BoolOrText::Text(text)) => match text.as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(D::Error::custom(format!(
                "invalid value for open: {other:?}, expected true or false"
            ))),
        },
    }
}
