use issue_tracker_sdk::models::{Issue, IssueDraft, IssueId};
use sea_orm::ActiveValue;

use super::entity;

impl From<entity::Model> for Issue {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: IssueId::from(entity.id),
            project: entity.project,
            issue_title: entity.issue_title,
            issue_text: entity.issue_text,
            created_by: entity.created_by,
            assigned_to: entity.assigned_to,
            status_text: entity.status_text,
            open: entity.open,
            created_on: entity.created_on,
            updated_on: entity.updated_on,
        }
    }
}

/// Active model for inserting a draft under a freshly generated identifier.
#[must_use]
pub fn new_active_model(id: IssueId, draft: IssueDraft) -> entity::ActiveModel {
    entity::ActiveModel {
        id: ActiveValue::Set(id.as_uuid()),
        project: ActiveValue::Set(draft.project),
        issue_title: ActiveValue::Set(draft.issue_title),
        issue_text: ActiveValue::Set(draft.issue_text),
        created_by: ActiveValue::Set(draft.created_by),
        assigned_to: ActiveValue::Set(draft.assigned_to),
        status_text: ActiveValue::Set(draft.status_text),
        open: ActiveValue::Set(draft.open),
        created_on: ActiveValue::Set(draft.created_on),
        updated_on: ActiveValue::Set(draft.updated_on),
    }
}
