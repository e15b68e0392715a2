use async_trait::async_trait;
use chrono::{DateTime, Utc};
use issue_tracker_sdk::models::{Issue, IssueDraft, IssueId, IssuePatch};
use issue_tracker_sdk::IssueFilter;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::domain::repo::IssuesRepository;

use super::entity::{self, Column, Entity as IssueEntity};
use super::mapper;

pub struct SeaOrmIssuesRepository {
    db: DatabaseConnection,
}

impl SeaOrmIssuesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translate a filter into a SQL condition scoped to `project`.
fn filter_condition(project: &str, filter: &IssueFilter) -> Condition {
    let mut condition = Condition::all().add(Column::Project.eq(project));

    if let Some(id) = filter.id {
        condition = condition.add(Column::Id.eq(id.as_uuid()));
    }
    for (column, value) in [
        (Column::IssueTitle, &filter.issue_title),
        (Column::IssueText, &filter.issue_text),
        (Column::CreatedBy, &filter.created_by),
        (Column::AssignedTo, &filter.assigned_to),
        (Column::StatusText, &filter.status_text),
    ] {
        if let Some(value) = value {
            condition = condition.add(column.eq(value.as_str()));
        }
    }
    if let Some(open) = filter.open {
        condition = condition.add(Column::Open.eq(open));
    }
    if let Some(created_on) = filter.created_on {
        condition = condition.add(Column::CreatedOn.eq(created_on));
    }
    if let Some(updated_on) = filter.updated_on {
        condition = condition.add(Column::UpdatedOn.eq(updated_on));
    }

    condition
}

fn patch_active_model(patch: &IssuePatch, updated_on: DateTime<Utc>) -> entity::ActiveModel {
    let mut active = entity::ActiveModel {
        updated_on: ActiveValue::Set(updated_on),
        ..Default::default()
    };
    if let Some(title) = &patch.issue_title {
        active.issue_title = ActiveValue::Set(title.clone());
    }
    if let Some(text) = &patch.issue_text {
        active.issue_text = ActiveValue::Set(text.clone());
    }
    if let Some(created_by) = &patch.created_by {
        active.created_by = ActiveValue::Set(created_by.clone());
    }
    if let Some(assigned_to) = &patch.assigned_to {
        active.assigned_to = ActiveValue::Set(assigned_to.clone());
    }
    if let Some(status_text) = &patch.status_text {
        active.status_text = ActiveValue::Set(status_text.clone());
    }
    if let Some(open) = patch.open {
        active.open = ActiveValue::Set(open);
    }
    active
}

#[async_trait]
impl IssuesRepository for SeaOrmIssuesRepository {
    async fn insert(&self, draft: IssueDraft) -> anyhow::Result<Issue> {
        let model = mapper::new_active_model(IssueId::generate(), draft)
            .insert(&self.db)
            .await?;

        Ok(model.into())
    }

    async fn find_many(&self, project: &str, filter: &IssueFilter) -> anyhow::Result<Vec<Issue>> {
        let models = IssueEntity::find()
            .filter(filter_condition(project, filter))
            .order_by_asc(Column::CreatedOn)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_by_id(
        &self,
        id: IssueId,
        patch: &IssuePatch,
        updated_on: DateTime<Utc>,
    ) -> anyhow::Result<Option<Issue>> {
        let mut active = patch_active_model(patch, updated_on);
        active.id = ActiveValue::Unchanged(id.as_uuid());

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_by_id(&self, id: IssueId) -> anyhow::Result<Option<Issue>> {
        let Some(existing) = IssueEntity::find_by_id(id.as_uuid()).one(&self.db).await? else {
            return Ok(None);
        };

        let result = IssueEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await?;

        Ok((result.rows_affected > 0).then(|| existing.into()))
    }
}
