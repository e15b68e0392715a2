#[cfg(test)]
mod tests {
    use super::super::*;
    use chrono::Utc;
    use issue_tracker_sdk::models::{Issue, IssueDraft, IssueId, NewIssue};
    use sea_orm::ActiveValue;
    use uuid::Uuid;

    #[test]
    fn test_entity_to_issue_conversion() {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let entity = entity::Model {
            id,
            project: "apitest".to_owned(),
            issue_title: "Title".to_owned(),
            issue_text: "Text".to_owned(),
            created_by: "Alice".to_owned(),
            assigned_to: String::new(),
            status_text: "In QA".to_owned(),
            open: false,
            created_on: now,
            updated_on: now,
        };

        let issue: Issue = entity.into();

        assert_eq!(issue.id.as_uuid(), id);
        assert_eq!(issue.project, "apitest");
        assert_eq!(issue.status_text, "In QA");
        assert!(!issue.open);
        assert_eq!(issue.created_on, now);
    }

    #[test]
    fn test_draft_to_active_model_sets_every_column() {
        let id = IssueId::generate();
        let new = NewIssue {
            issue_title: Some("Title".to_owned()),
            issue_text: Some("Text".to_owned()),
            created_by: Some("Alice".to_owned()),
            ..NewIssue::default()
        };
        let draft = IssueDraft::from_new("apitest", new, Utc::now()).unwrap();

        let active = mapper::new_active_model(id, draft);

        assert_eq!(active.id, ActiveValue::Set(id.as_uuid()));
        assert_eq!(active.project, ActiveValue::Set("apitest".to_owned()));
        assert_eq!(active.assigned_to, ActiveValue::Set(String::new()));
        assert_eq!(active.open, ActiveValue::Set(true));
    }
}
