/// Wire names of the issue attributes.
pub struct IssueFields;

impl IssueFields {
    pub const ID: &'static str = "_id";
    pub const PROJECT: &'static str = "project";
    pub const ISSUE_TITLE: &'static str = "issue_title";
    pub const ISSUE_TEXT: &'static str = "issue_text";
    pub const CREATED_BY: &'static str = "created_by";
    pub const ASSIGNED_TO: &'static str = "assigned_to";
    pub const STATUS_TEXT: &'static str = "status_text";
    pub const OPEN: &'static str = "open";
    pub const CREATED_ON: &'static str = "created_on";
    pub const UPDATED_ON: &'static str = "updated_on";
}
