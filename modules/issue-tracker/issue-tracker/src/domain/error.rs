use issue_tracker_sdk::errors::IssuesError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("required field(s) missing: {}", fields.join(", "))]
    RequiredFieldsMissing { fields: Vec<&'static str> },

    #[error("missing _id")]
    MissingId,

    #[error("no update field(s) sent")]
    NoUpdateFields { id: String },

    #[error("could not update")]
    CouldNotUpdate { id: String },

    #[error("could not delete")]
    CouldNotDelete { id: String },

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl From<DomainError> for IssuesError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::RequiredFieldsMissing { .. } => Self::RequiredFieldsMissing,
            DomainError::MissingId => Self::MissingId,
            DomainError::NoUpdateFields { id } => Self::NoUpdateFields { id },
            DomainError::CouldNotUpdate { id } => Self::CouldNotUpdate { id },
            DomainError::CouldNotDelete { id } => Self::CouldNotDelete { id },
            DomainError::Database(_) => Self::internal(),
        }
    }
}
