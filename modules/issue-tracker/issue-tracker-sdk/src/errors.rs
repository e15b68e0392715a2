//! Error types for the issue-tracker SDK.
//!
//! The display text of every client-facing variant is the exact message
//! reported to HTTP clients.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssuesError {
    #[error("required field(s) missing")]
    RequiredFieldsMissing,

    #[error("missing _id")]
    MissingId,

    #[error("no update field(s) sent")]
    NoUpdateFields { id: String },

    #[error("could not update")]
    CouldNotUpdate { id: String },

    #[error("could not delete")]
    CouldNotDelete { id: String },

    #[error("Internal error")]
    Internal,
}

impl IssuesError {
    /// The client-supplied identifier the error refers to, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::NoUpdateFields { id }
            | Self::CouldNotUpdate { id }
            | Self::CouldNotDelete { id } => Some(id),
            Self::RequiredFieldsMissing | Self::MissingId | Self::Internal => None,
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_wire_format() {
        assert_eq!(
            IssuesError::RequiredFieldsMissing.to_string(),
            "required field(s) missing"
        );
        assert_eq!(IssuesError::MissingId.to_string(), "missing _id");
        assert_eq!(
            IssuesError::NoUpdateFields { id: "x".to_owned() }.to_string(),
            "no update field(s) sent"
        );
    }

    #[test]
    fn test_id_accessor() {
        let err = IssuesError::CouldNotDelete {
            id: "abc".to_owned(),
        };
        assert_eq!(err.id(), Some("abc"));
        assert_eq!(IssuesError::MissingId.id(), None);
    }
}
