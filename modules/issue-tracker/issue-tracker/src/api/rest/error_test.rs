#[cfg(test)]
mod tests {
    use super::super::dto::ErrorReply;
    use super::super::error::{ApiError, FETCH_FAILED, SAVE_FAILED, domain_error_to_api_error};
    use crate::domain::error::DomainError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn reply(e: DomainError) -> ErrorReply {
        match domain_error_to_api_error(e, "/api/issues/apitest", FETCH_FAILED) {
            ApiError::Reply(reply) => reply,
            ApiError::Problem(p) => panic!("expected reply, got problem {p:?}"),
        }
    }

    #[test]
    fn test_required_fields_missing_reply_has_no_id() {
        let r = reply(DomainError::RequiredFieldsMissing {
            fields: vec!["issue_text"],
        });
        assert_eq!(r.error, "required field(s) missing");
        assert_eq!(r.id, None);
    }

    #[test]
    fn test_missing_id_reply() {
        let r = reply(DomainError::MissingId);
        assert_eq!(r.error, "missing _id");
        assert_eq!(r.id, None);
    }

    #[test]
    fn test_id_echoed_for_update_and_delete_errors() {
        let r = reply(DomainError::NoUpdateFields {
            id: "abc".to_owned(),
        });
        assert_eq!(r.error, "no update field(s) sent");
        assert_eq!(r.id.as_deref(), Some("abc"));

        let r = reply(DomainError::CouldNotUpdate {
            id: "invalid_id".to_owned(),
        });
        assert_eq!(r.error, "could not update");
        assert_eq!(r.id.as_deref(), Some("invalid_id"));

        let r = reply(DomainError::CouldNotDelete {
            id: "invalid_id".to_owned(),
        });
        assert_eq!(r.error, "could not delete");
        assert_eq!(r.id.as_deref(), Some("invalid_id"));
    }

    #[test]
    fn test_semantic_errors_render_as_200() {
        let resp = domain_error_to_api_error(DomainError::MissingId, "/", FETCH_FAILED)
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_database_error_is_generic_problem() {
        let e = DomainError::Database(anyhow::anyhow!("connection refused at 10.0.0.1"));
        let ApiError::Problem(problem) =
            domain_error_to_api_error(e, "/api/issues/apitest", SAVE_FAILED)
        else {
            panic!("expected problem");
        };

        assert_eq!(problem.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(problem.detail, SAVE_FAILED);
        assert_eq!(problem.instance, "/api/issues/apitest");
        assert!(!problem.detail.contains("10.0.0.1"));
    }
}
