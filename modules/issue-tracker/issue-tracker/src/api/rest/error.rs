use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use issue_tracker_sdk::errors::IssuesError;

use crate::domain::error::DomainError;

use super::dto::ErrorReply;
use super::problem::{self, Problem};

/// Detail reported when listing fails in the store.
pub const FETCH_FAILED: &str = "An error occurred while fetching issues";
/// Detail reported when creating fails in the store.
pub const SAVE_FAILED: &str = "An error occurred while saving the issue";

/// Failure outcome of an issues handler.
///
/// Semantic errors are a normal `200` reply carrying `{error, _id?}`;
/// infrastructure failures are RFC 9457 problems.
#[derive(Debug)]
pub enum ApiError {
    Reply(ErrorReply),
    Problem(Problem),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Reply(reply) => (StatusCode::OK, Json(reply)).into_response(),
            Self::Problem(problem) => problem.into_response(),
        }
    }
}

impl From<Problem> for ApiError {
    fn from(problem: Problem) -> Self {
        Self::Problem(problem)
    }
}

/// Map a domain error to its HTTP outcome.
///
/// `failure_detail` is the generic text reported for store failures; the
/// underlying cause is logged and never sent to the client.
#[must_use]
pub fn domain_error_to_api_error(e: DomainError, instance: &str, failure_detail: &str) -> ApiError {
    if let DomainError::Database(cause) = &e {
        tracing::error!(error = %cause, instance, "store failure");
        return ApiError::Problem(
            problem::internal_error(failure_detail)
                .with_code("issues.internal")
                .with_instance(instance)
                .with_current_trace(),
        );
    }

    let err = IssuesError::from(e);
    ApiError::Reply(ErrorReply {
        error: err.to_string(),
        id: err.id().map(str::to_owned),
    })
}
