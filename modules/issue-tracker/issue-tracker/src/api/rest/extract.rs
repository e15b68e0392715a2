//! Request body extractor accepting JSON or URL-encoded forms.

use axum::body::Body;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::problem::{self, Problem};

/// Largest request body read by [`IssueBody`].
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A request body decoded from `application/x-www-form-urlencoded` when the
/// content type says so, and from JSON otherwise.
///
/// An empty body, or a body sent without any content type, decodes to
/// `T::default()`, so a missing field is reported by the service rather than
/// as a malformed request.
#[derive(Debug)]
pub struct IssueBody<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Form,
    Json,
    Untyped,
}

fn body_kind(req: &Request) -> BodyKind {
    match req.headers().get(CONTENT_TYPE) {
        None => BodyKind::Untyped,
        Some(v) if v
            .to_str()
            .is_ok_and(|ct| ct.starts_with("application/x-www-form-urlencoded")) =>
        {
            BodyKind::Form
        }
        Some(_) => BodyKind::Json,
    }
}

fn rejected(status: StatusCode, detail: String) -> Problem {
    let title = status.canonical_reason().unwrap_or("Bad Request");
    Problem::new(status, title, detail).with_code("issues.bad_request")
}

impl<S, T> FromRequest<S> for IssueBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(&req);
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| problem::bad_request(format!("failed to read request body: {e}")))?;

        if kind == BodyKind::Untyped || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        if kind == BodyKind::Form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|r| rejected(r.status(), r.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|r| rejected(r.status(), r.body_text()))?;
            Ok(Self(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Payload {
        #[serde(default)]
        name: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Payload, ApiError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        IssueBody::<Payload>::from_request(req, &()).await.map(|b| b.0)
    }

    #[tokio::test]
    async fn test_json_body() {
        let body = extract(Some("application/json"), r#"{"name":"x"}"#)
            .await
            .unwrap();
        assert_eq!(body.name.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_form_body() {
        let body = extract(
            Some("application/x-www-form-urlencoded; charset=utf-8"),
            "name=hello+world",
        )
        .await
        .unwrap();
        assert_eq!(body.name.as_deref(), Some("hello world"));
    }

    #[tokio::test]
    async fn test_empty_body_is_default() {
        let body = extract(None, "").await.unwrap();
        assert_eq!(body, Payload::default());
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_default() {
        let body = extract(None, r#"{"name":"x"}"#).await.unwrap();
        assert_eq!(body, Payload::default());
    }

    #[tokio::test]
    async fn test_unsupported_content_type_is_problem() {
        let err = extract(Some("text/plain"), "name=x").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Problem(p) if p.status == StatusCode::UNSUPPORTED_MEDIA_TYPE
        ));
    }

    #[tokio::test]
    async fn test_malformed_json_is_problem() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();
        assert!(matches!(err, ApiError::Problem(p) if p.status.is_client_error()));
    }
}
