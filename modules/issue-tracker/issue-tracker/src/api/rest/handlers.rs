use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, Query};
use axum::http::Uri;
use issue_tracker_sdk::IssueFilter;

use crate::domain::service::Service;

use super::dto::{
    CreateIssueRequest, DeleteIssueRequest, IssueDto, ResultReply, UpdateIssueRequest,
};
use super::error::{ApiResult, FETCH_FAILED, SAVE_FAILED, domain_error_to_api_error};
use super::extract::IssueBody;

pub async fn list_issues(
    Extension(svc): Extension<Arc<Service>>,
    Path(project): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    uri: Uri,
) -> ApiResult<Json<Vec<IssueDto>>> {
    let filter = IssueFilter::from_query(params);
    let issues = svc
        .list_issues(&project, &filter)
        .await
        .map_err(|e| domain_error_to_api_error(e, uri.path(), FETCH_FAILED))?;

    Ok(Json(issues.into_iter().map(IssueDto::from).collect()))
}

pub async fn create_issue(
    Extension(svc): Extension<Arc<Service>>,
    Path(project): Path<String>,
    uri: Uri,
    IssueBody(req): IssueBody<CreateIssueRequest>,
) -> ApiResult<Json<IssueDto>> {
    let issue = svc
        .create_issue(&project, req.into())
        .await
        .map_err(|e| domain_error_to_api_error(e, uri.path(), SAVE_FAILED))?;

    Ok(Json(issue.into()))
}

/// The reply echoes `_id` exactly as the client sent it.
pub async fn update_issue(
    Extension(svc): Extension<Arc<Service>>,
    Path(project): Path<String>,
    uri: Uri,
    IssueBody(req): IssueBody<UpdateIssueRequest>,
) -> ApiResult<Json<ResultReply>> {
    let raw_id = req.id.clone().unwrap_or_default();
    tracing::debug!(project = %project, issue_id = %raw_id, "update requested");

    svc.update_issue(req.into())
        .await
        .map_err(|e| domain_error_to_api_error(e, uri.path(), SAVE_FAILED))?;

    Ok(Json(ResultReply::updated(raw_id)))
}

pub async fn delete_issue(
    Extension(svc): Extension<Arc<Service>>,
    Path(project): Path<String>,
    uri: Uri,
    IssueBody(req): IssueBody<DeleteIssueRequest>,
) -> ApiResult<Json<ResultReply>> {
    let raw_id = req.id.clone().unwrap_or_default();
    tracing::debug!(project = %project, issue_id = %raw_id, "delete requested");

    svc.delete_issue(req.id)
        .await
        .map_err(|e| domain_error_to_api_error(e, uri.path(), SAVE_FAILED))?;

    Ok(Json(ResultReply::deleted(raw_id)))
}
