//! Admin member-management handlers
//!
//! All routes here sit behind the JWT + admin middleware pair.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::MemberSummary;
use crate::application::services::AdminService;
use crate::interfaces::http::common::{
    error_response, ApiResponse, PaginatedResponse, PaginationParams,
};

/// Admin state
#[derive(Clone)]
pub struct AdminHandlerState {
    pub service: Arc<AdminService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/members",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of members", body = ApiResponse<PaginatedResponse<MemberSummary>>),
        (status = 400, description = "Page exceeds available data"),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_members(
    State(state): State<AdminHandlerState>,
    Query(params): Query<PaginationParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<MemberSummary>>>,
    (
        StatusCode,
        Json<ApiResponse<PaginatedResponse<MemberSummary>>>,
    ),
> {
    let request = params.to_request();
    let page = state
        .service
        .list_members(request)
        .await
        .map_err(error_response)?;

    let page = crate::shared::types::PageResult {
        items: page.items.into_iter().map(MemberSummary::from_member).collect(),
        total_count: page.total_count,
    };

    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        page, request,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/members/{id}",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member detail", body = ApiResponse<MemberSummary>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn member_detail(
    State(state): State<AdminHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MemberSummary>>, (StatusCode, Json<ApiResponse<MemberSummary>>)> {
    let member = state
        .service
        .member_detail(id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(MemberSummary::from_member(
        member,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/members/{id}/grant-admin",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Admin role granted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn grant_admin(
    State(state): State<AdminHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.service.grant_admin(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/members/{id}/revoke-admin",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Admin role revoked"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn revoke_admin(
    State(state): State<AdminHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .service
        .revoke_admin(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/members/{id}",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member soft-deleted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<AdminHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .service
        .delete_member(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}
