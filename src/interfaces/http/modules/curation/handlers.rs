//! Curated product listing handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::application::services::CurationService;
use crate::interfaces::http::common::{
    error_response, ApiResponse, PaginatedResponse, PaginationParams,
};
use crate::interfaces::http::middleware::AuthenticatedMember;
use crate::interfaces::http::modules::products::dto::ProductSummary;
use crate::shared::types::PageResult;

/// Curation state
#[derive(Clone)]
pub struct CurationHandlerState {
    pub service: Arc<CurationService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/curation/{target}",
    tag = "Curation",
    security(("bearer_auth" = [])),
    params(
        ("target" = String, Path, description = "Curation target: \"season\" or an open category target"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "One page of curated products", body = ApiResponse<PaginatedResponse<ProductSummary>>),
        (status = 400, description = "Page exceeds available data"),
        (status = 404, description = "Member not found"),
        (status = 412, description = "Member has no survey on file")
    )
)]
pub async fn curated_products(
    State(state): State<CurationHandlerState>,
    Extension(caller): Extension<AuthenticatedMember>,
    Path(target): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<ProductSummary>>>,
    (
        StatusCode,
        Json<ApiResponse<PaginatedResponse<ProductSummary>>>,
    ),
> {
    let request = params.to_request();
    let page = state
        .service
        .curated_products(&caller.email, &target, request)
        .await
        .map_err(error_response)?;

    let page = PageResult {
        items: page
            .items
            .into_iter()
            .map(ProductSummary::from_product)
            .collect(),
        total_count: page.total_count,
    };

    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        page, request,
    ))))
}
