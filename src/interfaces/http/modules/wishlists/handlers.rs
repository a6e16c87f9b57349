//! Wishlist handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::WishlistItem;
use crate::application::services::WishlistService;
use crate::interfaces::http::common::{
    error_response, ApiResponse, PaginatedResponse, PaginationParams,
};
use crate::interfaces::http::middleware::AuthenticatedMember;
use crate::shared::types::PageResult;

/// Wishlist state
#[derive(Clone)]
pub struct WishlistHandlerState {
    pub service: Arc<WishlistService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/wishlists/{product_id}",
    tag = "Wishlists",
    security(("bearer_auth" = [])),
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 201, description = "Product bookmarked"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Already bookmarked")
    )
)]
pub async fn add_wishlist(
    State(state): State<WishlistHandlerState>,
    Extension(caller): Extension<AuthenticatedMember>,
    Path(product_id): Path<i64>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), (StatusCode, Json<ApiResponse<()>>)> {
    state
        .service
        .add(product_id, &caller.email)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/wishlists",
    tag = "Wishlists",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of the member's wishlist", body = ApiResponse<PaginatedResponse<WishlistItem>>),
        (status = 400, description = "Page exceeds available data")
    )
)]
pub async fn list_wishlists(
    State(state): State<WishlistHandlerState>,
    Extension(caller): Extension<AuthenticatedMember>,
    Query(params): Query<PaginationParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<WishlistItem>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<WishlistItem>>>),
> {
    let request = params.to_request();
    let page = state
        .service
        .list(&caller.email, request)
        .await
        .map_err(error_response)?;

    let page = PageResult {
        items: page
            .items
            .into_iter()
            .map(WishlistItem::from_wishlist)
            .collect(),
        total_count: page.total_count,
    };

    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        page, request,
    ))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/wishlists/{product_id}",
    tag = "Wishlists",
    security(("bearer_auth" = [])),
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Bookmark removed"),
        (status = 404, description = "Product or bookmark not found")
    )
)]
pub async fn remove_wishlist(
    State(state): State<WishlistHandlerState>,
    Extension(caller): Extension<AuthenticatedMember>,
    Path(product_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .service
        .remove(product_id, &caller.email)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(())))
}
