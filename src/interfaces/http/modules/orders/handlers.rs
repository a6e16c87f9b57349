//! Order handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{OrderResponse, PlaceOrderRequest};
use crate::application::services::OrderService;
use crate::interfaces::http::common::{
    error_response, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedMember;
use crate::shared::types::PageResult;

/// Order state
#[derive(Clone)]
pub struct OrderHandlerState {
    pub service: Arc<OrderService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = "Orders",
    security(("bearer_auth" = [])),
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Product is not for sale"),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn place_order(
    State(state): State<OrderHandlerState>,
    Extension(caller): Extension<AuthenticatedMember>,
    ValidatedJson(request): ValidatedJson<PlaceOrderRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<OrderResponse>>),
    (StatusCode, Json<ApiResponse<OrderResponse>>),
> {
    let order = state
        .service
        .place(&caller.email, request.product_id, request.quantity)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(OrderResponse::from_order(order))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of the member's orders, newest first", body = ApiResponse<PaginatedResponse<OrderResponse>>),
        (status = 400, description = "Page exceeds available data")
    )
)]
pub async fn my_orders(
    State(state): State<OrderHandlerState>,
    Extension(caller): Extension<AuthenticatedMember>,
    Query(params): Query<PaginationParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<OrderResponse>>>,
    (
        StatusCode,
        Json<ApiResponse<PaginatedResponse<OrderResponse>>>,
    ),
> {
    let request = params.to_request();
    let page = state
        .service
        .my_orders(&caller.email, request)
        .await
        .map_err(error_response)?;

    let page = PageResult {
        items: page
            .items
            .into_iter()
            .map(OrderResponse::from_order)
            .collect(),
        total_count: page.total_count,
    };

    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        page, request,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/orders/{id}/cancel",
    tag = "Orders",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order canceled"),
        (status = 400, description = "Order is not cancelable"),
        (status = 403, description = "Order belongs to another member"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn cancel_order(
    State(state): State<OrderHandlerState>,
    Extension(caller): Extension<AuthenticatedMember>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .service
        .cancel(&caller.email, id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(())))
}
