//! Product catalog handlers
//!
//! Listing and detail are public; create/update/hide sit behind the
//! JWT + admin middleware pair.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use super::dto::{CreateProductRequest, ProductDetail, ProductSummary, UpdateProductRequest};
use crate::domain::product::{Product, ProductStatus};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    error_response, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};
use crate::shared::types::{paginate, PageResult};

/// Product state
#[derive(Clone)]
pub struct ProductHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
}

fn parse_status(s: &str) -> Option<ProductStatus> {
    match s {
        "ForSale" => Some(ProductStatus::ForSale),
        "SoldOut" => Some(ProductStatus::SoldOut),
        "Hidden" => Some(ProductStatus::Hidden),
        _ => None,
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of visible products", body = ApiResponse<PaginatedResponse<ProductSummary>>),
        (status = 400, description = "Page exceeds available data")
    )
)]
pub async fn list_products(
    State(state): State<ProductHandlerState>,
    Query(params): Query<PaginationParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<ProductSummary>>>,
    (
        StatusCode,
        Json<ApiResponse<PaginatedResponse<ProductSummary>>>,
    ),
> {
    let request = params.to_request();
    let products = state
        .repos
        .products()
        .find_all_visible()
        .await
        .map_err(error_response)?;

    let page = paginate(products, request).map_err(error_response)?;
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

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product detail", body = ApiResponse<ProductDetail>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<ProductHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ProductDetail>>, (StatusCode, Json<ApiResponse<ProductDetail>>)> {
    let product = state
        .repos
        .products()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Product", "id", id)))?;

    Ok(Json(ApiResponse::success(ProductDetail::from_product(
        product,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    security(("bearer_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductDetail>),
        (status = 403, description = "Caller is not an admin"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<ProductHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ProductDetail>>),
    (StatusCode, Json<ApiResponse<ProductDetail>>),
> {
    let now = Utc::now();
    let product = state
        .repos
        .products()
        .save(Product {
            id: 0,
            name: request.name,
            price: request.price,
            status: ProductStatus::ForSale,
            content: request.content,
            content_detail: request.content_detail,
            season: request.season,
            category: request.category,
            wishlist_count: 0,
            created_at: now,
            updated_at: now,
        })
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ProductDetail::from_product(product))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductDetail>),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_product(
    State(state): State<ProductHandlerState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ApiResponse<ProductDetail>>, (StatusCode, Json<ApiResponse<ProductDetail>>)> {
    let mut product = state
        .repos
        .products()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Product", "id", id)))?;

    if let Some(status) = request.status.as_deref() {
        let Some(status) = parse_status(status) else {
            return Err(error_response(DomainError::Validation(format!(
                "Unknown product status: {}",
                status
            ))));
        };
        product.status = status;
    }

    product.name = request.name;
    product.price = request.price;
    product.content = request.content;
    product.content_detail = request.content_detail;
    product.season = request.season;
    product.category = request.category;

    state
        .repos
        .products()
        .update(product.clone())
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(ProductDetail::from_product(
        product,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/hide",
    tag = "Products",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product hidden from listings"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn hide_product(
    State(state): State<ProductHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let mut product = state
        .repos
        .products()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Product", "id", id)))?;

    product.hide();
    state
        .repos
        .products()
        .update(product)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(())))
}
