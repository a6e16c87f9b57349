//! Product catalog DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::product::Product;

/// Product row in catalog and curation listings
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub status: String,
    pub content: String,
    pub season: Option<String>,
    pub category: Option<String>,
    pub wishlist_count: i64,
}

impl ProductSummary {
    pub fn from_product(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            status: p.status.to_string(),
            content: p.content,
            season: p.season,
            category: p.category,
            wishlist_count: p.wishlist_count,
        }
    }
}

/// Full product view for the detail page
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub status: String,
    pub content: String,
    pub content_detail: Option<String>,
    pub season: Option<String>,
    pub category: Option<String>,
    pub wishlist_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductDetail {
    pub fn from_product(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            status: p.status.to_string(),
            content: p.content,
            content_detail: p.content_detail,
            season: p.season,
            category: p.category,
            wishlist_count: p.wishlist_count,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price: i64,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub content_detail: Option<String>,
    pub season: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price: i64,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub content_detail: Option<String>,
    pub season: Option<String>,
    pub category: Option<String>,
    /// "ForSale", "SoldOut" or "Hidden"
    pub status: Option<String>,
}
