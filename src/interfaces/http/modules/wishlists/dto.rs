//! Wishlist DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::wishlist::Wishlist;

/// One bookmarked product in a member's wishlist
#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistItem {
    pub id: i64,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn from_wishlist(w: Wishlist) -> Self {
        Self {
            id: w.id,
            product_id: w.product_id,
            created_at: w.created_at,
        }
    }
}
