//! Wishlist domain entity

use chrono::{DateTime, Utc};

/// Association between a member and a product they bookmarked
#[derive(Debug, Clone)]
pub struct Wishlist {
    pub id: i64,
    pub member_id: i64,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
}
