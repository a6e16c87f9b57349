//! Product domain entity

use chrono::{DateTime, Utc};

/// Sale status of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    ForSale,
    SoldOut,
    /// Hidden from listings instead of deleted
    Hidden,
}

impl Default for ProductStatus {
    fn default() -> Self {
        Self::ForSale
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ForSale => write!(f, "ForSale"),
            Self::SoldOut => write!(f, "SoldOut"),
            Self::Hidden => write!(f, "Hidden"),
        }
    }
}

/// Travel product (a bookable trip)
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    pub status: ProductStatus,
    pub content: String,
    pub content_detail: Option<String>,
    /// Season the trip is sold for (e.g. "summer"); used by curation
    pub season: Option<String>,
    /// Free-form category tag (e.g. "healing", "activity")
    pub category: Option<String>,
    /// Denormalized number of wishlists pointing at this product.
    /// Maintained by the wishlist service; not floored at zero.
    pub wishlist_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_for_sale(&self) -> bool {
        self.status == ProductStatus::ForSale
    }

    pub fn hide(&mut self) {
        self.status = ProductStatus::Hidden;
    }
}
