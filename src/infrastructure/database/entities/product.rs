//! Product entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale status of a product
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ProductStatus {
    #[sea_orm(string_value = "ForSale")]
    ForSale,
    #[sea_orm(string_value = "SoldOut")]
    SoldOut,
    /// Hidden from listings instead of deleted
    #[sea_orm(string_value = "Hidden")]
    Hidden,
}

impl Default for ProductStatus {
    fn default() -> Self {
        Self::ForSale
    }
}

/// Travel product row
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique product ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Product name
    pub name: String,

    /// Price in the smallest currency unit
    pub price: i64,

    /// Sale status
    pub status: ProductStatus,

    /// Short description shown in listings
    pub content: String,

    /// Long-form detail page content
    pub content_detail: Option<String>,

    /// Season the trip is sold for (e.g. "summer")
    pub season: Option<String>,

    /// Free-form category tag (e.g. "healing")
    pub category: Option<String>,

    /// Denormalized number of wishlists pointing at this product
    pub wishlist_count: i64,

    /// When the product was created
    pub created_at: DateTime<Utc>,

    /// When the product was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wishlist::Entity")]
    Wishlist,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlist.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
