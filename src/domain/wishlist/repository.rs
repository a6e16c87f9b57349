//! Wishlist repository interface

use async_trait::async_trait;

use super::model::Wishlist;
use crate::domain::product::Product;
use crate::domain::DomainResult;

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// All wishlist rows of one member, in storage order.
    async fn find_by_member(&self, member_id: i64) -> DomainResult<Vec<Wishlist>>;
    async fn find_by_member_and_product(
        &self,
        member_id: i64,
        product_id: i64,
    ) -> DomainResult<Option<Wishlist>>;
    async fn exists(&self, member_id: i64, product_id: i64) -> DomainResult<bool>;
    /// Inserts the wishlist row and persists the product's updated counter
    /// in one all-or-nothing unit.
    async fn save_with_product(
        &self,
        wishlist: Wishlist,
        product: Product,
    ) -> DomainResult<Wishlist>;
    /// Deletes the wishlist row and persists the product's updated counter
    /// in one all-or-nothing unit.
    async fn delete_with_product(&self, wishlist_id: i64, product: Product) -> DomainResult<()>;
}
