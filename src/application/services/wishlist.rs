//! Wishlist service

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::{DomainError, DomainResult, Member, Product, RepositoryProvider, Wishlist};
use crate::shared::types::{paginate, PageRequest, PageResult};

/// Wishlist add/list/remove plus maintenance of the denormalized
/// per-product wishlist counter.
pub struct WishlistService {
    repos: Arc<dyn RepositoryProvider>,
}

impl WishlistService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn resolve_member(&self, email: &str) -> DomainResult<Member> {
        self.repos
            .members()
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("Member", "email", email))
    }

    async fn resolve_product(&self, product_id: i64) -> DomainResult<Product> {
        self.repos
            .products()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", "id", product_id))
    }

    /// Bookmarks a product for the member.
    ///
    /// Rejects duplicates. The existence check is not atomic with the
    /// insert; two racing adds for the same pair can both pass it.
    pub async fn add(&self, product_id: i64, email: &str) -> DomainResult<()> {
        let member = self.resolve_member(email).await?;
        let mut product = self.resolve_product(product_id).await?;

        if self.repos.wishlists().exists(member.id, product.id).await? {
            return Err(DomainError::Conflict(format!(
                "Product {} is already in the wishlist",
                product.id
            )));
        }

        product.wishlist_count += 1;
        let wishlist = Wishlist {
            id: 0,
            member_id: member.id,
            product_id: product.id,
            created_at: Utc::now(),
        };
        self.repos
            .wishlists()
            .save_with_product(wishlist, product)
            .await?;

        info!(member_id = member.id, product_id, "Wishlist entry added");
        Ok(())
    }

    /// The member's wishlist, newest entry first, one page at a time.
    pub async fn list(&self, email: &str, page: PageRequest) -> DomainResult<PageResult<Wishlist>> {
        let member = self.resolve_member(email).await?;

        let mut wishlists = self.repos.wishlists().find_by_member(member.id).await?;
        wishlists.sort_by(|a, b| b.id.cmp(&a.id));

        paginate(wishlists, page)
    }

    pub async fn remove(&self, product_id: i64, email: &str) -> DomainResult<()> {
        let member = self.resolve_member(email).await?;
        let mut product = self.resolve_product(product_id).await?;

        let wishlist = self
            .repos
            .wishlists()
            .find_by_member_and_product(member.id, product.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Wishlist", "product_id", product.id))?;

        // No floor at zero; concurrent removals can drive this negative.
        product.wishlist_count -= 1;
        self.repos
            .wishlists()
            .delete_with_product(wishlist.id, product)
            .await?;

        info!(member_id = member.id, product_id, "Wishlist entry removed");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;

    #[tokio::test]
    async fn add_persists_row_and_increments_counter() {
        let repos = InMemoryRepos::shared();
        let service = WishlistService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        let p = repos.seed_product("Jeju beach", None, None).await;

        service.add(p.id, &m.email).await.unwrap();

        let stored = repos.products().find_by_id(p.id).await.unwrap().unwrap();
        assert_eq!(stored.wishlist_count, 1);
        assert!(repos.wishlists().exists(m.id, p.id).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected_without_mutation() {
        let repos = InMemoryRepos::shared();
        let service = WishlistService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        let p = repos.seed_product("Jeju beach", None, None).await;

        service.add(p.id, &m.email).await.unwrap();
        let err = service.add(p.id, &m.email).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let stored = repos.products().find_by_id(p.id).await.unwrap().unwrap();
        assert_eq!(stored.wishlist_count, 1);
        assert_eq!(repos.wishlists().find_by_member(m.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_unknown_product_fails() {
        let repos = InMemoryRepos::shared();
        let service = WishlistService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;

        let err = service.add(42, &m.email).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Product", .. }));
    }

    #[tokio::test]
    async fn list_is_sorted_newest_first_and_paginated() {
        let repos = InMemoryRepos::shared();
        let service = WishlistService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        for i in 0..3 {
            let p = repos.seed_product(&format!("Trip {i}"), None, None).await;
            service.add(p.id, &m.email).await.unwrap();
        }

        let page = service
            .list(&m.email, PageRequest { page: 1, size: 2 })
            .await
            .unwrap();
        assert_eq!(page.total_count, 3);
        assert_eq!(page.items.len(), 2);
        assert!(page.items[0].id > page.items[1].id);
    }

    #[tokio::test]
    async fn list_rejects_window_past_end() {
        let repos = InMemoryRepos::shared();
        let service = WishlistService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;

        let err = service
            .list(&m.email, PageRequest { page: 2, size: 10 })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PageExceeded { .. }));
    }

    #[tokio::test]
    async fn empty_wishlist_first_page_is_valid() {
        let repos = InMemoryRepos::shared();
        let service = WishlistService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;

        let page = service.list(&m.email, PageRequest::default()).await.unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn remove_deletes_row_and_decrements_counter() {
        let repos = InMemoryRepos::shared();
        let service = WishlistService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        let p = repos.seed_product("Jeju beach", None, None).await;

        service.add(p.id, &m.email).await.unwrap();
        service.remove(p.id, &m.email).await.unwrap();

        let stored = repos.products().find_by_id(p.id).await.unwrap().unwrap();
        assert_eq!(stored.wishlist_count, 0);
        assert!(!repos.wishlists().exists(m.id, p.id).await.unwrap());
    }

    #[tokio::test]
    async fn remove_missing_pair_fails_without_mutation() {
        let repos = InMemoryRepos::shared();
        let service = WishlistService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        let p = repos.seed_product("Jeju beach", None, None).await;

        let err = service.remove(p.id, &m.email).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Wishlist", .. }));

        let stored = repos.products().find_by_id(p.id).await.unwrap().unwrap();
        assert_eq!(stored.wishlist_count, 0);
    }
}
