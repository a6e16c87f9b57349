//! Order service

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::{DomainError, DomainResult, Member, Order, OrderStatus, RepositoryProvider};
use crate::shared::types::{paginate, PageRequest, PageResult};

/// Order placement, per-member history and cancellation.
pub struct OrderService {
    repos: Arc<dyn RepositoryProvider>,
}

impl OrderService {
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

    pub async fn place(&self, email: &str, product_id: i64, quantity: i32) -> DomainResult<Order> {
        let member = self.resolve_member(email).await?;

        let product = self
            .repos
            .products()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", "id", product_id))?;

        if !product.is_for_sale() {
            return Err(DomainError::Validation(format!(
                "Product {} is not for sale",
                product.id
            )));
        }
        if quantity < 1 {
            return Err(DomainError::Validation(
                "Order quantity must be at least 1".to_string(),
            ));
        }

        let order = self
            .repos
            .orders()
            .save(Order {
                id: 0,
                member_id: member.id,
                product_id: product.id,
                quantity,
                status: OrderStatus::Pending,
                order_date: Utc::now(),
            })
            .await?;

        info!(member_id = member.id, product_id, order_id = order.id, "Order placed");
        Ok(order)
    }

    /// The member's orders, newest first, one page at a time.
    pub async fn my_orders(&self, email: &str, page: PageRequest) -> DomainResult<PageResult<Order>> {
        let member = self.resolve_member(email).await?;
        let orders = self.repos.orders().find_by_member(member.id).await?;
        paginate(orders, page)
    }

    /// Cancels a pending order owned by the caller.
    pub async fn cancel(&self, email: &str, order_id: i64) -> DomainResult<()> {
        let member = self.resolve_member(email).await?;

        let mut order = self
            .repos
            .orders()
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", "id", order_id))?;

        if order.member_id != member.id {
            return Err(DomainError::Forbidden(
                "Order belongs to another member".to_string(),
            ));
        }
        if !order.is_cancelable() {
            return Err(DomainError::Validation(format!(
                "Order {} is {} and cannot be canceled",
                order.id, order.status
            )));
        }

        order.status = OrderStatus::Canceled;
        self.repos.orders().update(order).await?;

        info!(member_id = member.id, order_id, "Order canceled");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::domain::ProductStatus;

    #[tokio::test]
    async fn place_persists_pending_order() {
        let repos = InMemoryRepos::shared();
        let service = OrderService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        let p = repos.seed_product("Jeju beach", None, None).await;

        let order = service.place(&m.email, p.id, 2).await.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.quantity, 2);
        assert!(repos.orders().find_by_id(order.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn place_rejects_hidden_product() {
        let repos = InMemoryRepos::shared();
        let service = OrderService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        let mut p = repos.seed_product("Jeju beach", None, None).await;
        p.status = ProductStatus::Hidden;
        repos.products().update(p.clone()).await.unwrap();

        let err = service.place(&m.email, p.id, 1).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn place_rejects_zero_quantity() {
        let repos = InMemoryRepos::shared();
        let service = OrderService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        let p = repos.seed_product("Jeju beach", None, None).await;

        let err = service.place(&m.email, p.id, 0).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn my_orders_paginates_newest_first() {
        let repos = InMemoryRepos::shared();
        let service = OrderService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        let p = repos.seed_product("Jeju beach", None, None).await;
        for _ in 0..3 {
            service.place(&m.email, p.id, 1).await.unwrap();
        }

        let page = service
            .my_orders(&m.email, PageRequest { page: 1, size: 2 })
            .await
            .unwrap();
        assert_eq!(page.total_count, 3);
        assert_eq!(page.items.len(), 2);
        assert!(page.items[0].id > page.items[1].id);
    }

    #[tokio::test]
    async fn cancel_requires_ownership() {
        let repos = InMemoryRepos::shared();
        let service = OrderService::new(repos.clone());
        let owner = repos.seed_member("a@example.com", None).await;
        let other = repos.seed_member("b@example.com", None).await;
        let p = repos.seed_product("Jeju beach", None, None).await;
        let order = service.place(&owner.email, p.id, 1).await.unwrap();

        let err = service.cancel(&other.email, order.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[tokio::test]
    async fn cancel_rejects_non_pending_order() {
        let repos = InMemoryRepos::shared();
        let service = OrderService::new(repos.clone());
        let m = repos.seed_member("a@example.com", None).await;
        let p = repos.seed_product("Jeju beach", None, None).await;
        let order = service.place(&m.email, p.id, 1).await.unwrap();

        service.cancel(&m.email, order.id).await.unwrap();
        let err = service.cancel(&m.email, order.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
