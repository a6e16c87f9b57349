//! Order repository interface

use async_trait::async_trait;

use super::model::Order;
use crate::domain::DomainResult;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Order>>;
    /// All orders of one member, newest first.
    async fn find_by_member(&self, member_id: i64) -> DomainResult<Vec<Order>>;
    async fn save(&self, order: Order) -> DomainResult<Order>;
    async fn update(&self, order: Order) -> DomainResult<()>;
}
