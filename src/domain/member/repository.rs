//! Member repository interface

use async_trait::async_trait;

use super::model::Member;
use crate::domain::DomainResult;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Member>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>>;
    /// All members that are not soft-deleted, ordered by id ascending.
    async fn find_all_active(&self) -> DomainResult<Vec<Member>>;
    async fn save(&self, member: Member) -> DomainResult<Member>;
    async fn update(&self, member: Member) -> DomainResult<()>;
}
