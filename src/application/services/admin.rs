//! Member administration service

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, Member, RepositoryProvider};
use crate::shared::types::{paginate, PageRequest, PageResult};

/// Admin-side member management: listing, role mutation, soft delete.
pub struct AdminService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AdminService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// All members that are not soft-deleted, one page at a time.
    pub async fn list_members(&self, page: PageRequest) -> DomainResult<PageResult<Member>> {
        let members = self.repos.members().find_all_active().await?;
        paginate(members, page)
    }

    pub async fn member_detail(&self, member_id: i64) -> DomainResult<Member> {
        self.repos
            .members()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Member", "id", member_id))
    }

    pub async fn grant_admin(&self, member_id: i64) -> DomainResult<()> {
        let mut member = self.member_detail(member_id).await?;
        member.grant_admin();
        self.repos.members().update(member).await?;
        info!(member_id, "Admin role granted");
        Ok(())
    }

    pub async fn revoke_admin(&self, member_id: i64) -> DomainResult<()> {
        let mut member = self.member_detail(member_id).await?;
        if member.is_admin() {
            member.revoke_admin();
            self.repos.members().update(member).await?;
            info!(member_id, "Admin role revoked");
        }
        Ok(())
    }

    /// Marks the member deleted; the row stays in storage. Idempotent.
    pub async fn delete_member(&self, member_id: i64) -> DomainResult<()> {
        let mut member = self.member_detail(member_id).await?;
        if !member.deleted {
            member.deleted = true;
            self.repos.members().update(member).await?;
            info!(member_id, "Member soft-deleted");
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
