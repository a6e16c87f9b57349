//! Curated product listing service

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Product, RepositoryProvider};
use crate::shared::types::{paginate, PageRequest, PageResult};

/// Serves product recommendations filtered by the caller's stored survey.
pub struct CurationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CurationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Curated products for one member.
    ///
    /// The member must exist and have a survey on file. `target` picks the
    /// survey dimension: `"season"` matches product seasons, anything else
    /// is an open category target resolved through the survey.
    pub async fn curated_products(
        &self,
        email: &str,
        target: &str,
        page: PageRequest,
    ) -> DomainResult<PageResult<Product>> {
        let member = self
            .repos
            .members()
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("Member", "email", email))?;

        let Some(survey) = member.survey else {
            return Err(DomainError::SurveyMissing);
        };

        let products = if target == "season" {
            self.repos.products().find_with_season(&survey).await?
        } else {
            self.repos.products().find_with_target(&survey, target).await?
        };

        paginate(products, page)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::domain::Survey;

    fn survey() -> Survey {
        Survey {
            season: "summer".into(),
            theme: "healing".into(),
            companion: "family".into(),
        }
    }

    #[tokio::test]
    async fn unknown_member_fails() {
        let repos = InMemoryRepos::shared();
        let service = CurationService::new(repos);

        let err = service
            .curated_products("ghost@example.com", "season", PageRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Member", .. }));
    }

    #[tokio::test]
    async fn member_without_survey_fails() {
        let repos = InMemoryRepos::shared();
        let service = CurationService::new(repos.clone());
        repos.seed_member("a@example.com", None).await;

        let err = service
            .curated_products("a@example.com", "season", PageRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SurveyMissing));
    }

    #[tokio::test]
    async fn season_target_matches_product_season() {
        let repos = InMemoryRepos::shared();
        let service = CurationService::new(repos.clone());
        repos.seed_member("a@example.com", Some(survey())).await;
        repos.seed_product("Jeju beach", Some("summer"), None).await;
        repos.seed_product("Ski resort", Some("winter"), None).await;

        let page = service
            .curated_products("a@example.com", "season", PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "Jeju beach");
    }

    #[tokio::test]
    async fn theme_target_matches_product_category() {
        let repos = InMemoryRepos::shared();
        let service = CurationService::new(repos.clone());
        repos.seed_member("a@example.com", Some(survey())).await;
        repos.seed_product("Temple stay", None, Some("healing")).await;
        repos.seed_product("Rafting", None, Some("activity")).await;

        let page = service
            .curated_products("a@example.com", "theme", PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "Temple stay");
    }

    #[tokio::test]
    async fn unknown_target_yields_empty_listing() {
        let repos = InMemoryRepos::shared();
        let service = CurationService::new(repos.clone());
        repos.seed_member("a@example.com", Some(survey())).await;
        repos.seed_product("Temple stay", None, Some("healing")).await;

        let page = service
            .curated_products("a@example.com", "budget", PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn page_exceeded_propagates() {
        let repos = InMemoryRepos::shared();
        let service = CurationService::new(repos.clone());
        repos.seed_member("a@example.com", Some(survey())).await;
        repos.seed_product("Jeju beach", Some("summer"), None).await;

        let err = service
            .curated_products(
                "a@example.com",
                "season",
                PageRequest { page: 4, size: 10 },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PageExceeded { .. }));
    }
}
