//! Product repository interface

use async_trait::async_trait;

use super::model::Product;
use crate::domain::member::Survey;
use crate::domain::DomainResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Product>>;
    /// All products visible in the public catalog (not hidden), newest first.
    async fn find_all_visible(&self) -> DomainResult<Vec<Product>>;
    /// Products whose season matches the survey's season, newest first.
    async fn find_with_season(&self, survey: &Survey) -> DomainResult<Vec<Product>>;
    /// Products whose category equals the survey value the `target` selects
    /// (see [`Survey::value_for`]), newest first. The target set is open;
    /// unknown values match nothing.
    async fn find_with_target(&self, survey: &Survey, target: &str) -> DomainResult<Vec<Product>>;
    async fn save(&self, product: Product) -> DomainResult<Product>;
    async fn update(&self, product: Product) -> DomainResult<()>;
}
