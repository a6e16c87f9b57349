//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::member::Survey;
use crate::domain::product::{Product, ProductRepository, ProductStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::product;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

pub(super) fn entity_to_domain(p: product::Model) -> Product {
    Product {
        id: p.id,
        name: p.name,
        price: p.price,
        status: match p.status {
            product::ProductStatus::ForSale => ProductStatus::ForSale,
            product::ProductStatus::SoldOut => ProductStatus::SoldOut,
            product::ProductStatus::Hidden => ProductStatus::Hidden,
        },
        content: p.content,
        content_detail: p.content_detail,
        season: p.season,
        category: p.category,
        wishlist_count: p.wishlist_count,
        created_at: p.created_at,
        updated_at: p.updated_at,
    }
}

pub(super) fn status_to_entity(s: ProductStatus) -> product::ProductStatus {
    match s {
        ProductStatus::ForSale => product::ProductStatus::ForSale,
        ProductStatus::SoldOut => product::ProductStatus::SoldOut,
        ProductStatus::Hidden => product::ProductStatus::Hidden,
    }
}

// ── SeaOrmProductRepository ─────────────────────────────────────

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all_visible(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .filter(product::Column::Status.ne(product::ProductStatus::Hidden))
            .order_by_desc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_with_season(&self, survey: &Survey) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .filter(product::Column::Status.ne(product::ProductStatus::Hidden))
            .filter(product::Column::Season.eq(survey.season.as_str()))
            .order_by_desc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_with_target(&self, survey: &Survey, target: &str) -> DomainResult<Vec<Product>> {
        // Unknown targets select nothing
        let Some(wanted) = survey.value_for(target) else {
            return Ok(Vec::new());
        };

        let models = product::Entity::find()
            .filter(product::Column::Status.ne(product::ProductStatus::Hidden))
            .filter(product::Column::Category.eq(wanted))
            .order_by_desc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, p: Product) -> DomainResult<Product> {
        let now = Utc::now();
        let model = product::ActiveModel {
            id: NotSet,
            name: Set(p.name),
            price: Set(p.price),
            status: Set(status_to_entity(p.status)),
            content: Set(p.content),
            content_detail: Set(p.content_detail),
            season: Set(p.season),
            category: Set(p.category),
            wishlist_count: Set(p.wishlist_count),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Product saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, p: Product) -> DomainResult<()> {
        let existing = product::Entity::find_by_id(p.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Product",
                field: "id",
                value: p.id.to_string(),
            });
        };

        let model = product::ActiveModel {
            id: Set(p.id),
            name: Set(p.name),
            price: Set(p.price),
            status: Set(status_to_entity(p.status)),
            content: Set(p.content),
            content_detail: Set(p.content_detail),
            season: Set(p.season),
            category: Set(p.category),
            wishlist_count: Set(p.wishlist_count),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
