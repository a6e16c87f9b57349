//! SeaORM implementation of WishlistRepository
//!
//! The add/remove operations also rewrite the product's denormalized
//! wishlist counter, so both writes run inside one transaction.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use crate::domain::product::Product;
use crate::domain::wishlist::{Wishlist, WishlistRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{product, wishlist};

use super::product_repository::status_to_entity;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

fn txn_err(e: sea_orm::TransactionError<sea_orm::DbErr>) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

fn entity_to_domain(w: wishlist::Model) -> Wishlist {
    Wishlist {
        id: w.id,
        member_id: w.member_id,
        product_id: w.product_id,
        created_at: w.created_at,
    }
}

fn product_to_active(p: Product, created_at: chrono::DateTime<Utc>) -> product::ActiveModel {
    product::ActiveModel {
        id: Set(p.id),
        name: Set(p.name),
        price: Set(p.price),
        status: Set(status_to_entity(p.status)),
        content: Set(p.content),
        content_detail: Set(p.content_detail),
        season: Set(p.season),
        category: Set(p.category),
        wishlist_count: Set(p.wishlist_count),
        created_at: Set(created_at),
        updated_at: Set(Utc::now()),
    }
}

// ── SeaOrmWishlistRepository ────────────────────────────────────

pub struct SeaOrmWishlistRepository {
    db: DatabaseConnection,
}

impl SeaOrmWishlistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WishlistRepository for SeaOrmWishlistRepository {
    async fn find_by_member(&self, member_id: i64) -> DomainResult<Vec<Wishlist>> {
        let models = wishlist::Entity::find()
            .filter(wishlist::Column::MemberId.eq(member_id))
            .order_by_asc(wishlist::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_member_and_product(
        &self,
        member_id: i64,
        product_id: i64,
    ) -> DomainResult<Option<Wishlist>> {
        let model = wishlist::Entity::find()
            .filter(wishlist::Column::MemberId.eq(member_id))
            .filter(wishlist::Column::ProductId.eq(product_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn exists(&self, member_id: i64, product_id: i64) -> DomainResult<bool> {
        Ok(self
            .find_by_member_and_product(member_id, product_id)
            .await?
            .is_some())
    }

    async fn save_with_product(
        &self,
        w: Wishlist,
        product: Product,
    ) -> DomainResult<Wishlist> {
        let product_created_at = product.created_at;
        let saved = self
            .db
            .transaction::<_, wishlist::Model, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    product_to_active(product, product_created_at)
                        .update(txn)
                        .await?;

                    let row = wishlist::ActiveModel {
                        id: NotSet,
                        member_id: Set(w.member_id),
                        product_id: Set(w.product_id),
                        created_at: Set(Utc::now()),
                    };
                    row.insert(txn).await
                })
            })
            .await
            .map_err(txn_err)?;

        info!(
            "Wishlist saved: member={} product={} ({})",
            saved.member_id, saved.product_id, saved.id
        );
        Ok(entity_to_domain(saved))
    }

    async fn delete_with_product(&self, wishlist_id: i64, product: Product) -> DomainResult<()> {
        let product_created_at = product.created_at;
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    product_to_active(product, product_created_at)
                        .update(txn)
                        .await?;

                    wishlist::Entity::delete_by_id(wishlist_id).exec(txn).await?;
                    Ok(())
                })
            })
            .await
            .map_err(txn_err)?;

        info!("Wishlist deleted: {}", wishlist_id);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::product_repository::entity_to_domain;
    use super::*;
    use crate::infrastructure::database::entities::member;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    async fn setup_db() -> DatabaseConnection {
        // One pooled connection, otherwise every checkout sees a fresh
        // in-memory database
        let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn seed_member(db: &DatabaseConnection, email: &str) -> i64 {
        let now = Utc::now();
        let row = member::ActiveModel {
            id: NotSet,
            email: Set(email.to_string()),
            name: Set("Member".to_string()),
            password_hash: Set("hash".to_string()),
            roles: Set("[\"USER\"]".to_string()),
            deleted: Set(false),
            survey_season: Set(None),
            survey_theme: Set(None),
            survey_companion: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        row.insert(db).await.unwrap().id
    }

    async fn seed_product(db: &DatabaseConnection, name: &str) -> Product {
        let now = Utc::now();
        let row = product::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            price: Set(100_000),
            status: Set(product::ProductStatus::ForSale),
            content: Set("content".to_string()),
            content_detail: Set(None),
            season: Set(None),
            category: Set(None),
            wishlist_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };
        entity_to_domain(row.insert(db).await.unwrap())
    }

    async fn stored_count(db: &DatabaseConnection, product_id: i64) -> i64 {
        product::Entity::find_by_id(product_id)
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .wishlist_count
    }

    #[tokio::test]
    async fn save_persists_row_and_counter_together() {
        let db = setup_db().await;
        let repo = SeaOrmWishlistRepository::new(db.clone());
        let member_id = seed_member(&db, "a@example.com").await;
        let mut p = seed_product(&db, "Jeju beach").await;
        let product_id = p.id;
        p.wishlist_count += 1;

        let saved = repo
            .save_with_product(
                Wishlist {
                    id: 0,
                    member_id,
                    product_id,
                    created_at: Utc::now(),
                },
                p,
            )
            .await
            .unwrap();

        assert!(saved.id > 0);
        assert_eq!(stored_count(&db, product_id).await, 1);
    }

    #[tokio::test]
    async fn failed_insert_rolls_back_counter_update() {
        let db = setup_db().await;
        let repo = SeaOrmWishlistRepository::new(db.clone());
        let mut p = seed_product(&db, "Jeju beach").await;
        let product_id = p.id;
        p.wishlist_count += 1;

        // member 4242 does not exist; the FK fails the second write
        let err = repo
            .save_with_product(
                Wishlist {
                    id: 0,
                    member_id: 4242,
                    product_id,
                    created_at: Utc::now(),
                },
                p,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // the counter update must have rolled back with it
        assert_eq!(stored_count(&db, product_id).await, 0);
    }

    #[tokio::test]
    async fn delete_removes_row_and_persists_counter() {
        let db = setup_db().await;
        let repo = SeaOrmWishlistRepository::new(db.clone());
        let member_id = seed_member(&db, "a@example.com").await;
        let mut p = seed_product(&db, "Jeju beach").await;
        let product_id = p.id;
        p.wishlist_count += 1;

        let saved = repo
            .save_with_product(
                Wishlist {
                    id: 0,
                    member_id,
                    product_id,
                    created_at: Utc::now(),
                },
                p,
            )
            .await
            .unwrap();

        let mut stored = entity_to_domain(
            product::Entity::find_by_id(product_id)
                .one(&db)
                .await
                .unwrap()
                .unwrap(),
        );
        stored.wishlist_count -= 1;
        repo.delete_with_product(saved.id, stored).await.unwrap();

        assert_eq!(stored_count(&db, product_id).await, 0);
        assert!(repo
            .find_by_member_and_product(member_id, product_id)
            .await
            .unwrap()
            .is_none());
    }
}
