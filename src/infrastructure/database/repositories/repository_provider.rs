//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::member::MemberRepository;
use crate::domain::order::OrderRepository;
use crate::domain::product::ProductRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::wishlist::WishlistRepository;

use super::member_repository::SeaOrmMemberRepository;
use super::order_repository::SeaOrmOrderRepository;
use super::product_repository::SeaOrmProductRepository;
use super::wishlist_repository::SeaOrmWishlistRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let member = repos.members().find_by_email("a@example.com").await?;
/// let orders = repos.orders().find_by_member(member.id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    members: SeaOrmMemberRepository,
    products: SeaOrmProductRepository,
    wishlists: SeaOrmWishlistRepository,
    orders: SeaOrmOrderRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            members: SeaOrmMemberRepository::new(db.clone()),
            products: SeaOrmProductRepository::new(db.clone()),
            wishlists: SeaOrmWishlistRepository::new(db.clone()),
            orders: SeaOrmOrderRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn members(&self) -> &dyn MemberRepository {
        &self.members
    }

    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    fn wishlists(&self) -> &dyn WishlistRepository {
        &self.wishlists
    }

    fn orders(&self) -> &dyn OrderRepository {
        &self.orders
    }
}
