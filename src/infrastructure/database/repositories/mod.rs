//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod member_repository;
pub mod order_repository;
pub mod product_repository;
pub mod repository_provider;
pub mod wishlist_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
