//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_members;
mod m20240101_000002_create_products;
mod m20240101_000003_create_wishlists;
mod m20240101_000004_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_members::Migration),
            Box::new(m20240101_000002_create_products::Migration),
            Box::new(m20240101_000003_create_wishlists::Migration),
            Box::new(m20240101_000004_create_orders::Migration),
        ]
    }
}
