pub mod member;
pub mod order;
pub mod product;
pub mod repositories;
pub mod wishlist;

// Re-export commonly used types
pub use member::{Member, Survey, ADMIN_ROLE};
pub use order::{Order, OrderStatus};
pub use product::{Product, ProductStatus};
pub use repositories::RepositoryProvider;
pub use wishlist::Wishlist;

pub use crate::shared::types::{DomainError, DomainResult};
