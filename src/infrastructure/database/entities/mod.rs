//! Database entities module

pub mod member;
pub mod order;
pub mod product;
pub mod wishlist;

pub use member::Entity as Member;
pub use order::Entity as Order;
pub use product::Entity as Product;
pub use wishlist::Entity as Wishlist;
