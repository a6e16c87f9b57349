//! Repository provider interface
//!
//! One accessor per aggregate; services receive `Arc<dyn RepositoryProvider>`
//! through their constructors so tests can pass in-memory fakes.

use crate::domain::member::MemberRepository;
use crate::domain::order::OrderRepository;
use crate::domain::product::ProductRepository;
use crate::domain::wishlist::WishlistRepository;

pub trait RepositoryProvider: Send + Sync {
    fn members(&self) -> &dyn MemberRepository;
    fn products(&self) -> &dyn ProductRepository;
    fn wishlists(&self) -> &dyn WishlistRepository;
    fn orders(&self) -> &dyn OrderRepository;
}
