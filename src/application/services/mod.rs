//! Application services
//!
//! One service per bounded feature; each receives the repository provider
//! through its constructor and applies the one or two business rules the
//! operation needs before delegating to the repositories.

pub mod admin;
pub mod curation;
pub mod order;
pub mod wishlist;

#[cfg(test)]
pub(crate) mod test_support;

pub use admin::AdminService;
pub use curation::CurationService;
pub use order::OrderService;
pub use wishlist::WishlistService;
