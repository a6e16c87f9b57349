pub mod services;

pub use services::{AdminService, CurationService, OrderService, WishlistService};
