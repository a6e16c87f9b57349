pub mod admin;
pub mod auth;
pub mod curation;
pub mod health;
pub mod orders;
pub mod products;
pub mod wishlists;
